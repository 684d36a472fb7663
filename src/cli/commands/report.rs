use crate::cli::commands::{loader_for, print_reports};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter;
use crate::core::stats::Summary;
use crate::errors::{AppError, AppResult};
use crate::export::{Selection, export_summary};
use crate::models::Calendar;
use crate::ui::messages::{info_text, warning_text};
use crate::ui::render::Renderer;
use std::io::{self, Write};
use std::path::Path;

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        city,
        month,
        day,
        raw,
        export,
        format,
        force,
    } = cmd
    {
        let calendar = Calendar::english();

        // Validate every selector before touching the data files
        let month = calendar.parse_month(month)?;
        let day = calendar.parse_day(day)?;

        let loader = loader_for(cfg, calendar);
        let city_key = loader
            .catalog()
            .resolve(city)
            .map(|c| c.key)
            .ok_or_else(|| {
                AppError::InvalidSelector(format!(
                    "unknown city '{}' (expected one of: {})",
                    city.trim(),
                    loader.catalog().keys().join(", ")
                ))
            })?;

        let dataset = loader.load(city_key)?;
        let filtered = filter(&dataset, month, day);
        let renderer = Renderer::new(cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        if filtered.is_empty() {
            writeln!(
                out,
                "{}",
                warning_text(format!(
                    "No trips in {city_key} for month '{month}' and day '{day}'."
                ))
            )?;
        } else {
            writeln!(
                out,
                "{}",
                info_text(format!(
                    "{} trips in {city_key} (month: {month}, day: {day})",
                    filtered.len()
                ))
            )?;
            print_reports(&mut out, &renderer, &filtered)?;
        }

        if let Some(n) = raw
            && *n > 0
            && !filtered.is_empty()
        {
            write!(out, "\n{}", renderer.raw_rows(&filtered, 0, *n))?;
        }
        out.flush()?;
        drop(out);

        if let Some(file) = export {
            let summary = Summary::compute(&filtered)?;
            let selection = Selection {
                city: city_key.to_string(),
                month: month.to_string(),
                day: day.to_string(),
                records: filtered.len(),
            };
            export_summary(&selection, &summary, Path::new(file), *format, *force)?;
        }
    }

    Ok(())
}
