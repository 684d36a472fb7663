//! Subcommand handlers and the report printing they share.

pub mod cities;
pub mod config;
pub mod explore;
pub mod report;

use crate::config::Config;
use crate::core::Loader;
use crate::core::stats::{duration_stats, station_stats, time_stats, user_stats};
use crate::errors::AppResult;
use crate::models::{Calendar, CityCatalog, Dataset};
use crate::ui::messages::warning_text;
use crate::ui::render::{
    DURATION_TITLE, Renderer, STATION_TITLE, TIME_TITLE, USER_TITLE, duration_body, station_body,
    time_body, user_body,
};
use std::io::Write;
use std::time::Instant;
use tracing::debug;

/// Loader over the standard cities, reading from the configured data directory.
pub(crate) fn loader_for(cfg: &Config, calendar: Calendar) -> Loader {
    Loader::new(CityCatalog::standard(), calendar, cfg.data_path())
}

/// Run one report and print it as a section.
///
/// A recoverable failure (no records) is printed as a warning instead.
fn timed_section<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    title: &str,
    build: impl FnOnce() -> AppResult<String>,
) -> AppResult<()> {
    let started = Instant::now();
    match build() {
        Ok(body) => {
            let elapsed = started.elapsed();
            debug!(report = title, elapsed_us = elapsed.as_micros() as u64, "Report computed");
            write!(out, "\n{}", renderer.section(title, &body, Some(elapsed)))?;
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            writeln!(out, "\n{}", warning_text(format!("Skipping '{title}': {e}")))?;
            writeln!(out, "{}", renderer.separator())?;
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Print time → station → duration → user reports for `dataset`.
pub(crate) fn print_reports<W: Write>(
    out: &mut W,
    renderer: &Renderer,
    dataset: &Dataset,
) -> AppResult<()> {
    timed_section(out, renderer, TIME_TITLE, || {
        time_stats(dataset).map(|r| time_body(&r))
    })?;
    timed_section(out, renderer, STATION_TITLE, || {
        station_stats(dataset).map(|r| station_body(&r))
    })?;
    timed_section(out, renderer, DURATION_TITLE, || {
        duration_stats(dataset).map(|r| duration_body(&r))
    })?;
    timed_section(out, renderer, USER_TITLE, || {
        user_stats(dataset).map(|r| user_body(&r))
    })?;
    out.flush()?;
    Ok(())
}
