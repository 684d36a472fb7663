//! Turns report values into `label: value` lines for the terminal.

use crate::config::Config;
use crate::core::stats::{
    ColumnReport, Counted, DurationReport, StationReport, TOP_ROUTES, TimeReport, UserReport,
};
use crate::models::Dataset;
use crate::ui::messages::header_text;
use crate::utils::table::{Column, Table};
use crate::utils::{format_elapsed, format_span};
use std::time::Duration;

pub const TIME_TITLE: &str = "The Most Frequent Times of Travel";
pub const STATION_TITLE: &str = "The Most Popular Stations and Trip";
pub const DURATION_TITLE: &str = "Trip Duration";
pub const USER_TITLE: &str = "User Stats";

const NOT_AVAILABLE: &str = "not available";
const NO_DATA: &str = "no data for the selected filters";

pub struct Renderer {
    separator: String,
    show_timing: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> Self {
        Self {
            separator: cfg.separator(),
            show_timing: cfg.show_timing,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Title, body and optional timing line, closed by the divider.
    pub fn section(&self, title: &str, body: &str, elapsed: Option<Duration>) -> String {
        let mut out = String::new();
        out.push_str(&header_text(title));
        out.push_str("\n\n");
        out.push_str(body);
        if self.show_timing
            && let Some(e) = elapsed
        {
            out.push_str(&format!("\nThis took {}.\n", format_elapsed(e)));
        }
        out.push_str(&self.separator);
        out.push('\n');
        out
    }

    pub fn raw_rows(&self, dataset: &Dataset, offset: usize, count: usize) -> String {
        let columns = dataset
            .headers
            .iter()
            .map(|h| Column::left(h.as_str()))
            .collect();
        let mut table = Table::new(columns);
        for row in dataset.raw_rows(offset, count) {
            table.add_row(row.to_vec());
        }
        table.render()
    }
}

fn line(out: &mut String, label: &str, value: impl std::fmt::Display) {
    out.push_str(&format!("{label}: {value}\n"));
}

fn counted(c: &Counted<String>) -> String {
    format!("{} (count: {})", c.value, c.count)
}

fn indent(block: &str) -> String {
    block
        .lines()
        .map(|l| format!("    {l}\n"))
        .collect::<String>()
}

pub fn time_body(report: &TimeReport) -> String {
    let mut out = String::new();
    line(&mut out, "Most common month", counted(&report.month));
    line(&mut out, "Most common day", counted(&report.day));
    line(&mut out, "Most common start hour", counted(&report.hour));
    out
}

pub fn station_body(report: &StationReport) -> String {
    let mut out = String::new();
    line(
        &mut out,
        "Most commonly used start station",
        counted(&report.start_station),
    );
    line(
        &mut out,
        "Most commonly used end station",
        counted(&report.end_station),
    );

    let mut table = Table::new(vec![
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::right("Trips"),
    ]);
    for c in &report.top_routes {
        table.add_row(vec![
            c.value.start.clone(),
            c.value.end.clone(),
            c.count.to_string(),
        ]);
    }
    line(
        &mut out,
        &format!("Top {TOP_ROUTES} most frequent trips"),
        report.top_routes.len(),
    );
    out.push_str(&indent(&table.render()));
    out
}

pub fn duration_body(report: &DurationReport) -> String {
    let mut out = String::new();
    line(&mut out, "Total travel time", format_span(report.total));
    line(&mut out, "Mean travel time", format_span(report.mean));
    line(&mut out, "Trips", report.trips);
    out
}

fn frequency_block(out: &mut String, label: &str, report: &ColumnReport<Vec<Counted<String>>>) {
    match report {
        ColumnReport::Unavailable => line(out, label, NOT_AVAILABLE),
        ColumnReport::Empty => line(out, label, NO_DATA),
        ColumnReport::Present(rows) if rows.is_empty() => line(out, label, NO_DATA),
        ColumnReport::Present(rows) => {
            line(out, label, rows.len());
            let mut table = Table::new(vec![Column::left("Category"), Column::right("Count")]);
            for c in rows {
                table.add_row(vec![c.value.clone(), c.count.to_string()]);
            }
            out.push_str(&indent(&table.render()));
        }
    }
}

pub fn user_body(report: &UserReport) -> String {
    let mut out = String::new();
    frequency_block(&mut out, "User type counts", &report.user_types);
    frequency_block(&mut out, "Gender counts", &report.genders);

    match &report.birth_years {
        ColumnReport::Unavailable => line(&mut out, "Birth year", NOT_AVAILABLE),
        ColumnReport::Empty => line(&mut out, "Birth year", NO_DATA),
        ColumnReport::Present(b) => {
            line(&mut out, "Earliest birth year", b.earliest);
            line(&mut out, "Most recent birth year", b.most_recent);
            line(
                &mut out,
                "Most common birth year",
                format!("{} (count: {})", b.most_common.value, b.most_common.count),
            );
        }
    }
    out
}
