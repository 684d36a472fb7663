// src/export/model.rs

use crate::core::stats::{ColumnReport, Counted, StationReport, Summary, TimeReport, UserReport};
use crate::utils::format_span;
use crate::utils::time::span_seconds;
use serde::Serialize;

/// Selectors and size of the analysed dataset.
#[derive(Serialize, Clone, Debug)]
pub struct Selection {
    pub city: String,
    pub month: String,
    pub day: String,
    pub records: usize,
}

#[derive(Serialize, Clone, Debug)]
pub struct DurationExport {
    pub total_seconds: f64,
    pub total: String,
    pub mean_seconds: f64,
    pub mean: String,
    pub trips: usize,
}

/// Structured document for JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport<'a> {
    pub selection: &'a Selection,
    pub time: &'a TimeReport,
    pub station: &'a StationReport,
    pub duration: DurationExport,
    pub user: &'a UserReport,
}

impl<'a> ReportExport<'a> {
    pub fn new(selection: &'a Selection, summary: &'a Summary) -> Self {
        let d = &summary.duration;
        Self {
            selection,
            time: &summary.time,
            station: &summary.station,
            duration: DurationExport {
                total_seconds: span_seconds(d.total),
                total: format_span(d.total),
                mean_seconds: span_seconds(d.mean),
                mean: format_span(d.mean),
                trips: d.trips,
            },
            user: &summary.user,
        }
    }
}

/// Flat row for CSV export: one statistic per row.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub section: &'static str,
    pub label: String,
    pub value: String,
    pub count: Option<usize>,
}

impl ReportRow {
    fn new(section: &'static str, label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            section,
            label: label.into(),
            value: value.to_string(),
            count: None,
        }
    }

    fn counted<T: ToString>(section: &'static str, label: impl Into<String>, c: &Counted<T>) -> Self {
        Self {
            count: Some(c.count),
            ..Self::new(section, label, c.value.to_string())
        }
    }
}

fn table_rows(
    out: &mut Vec<ReportRow>,
    label: &str,
    report: &ColumnReport<Vec<Counted<String>>>,
) {
    match report {
        ColumnReport::Unavailable => out.push(ReportRow::new("user", label, "not available")),
        ColumnReport::Empty => out.push(ReportRow::new("user", label, "no data")),
        ColumnReport::Present(rows) => {
            for c in rows {
                out.push(ReportRow::counted("user", label, c));
            }
        }
    }
}

/// Flatten all four reports, in report order.
pub(crate) fn summary_to_rows(selection: &Selection, summary: &Summary) -> Vec<ReportRow> {
    let mut out = vec![
        ReportRow::new("selection", "city", &selection.city),
        ReportRow::new("selection", "month", &selection.month),
        ReportRow::new("selection", "day", &selection.day),
        ReportRow::new("selection", "records", selection.records),
        ReportRow::counted("time", "most_common_month", &summary.time.month),
        ReportRow::counted("time", "most_common_day", &summary.time.day),
        ReportRow::counted("time", "most_common_hour", &summary.time.hour),
        ReportRow::counted(
            "station",
            "most_common_start_station",
            &summary.station.start_station,
        ),
        ReportRow::counted(
            "station",
            "most_common_end_station",
            &summary.station.end_station,
        ),
    ];

    for c in &summary.station.top_routes {
        out.push(ReportRow::counted("station", "top_route", c));
    }

    out.push(ReportRow::new(
        "duration",
        "total_travel_time",
        format_span(summary.duration.total),
    ));
    out.push(ReportRow::new(
        "duration",
        "mean_travel_time",
        format_span(summary.duration.mean),
    ));

    table_rows(&mut out, "user_type", &summary.user.user_types);
    table_rows(&mut out, "gender", &summary.user.genders);

    match &summary.user.birth_years {
        ColumnReport::Unavailable => {
            out.push(ReportRow::new("user", "birth_year", "not available"))
        }
        ColumnReport::Empty => out.push(ReportRow::new("user", "birth_year", "no data")),
        ColumnReport::Present(b) => {
            out.push(ReportRow::new("user", "earliest_birth_year", b.earliest));
            out.push(ReportRow::new("user", "most_recent_birth_year", b.most_recent));
            out.push(ReportRow::counted(
                "user",
                "most_common_birth_year",
                &b.most_common,
            ));
        }
    }

    out
}
