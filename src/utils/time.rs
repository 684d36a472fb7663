//! Time utilities: rendering trip durations and elapsed wall-clock time.

use chrono::TimeDelta;
use std::time::Duration;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Render a span as `N days HH:MM:SS`, with `.mmm` when there are
/// milliseconds and a leading `-` for negative spans.
pub fn format_span(span: TimeDelta) -> String {
    let sign = if span < TimeDelta::zero() { "-" } else { "" };
    let ms = span.abs().num_milliseconds();

    let days = ms / MS_PER_DAY;
    let hours = (ms % MS_PER_DAY) / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;

    let unit = if days == 1 { "day" } else { "days" };
    if millis == 0 {
        format!("{sign}{days} {unit} {hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{sign}{days} {unit} {hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}

/// Span as fractional seconds (used by exports).
pub fn span_seconds(span: TimeDelta) -> f64 {
    span.num_milliseconds() as f64 / MS_PER_SECOND as f64
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.4} seconds", elapsed.as_secs_f64())
}
