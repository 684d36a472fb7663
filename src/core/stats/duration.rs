use crate::errors::{AppError, AppResult};
use crate::models::Dataset;
use chrono::TimeDelta;

/// Total and average trip duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationReport {
    pub total: TimeDelta,
    pub mean: TimeDelta,
    pub trips: usize,
}

const NANOS_PER_SEC: i128 = 1_000_000_000;

fn total_nanos(span: TimeDelta) -> i128 {
    i128::from(span.num_seconds()) * NANOS_PER_SEC + i128::from(span.subsec_nanos())
}

/// Sum of all trip durations; zero for an empty dataset.
pub fn duration_sum(dataset: &Dataset) -> TimeDelta {
    dataset.trips().iter().map(|t| t.duration).sum()
}

pub fn duration_stats(dataset: &Dataset) -> AppResult<DurationReport> {
    let trips = dataset.len();
    if trips == 0 {
        return Err(AppError::EmptyDataset {
            report: "trip duration statistics",
        });
    }

    let total = duration_sum(dataset);
    let mean_ns = total_nanos(total) / trips as i128;
    // |mean| <= max |duration|, so the seconds part always fits back into i64
    let mean = TimeDelta::seconds(mean_ns.div_euclid(NANOS_PER_SEC) as i64)
        + TimeDelta::nanoseconds(mean_ns.rem_euclid(NANOS_PER_SEC) as i64);

    Ok(DurationReport { total, mean, trips })
}
