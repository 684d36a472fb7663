use super::frequency::{Counted, mode};
use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Trip};
use serde::Serialize;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeReport {
    pub month: Counted<String>,
    pub day: Counted<String>,
    pub hour: Counted<String>,
}

pub fn time_stats(dataset: &Dataset) -> AppResult<TimeReport> {
    let trips = dataset.trips();
    let most_common = |pick: fn(&Trip) -> &str| {
        mode(trips.iter().map(pick))
            .map(|c| c.map(str::to_string))
            .ok_or(AppError::EmptyDataset {
                report: "time statistics",
            })
    };

    Ok(TimeReport {
        month: most_common(|t| t.month.as_str())?,
        day: most_common(|t| t.day.as_str())?,
        hour: most_common(|t| t.hour.as_str())?,
    })
}
