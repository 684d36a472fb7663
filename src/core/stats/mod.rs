//! Statistics engine: four independent reports over a dataset.
//!
//! Every report function is pure and takes the dataset by reference.

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationReport, duration_stats, duration_sum};
pub use frequency::{Counted, frequency_table, mode, top_n};
pub use station::{Route, StationReport, TOP_ROUTES, station_stats};
pub use time::{TimeReport, time_stats};
pub use user::{BirthYearStats, ColumnReport, UserReport, user_stats};

use crate::errors::AppResult;
use crate::models::Dataset;

/// All four reports for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub time: TimeReport,
    pub station: StationReport,
    pub duration: DurationReport,
    pub user: UserReport,
}

impl Summary {
    /// Run time → station → duration → user, stopping at the first failure.
    pub fn compute(dataset: &Dataset) -> AppResult<Self> {
        Ok(Self {
            time: time_stats(dataset)?,
            station: station_stats(dataset)?,
            duration: duration_stats(dataset)?,
            user: user_stats(dataset)?,
        })
    }
}
