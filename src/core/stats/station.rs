use super::frequency::{Counted, mode, top_n};
use crate::errors::{AppError, AppResult};
use crate::models::Dataset;
use serde::Serialize;
use std::fmt;

/// Number of start → end combinations listed in the station report.
pub const TOP_ROUTES: usize = 3;

/// A start → end station combination. Ordered by start, then end.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Route {
    pub start: String,
    pub end: String,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Most popular stations and trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReport {
    pub start_station: Counted<String>,
    pub end_station: Counted<String>,
    pub top_routes: Vec<Counted<Route>>,
}

pub fn station_stats(dataset: &Dataset) -> AppResult<StationReport> {
    let trips = dataset.trips();
    let empty = || AppError::EmptyDataset {
        report: "station statistics",
    };

    let start_station = mode(trips.iter().map(|t| t.start_station.as_str()))
        .ok_or_else(empty)?
        .map(str::to_string);
    let end_station = mode(trips.iter().map(|t| t.end_station.as_str()))
        .ok_or_else(empty)?
        .map(str::to_string);

    let top_routes = top_n(trips.iter().map(|t| t.route()), TOP_ROUTES)
        .into_iter()
        .map(|c| {
            c.map(|(start, end)| Route {
                start: start.to_string(),
                end: end.to_string(),
            })
        })
        .collect();

    Ok(StationReport {
        start_station,
        end_station,
        top_routes,
    })
}
