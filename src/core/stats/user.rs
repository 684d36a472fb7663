use super::frequency::{Counted, frequency_table, mode};
use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, OptionalColumn, Trip};
use serde::Serialize;

/// Outcome for a statistic built on an optional column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ColumnReport<T> {
    /// The column does not exist in this city's data.
    Unavailable,
    /// The column exists but every selected record left it blank.
    Empty,
    Present(T),
}

impl<T> ColumnReport<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ColumnReport::Unavailable)
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            ColumnReport::Present(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Counted<i32>,
}

/// Rider breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub user_types: ColumnReport<Vec<Counted<String>>>,
    pub genders: ColumnReport<Vec<Counted<String>>>,
    pub birth_years: ColumnReport<BirthYearStats>,
}

pub fn user_stats(dataset: &Dataset) -> AppResult<UserReport> {
    let trips = dataset.trips();

    let table = |column: OptionalColumn, pick: fn(&Trip) -> Option<&str>| {
        if dataset.has(column) {
            let counted: Vec<Counted<String>> = frequency_table(trips.iter().filter_map(pick))
                .into_iter()
                .map(|c| c.map(str::to_string))
                .collect();
            ColumnReport::Present(counted)
        } else {
            ColumnReport::Unavailable
        }
    };

    let user_types = table(OptionalColumn::UserType, |t| t.user_type.as_deref());
    let genders = table(OptionalColumn::Gender, |t| t.gender.as_deref());

    let birth_years = if !dataset.has(OptionalColumn::BirthYear) {
        ColumnReport::Unavailable
    } else if dataset.is_empty() {
        return Err(AppError::EmptyDataset {
            report: "birth year statistics",
        });
    } else {
        birth_year_stats(trips.iter().filter_map(|t| t.birth_year))
    };

    Ok(UserReport {
        user_types,
        genders,
        birth_years,
    })
}

fn birth_year_stats(years: impl Iterator<Item = i32> + Clone) -> ColumnReport<BirthYearStats> {
    let (Some(earliest), Some(most_recent), Some(most_common)) =
        (years.clone().min(), years.clone().max(), mode(years))
    else {
        return ColumnReport::Empty;
    };

    ColumnReport::Present(BirthYearStats {
        earliest,
        most_recent,
        most_common,
    })
}
