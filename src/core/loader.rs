//! Dataset loader: city → CSV file → trips with derived time fields.

use crate::errors::{AppError, AppResult};
use crate::models::{Calendar, City, CityCatalog, Dataset, OptionalColumn, OptionalColumns, Trip};
use chrono::NaiveDateTime;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";

/// Timestamp layouts accepted in `Start Time` / `End Time`.
const TIMESTAMP_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

pub struct Loader {
    catalog: CityCatalog,
    calendar: Calendar,
    data_dir: PathBuf,
}

impl Loader {
    pub fn new(catalog: CityCatalog, calendar: Calendar, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            calendar,
            data_dir: data_dir.into(),
        }
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, city: &City) -> PathBuf {
        city.path(&self.data_dir)
    }

    /// Load every trip of a city.
    ///
    /// The file handle lives only for the duration of this call.
    pub fn load(&self, city_selector: &str) -> AppResult<Dataset> {
        let city = self
            .catalog
            .resolve(city_selector)
            .ok_or_else(|| AppError::SourceNotFound {
                city: city_selector.trim().to_string(),
                reason: format!(
                    "not a supported city (expected one of: {})",
                    self.catalog.keys().join(", ")
                ),
            })?;

        let path = self.path_for(city);
        debug!(city = city.key, path = %path.display(), "Loading trip data");

        let file = File::open(&path).map_err(|e| AppError::SourceNotFound {
            city: city.key.to_string(),
            reason: format!("cannot open '{}': {e}", path.display()),
        })?;

        let dataset = read_trips(file, &self.calendar).map_err(|e| match e {
            AppError::Csv(inner) if inner.is_io_error() => AppError::SourceNotFound {
                city: city.key.to_string(),
                reason: format!("cannot read '{}': {inner}", path.display()),
            },
            other => other,
        })?;

        debug!(city = city.key, rows = dataset.len(), "Trip data loaded");
        Ok(dataset)
    }
}

/// Column positions resolved from the header row.
struct Layout {
    start_time: usize,
    end_time: usize,
    start_station: usize,
    end_station: usize,
    user_type: Option<usize>,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let required = |name: &str| {
            find(name).ok_or_else(|| AppError::MissingColumn {
                column: name.to_string(),
            })
        };

        Ok(Self {
            start_time: required(START_TIME)?,
            end_time: required(END_TIME)?,
            start_station: required(START_STATION)?,
            end_station: required(END_STATION)?,
            user_type: find(OptionalColumn::UserType.header()),
            gender: find(OptionalColumn::Gender.header()),
            birth_year: find(OptionalColumn::BirthYear.header()),
        })
    }

    fn optional_columns(&self) -> OptionalColumns {
        let mut present = Vec::new();
        if self.user_type.is_some() {
            present.push(OptionalColumn::UserType);
        }
        if self.gender.is_some() {
            present.push(OptionalColumn::Gender);
        }
        if self.birth_year.is_some() {
            present.push(OptionalColumn::BirthYear);
        }
        present.into_iter().collect()
    }
}

/// Parse trip records from any CSV source with a header row.
pub fn read_trips<R: Read>(source: R, calendar: &Calendar) -> AppResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let layout = Layout::from_headers(&headers)?;

    let mut trips = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let row = idx + 1;

        let start_time = parse_cell_timestamp(&record, layout.start_time, START_TIME, row)?;
        let end_time = parse_cell_timestamp(&record, layout.end_time, END_TIME, row)?;

        let trip = Trip::new(
            calendar,
            start_time,
            end_time,
            cell(&record, layout.start_station),
            cell(&record, layout.end_station),
        )
        .with_user_type(layout.user_type.and_then(|i| optional_text(&record, i)))
        .with_gender(layout.gender.and_then(|i| optional_text(&record, i)))
        .with_birth_year(layout.birth_year.and_then(|i| optional_year(&record, i, row)))
        .with_raw(record.iter().map(str::to_string).collect());

        trips.push(trip);
    }

    Ok(Dataset::new(
        headers.iter().map(str::to_string).collect(),
        layout.optional_columns(),
        trips,
    ))
}

/// Parse a timestamp using the first accepted layout that fits.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn parse_cell_timestamp(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row: usize,
) -> AppResult<NaiveDateTime> {
    let raw = cell(record, idx);
    parse_timestamp(raw).ok_or_else(|| AppError::Parse {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}

fn optional_text(record: &StringRecord, idx: usize) -> Option<String> {
    let v = cell(record, idx).trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

const YEAR_MIN: f64 = i32::MIN as f64;
const YEAR_MAX: f64 = i32::MAX as f64;

fn optional_year(record: &StringRecord, idx: usize, row: usize) -> Option<i32> {
    let v = cell(record, idx).trim();
    if v.is_empty() {
        return None;
    }
    match v.parse::<f64>() {
        Ok(year) if year.is_finite() && (YEAR_MIN..=YEAR_MAX).contains(&year.trunc()) => {
            Some(year.trunc() as i32)
        }
        _ => {
            warn!(row, value = v, "Ignoring non-numeric or out-of-range birth year");
            None
        }
    }
}
