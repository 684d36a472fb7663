use super::trip::Trip;
use serde::Serialize;
use std::collections::BTreeSet;

/// Optional columns a city's source file may or may not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OptionalColumn {
    UserType,
    Gender,
    BirthYear,
}

impl OptionalColumn {
    pub const ALL: [OptionalColumn; 3] = [
        OptionalColumn::UserType,
        OptionalColumn::Gender,
        OptionalColumn::BirthYear,
    ];

    /// Header name in the source CSV.
    pub fn header(&self) -> &'static str {
        match self {
            OptionalColumn::UserType => "User Type",
            OptionalColumn::Gender => "Gender",
            OptionalColumn::BirthYear => "Birth Year",
        }
    }
}

/// Capability set: which optional columns exist for every row of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalColumns(BTreeSet<OptionalColumn>);

impl OptionalColumns {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        OptionalColumn::ALL.into_iter().collect()
    }

    pub fn contains(&self, column: OptionalColumn) -> bool {
        self.0.contains(&column)
    }
}

impl FromIterator<OptionalColumn> for OptionalColumns {
    fn from_iter<I: IntoIterator<Item = OptionalColumn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ordered trips sharing one optional-column schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Source header row, in file order (used for raw-row display).
    pub headers: Vec<String>,
    pub columns: OptionalColumns,
    trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, columns: OptionalColumns, trips: Vec<Trip>) -> Self {
        Self {
            headers,
            columns,
            trips,
        }
    }

    /// Build a dataset with the same header and schema but other trips.
    pub fn with_trips(&self, trips: Vec<Trip>) -> Self {
        Self {
            headers: self.headers.clone(),
            columns: self.columns.clone(),
            trips,
        }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn has(&self, column: OptionalColumn) -> bool {
        self.columns.contains(column)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Verbatim source rows in `[offset, offset + count)`.
    pub fn raw_rows(&self, offset: usize, count: usize) -> Vec<&[String]> {
        self.trips
            .iter()
            .skip(offset)
            .take(count)
            .map(|t| t.raw.as_slice())
            .collect()
    }
}
