use crate::errors::AppResult;
use crate::models::{Calendar, Dataset, DaySelector, MonthSelector};
use tracing::debug;

/// Narrows datasets by month and weekday.
pub struct FilterEngine {
    calendar: Calendar,
}

impl FilterEngine {
    pub fn new(calendar: Calendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Parse textual selectors ("all", "march", "Friday") and filter.
    pub fn filter_by_name(&self, dataset: &Dataset, month: &str, day: &str) -> AppResult<Dataset> {
        let month = self.calendar.parse_month(month)?;
        let day = self.calendar.parse_day(day)?;
        Ok(filter(dataset, month, day))
    }
}

/// Keep the trips whose derived month and day match the selectors.
///
/// Row order is preserved and the input dataset is left untouched.
pub fn filter(dataset: &Dataset, month: MonthSelector, day: DaySelector) -> Dataset {
    if month.is_all() && day.is_all() {
        return dataset.clone();
    }

    let trips = dataset
        .trips()
        .iter()
        .filter(|t| month.matches(&t.month) && day.matches(&t.day))
        .cloned()
        .collect();

    let out = dataset.with_trips(trips);
    debug!(%month, %day, input = dataset.len(), output = out.len(), "Dataset filtered");
    out
}
