use super::calendar::Calendar;
use chrono::{NaiveDateTime, TimeDelta};

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,

    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time / end_time at construction
    pub month: String,
    pub day: String,
    pub hour: String,
    pub duration: TimeDelta,

    /// Source cells exactly as read, for raw-row display.
    pub raw: Vec<String>,
}

impl Trip {
    /// Build a trip and compute its derived fields.
    pub fn new(
        calendar: &Calendar,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: calendar.month_name(&start_time).to_string(),
            day: calendar.day_name(&start_time).to_string(),
            hour: calendar.hour_label(&start_time),
            duration: end_time - start_time,
            raw: Vec::new(),
        }
    }

    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    pub fn with_raw(mut self, raw: Vec<String>) -> Self {
        self.raw = raw;
        self
    }

    pub fn route(&self) -> (&str, &str) {
        (&self.start_station, &self.end_station)
    }
}
