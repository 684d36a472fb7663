use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::fmt;

/// Month and weekday vocabulary used to derive trip fields and to parse
/// user selectors. Built once and handed to the loader and the filter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    months: [&'static str; 12],
    days: [&'static str; 7],
}

impl Default for Calendar {
    fn default() -> Self {
        Self::english()
    }
}

impl Calendar {
    pub fn english() -> Self {
        Self {
            months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            // Monday first, matching chrono's num_days_from_monday()
            days: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
        }
    }

    pub fn months(&self) -> &[&'static str] {
        &self.months
    }

    pub fn days(&self) -> &[&'static str] {
        &self.days
    }

    /// Full month name of a timestamp ("January").
    pub fn month_name(&self, ts: &NaiveDateTime) -> &'static str {
        self.months[ts.month0() as usize]
    }

    /// Full weekday name of a timestamp ("Monday").
    pub fn day_name(&self, ts: &NaiveDateTime) -> &'static str {
        self.days[ts.weekday().num_days_from_monday() as usize]
    }

    /// Two-digit hour of a timestamp ("08").
    pub fn hour_label(&self, ts: &NaiveDateTime) -> String {
        format!("{:02}", ts.hour())
    }

    /// Parse "all" or a month name, case-insensitive.
    pub fn parse_month(&self, input: &str) -> AppResult<MonthSelector> {
        let s = input.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(MonthSelector::All);
        }
        self.months
            .iter()
            .find(|m| m.eq_ignore_ascii_case(s))
            .map(|&m| MonthSelector::Only(m))
            .ok_or_else(|| AppError::InvalidSelector(format!("unknown month '{s}'")))
    }

    /// Parse "all" or a weekday name, case-insensitive.
    pub fn parse_day(&self, input: &str) -> AppResult<DaySelector> {
        let s = input.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(DaySelector::All);
        }
        self.days
            .iter()
            .find(|d| d.eq_ignore_ascii_case(s))
            .map(|&d| DaySelector::Only(d))
            .ok_or_else(|| AppError::InvalidSelector(format!("unknown day '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelector {
    All,
    Only(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    All,
    Only(&'static str),
}

impl MonthSelector {
    pub fn matches(&self, month: &str) -> bool {
        match self {
            MonthSelector::All => true,
            MonthSelector::Only(name) => name.eq_ignore_ascii_case(month),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MonthSelector::All)
    }
}

impl DaySelector {
    pub fn matches(&self, day: &str) -> bool {
        match self {
            DaySelector::All => true,
            DaySelector::Only(name) => name.eq_ignore_ascii_case(day),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DaySelector::All)
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelector::All => write!(f, "all"),
            MonthSelector::Only(name) => write!(f, "{name}"),
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelector::All => write!(f, "all"),
            DaySelector::Only(name) => write!(f, "{name}"),
        }
    }
}
