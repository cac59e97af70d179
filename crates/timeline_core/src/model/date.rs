//! Partial calendar dates and date windows.
//!
//! # Responsibility
//! - Carry already-parsed date bounds handed over by the record source.
//! - Provide the whole-year age arithmetic used by display normalization.
//!
//! # Invariants
//! - `DateRange::min` is never later than `DateRange::max` when both are set.
//! - A year of `0` means "no year" and is reported as absent.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Calendar date where month and day may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: i32,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
}

impl PartialDate {
    /// Year-only date.
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }

    /// Fully specified date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
        }
    }

    /// Sort key with unknown components placed before known ones.
    pub fn sort_key(&self) -> (i32, u32, u32) {
        (self.year, self.month.unwrap_or(0), self.day.unwrap_or(0))
    }

    /// Whole years elapsed from `self` until `later`.
    ///
    /// Month/day components only shorten the count when both sides know them.
    /// Negative when `later` precedes `self`.
    pub fn whole_years_until(&self, later: &PartialDate) -> i64 {
        let mut years = i64::from(later.year) - i64::from(self.year);
        if let (Some(from_month), Some(to_month)) = (self.month, later.month) {
            let before_anniversary = match (self.day, later.day) {
                (Some(from_day), Some(to_day)) => (to_month, to_day) < (from_month, from_day),
                _ => to_month < from_month,
            };
            if before_anniversary {
                years -= 1;
            }
        }
        years
    }
}

impl Display for PartialDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{month:02}")?;
            if let Some(day) = self.day {
                write!(f, "-{day:02}")?;
            }
        }
        Ok(())
    }
}

/// Window of possible dates for one occurrence. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    min: Option<PartialDate>,
    max: Option<PartialDate>,
}

#[derive(Deserialize)]
struct RawDateRange {
    #[serde(default)]
    min: Option<PartialDate>,
    #[serde(default)]
    max: Option<PartialDate>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DateRangeError;

    fn try_from(value: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(value.min, value.max)
    }
}

impl DateRange {
    /// Builds a window, rejecting a maximum that precedes the minimum.
    ///
    /// # Errors
    /// - `DateRangeError::ReversedWindow` when `max < min` and both carry a year.
    pub fn new(min: Option<PartialDate>, max: Option<PartialDate>) -> Result<Self, DateRangeError> {
        if let (Some(lower), Some(upper)) = (with_year(min), with_year(max)) {
            if upper.sort_key() < lower.sort_key() {
                return Err(DateRangeError::ReversedWindow {
                    min: lower,
                    max: upper,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Completely unknown date.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Single known date (both bounds equal).
    pub fn on(date: PartialDate) -> Self {
        Self {
            min: Some(date),
            max: Some(date),
        }
    }

    /// Single known year.
    pub fn in_year(year: i32) -> Self {
        Self::on(PartialDate::year(year))
    }

    /// Open-ended "after" date.
    pub fn after(date: PartialDate) -> Self {
        Self {
            min: Some(date),
            max: None,
        }
    }

    /// Open-ended "before" date.
    pub fn before(date: PartialDate) -> Self {
        Self {
            min: None,
            max: Some(date),
        }
    }

    pub fn min(&self) -> Option<PartialDate> {
        self.min
    }

    pub fn max(&self) -> Option<PartialDate> {
        self.max
    }

    /// Lower bound, `None` when absent or without a year.
    pub fn dated_min(&self) -> Option<PartialDate> {
        with_year(self.min)
    }

    /// Upper bound, `None` when absent or without a year.
    pub fn dated_max(&self) -> Option<PartialDate> {
        with_year(self.max)
    }

    /// Lower bound year, `None` when absent or zero.
    pub fn min_year(&self) -> Option<i32> {
        self.dated_min().map(|date| date.year)
    }

    /// Upper bound year, `None` when absent or zero.
    pub fn max_year(&self) -> Option<i32> {
        self.dated_max().map(|date| date.year)
    }

    /// Earliest bound carrying a year (minimum, else maximum).
    pub fn start(&self) -> Option<PartialDate> {
        self.dated_min().or(self.dated_max())
    }

    /// Latest bound carrying a year (maximum, else minimum).
    pub fn end(&self) -> Option<PartialDate> {
        self.dated_max().or(self.dated_min())
    }

    /// Whether at least one bound carries a year.
    pub fn is_known(&self) -> bool {
        self.min_year().is_some() || self.max_year().is_some()
    }

    /// Chronological comparison of two windows.
    ///
    /// Dated windows compare by start, then end. Windows without any year are
    /// equal to each other and later than every dated window.
    pub fn chronological_cmp(&self, other: &DateRange) -> Ordering {
        let lhs = self.start().map(|start| (start.sort_key(), self.end().map(|end| end.sort_key())));
        let rhs = other
            .start()
            .map(|start| (start.sort_key(), other.end().map(|end| end.sort_key())));
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

fn with_year(date: Option<PartialDate>) -> Option<PartialDate> {
    date.filter(|date| date.year != 0)
}

/// Event date as delivered by the record source: parsed window plus display text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDate {
    #[serde(default)]
    pub range: DateRange,
    /// Already localized/formatted date text.
    #[serde(default)]
    pub display: String,
}

impl EventDate {
    pub fn new(range: DateRange, display: impl Into<String>) -> Self {
        Self {
            range,
            display: display.into(),
        }
    }
}

/// Date window construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    ReversedWindow { min: PartialDate, max: PartialDate },
}

impl Display for DateRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReversedWindow { min, max } => {
                write!(f, "date range maximum ({max}) must be >= minimum ({min})")
            }
        }
    }
}

impl Error for DateRangeError {}
