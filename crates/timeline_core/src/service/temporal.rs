//! Display year/age normalization for uncertain dates.
//!
//! # Responsibility
//! - Derive the year and the subject's age shown for one event.
//!
//! # Invariants
//! - Every subtracting branch floors at `0`.
//! - Ages above the plausibility cap become `0`; the year is kept.
//! - A cap of `0` means `DEFAULT_MAX_PLAUSIBLE_AGE`.
//! - The birth anchor is the first birth bound that carries a year.
//! - Birth events always show `DisplayAge::NotApplicable`.

use crate::config::DEFAULT_MAX_PLAUSIBLE_AGE;
use crate::model::event::Event;
use crate::model::record::Individual;
use crate::model::row::{DisplayAge, DisplayYear};

/// Normalized year/age pair for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub year: DisplayYear,
    pub age: DisplayAge,
}

/// Computes the display year and age of `event` relative to `subject`.
///
/// `max_plausible_age` of `0` falls back to `DEFAULT_MAX_PLAUSIBLE_AGE`.
pub fn normalize(subject: &Individual, event: &Event, max_plausible_age: u32) -> Normalized {
    let range = &event.date.range;
    let (age, age_year) = match subject.birth.start() {
        Some(birth) => {
            let age = range
                .dated_min()
                .map(|at| birth.whole_years_until(&at))
                .unwrap_or(0);
            (age, i64::from(birth.year))
        }
        None => (0, 0),
    };

    let (year, age) = derive_year_age(age, age_year, range.min_year(), range.max_year());
    let age = apply_plausibility_cap(age, max_plausible_age);

    let age = if event.tag.is_birth() {
        DisplayAge::NotApplicable
    } else {
        DisplayAge::Years(age)
    };

    Normalized { year, age }
}

/// Year/age case table over the event window.
///
/// `age` is the subject's age at the window minimum and `age_year` the
/// subject's birth year; both are `0` when the birth is unknown.
pub fn derive_year_age(
    age: i64,
    age_year: i64,
    min_year: Option<i32>,
    max_year: Option<i32>,
) -> (DisplayYear, u64) {
    let floor = |value: i64| value.max(0) as u64;
    match (min_year, max_year) {
        (None, None) => (DisplayYear::Empty, 0),
        (None, Some(max)) => (DisplayYear::Year(max), floor(i64::from(max) - age_year)),
        (Some(min), None) => (DisplayYear::Year(min), floor(i64::from(min) - age_year)),
        (Some(min), Some(max)) if min == max => {
            (DisplayYear::Year(max), floor(i64::from(max) - age_year))
        }
        (Some(min), Some(max)) => (
            DisplayYear::Year(min),
            floor(age - (i64::from(max) - i64::from(min))),
        ),
    }
}

/// Resets implausible ages to `0`. A cap of `0` uses the default cap.
pub fn apply_plausibility_cap(age: u64, max_plausible_age: u32) -> u32 {
    let cap = match max_plausible_age {
        0 => DEFAULT_MAX_PLAUSIBLE_AGE,
        cap => cap,
    };
    if age > u64::from(cap) {
        0
    } else {
        // Bounded by the u32 cap above.
        age as u32
    }
}
