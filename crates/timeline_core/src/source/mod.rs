//! Collaborator contracts consumed by the timeline pipeline.
//!
//! # Responsibility
//! - Define the event retrieval seam (`EventSource`) and date ordering seam
//!   (`DateOrder`) implemented by the host.
//! - Provide in-memory implementations for hosts that pre-load events.
//!
//! # Invariants
//! - Sources return empty collections for "none found"; errors stay on the
//!   host side of this boundary.
//! - `DateOrder` must be a total order.

pub mod media;

use crate::model::date::EventDate;
use crate::model::event::Event;
use crate::model::record::Individual;
use std::cmp::Ordering;

/// Labeled event collection kinds for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventCategory {
    Own,
    Family,
    Relative,
    Associate,
    Historic,
}

impl EventCategory {
    /// Merge precedence used to break chronological ties.
    pub const MERGE_ORDER: [EventCategory; 5] = [
        EventCategory::Own,
        EventCategory::Family,
        EventCategory::Relative,
        EventCategory::Associate,
        EventCategory::Historic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Family => "family",
            Self::Relative => "relative",
            Self::Associate => "associate",
            Self::Historic => "historic",
        }
    }
}

/// Retrieves raw events for a subject.
pub trait EventSource {
    /// Returns every event of `category` for `subject`, empty when none.
    fn fetch(&self, subject: &Individual, category: EventCategory) -> Vec<Event>;
}

/// Pre-loaded event collections, one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStreams {
    pub own: Vec<Event>,
    pub family: Vec<Event>,
    pub associate: Vec<Event>,
    pub relative: Vec<Event>,
    pub historic: Vec<Event>,
}

impl EventStreams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: EventCategory) -> &[Event] {
        match category {
            EventCategory::Own => &self.own,
            EventCategory::Family => &self.family,
            EventCategory::Relative => &self.relative,
            EventCategory::Associate => &self.associate,
            EventCategory::Historic => &self.historic,
        }
    }

    pub fn get_mut(&mut self, category: EventCategory) -> &mut Vec<Event> {
        match category {
            EventCategory::Own => &mut self.own,
            EventCategory::Family => &mut self.family,
            EventCategory::Relative => &mut self.relative,
            EventCategory::Associate => &mut self.associate,
            EventCategory::Historic => &mut self.historic,
        }
    }

    /// Appends one event to `category`.
    pub fn push(&mut self, category: EventCategory, event: Event) {
        self.get_mut(category).push(event);
    }
}

impl EventSource for EventStreams {
    fn fetch(&self, _subject: &Individual, category: EventCategory) -> Vec<Event> {
        self.get(category).to_vec()
    }
}

/// Total order over event dates used to sort the merged timeline.
pub trait DateOrder {
    fn compare(&self, a: &EventDate, b: &EventDate) -> Ordering;
}

impl<F> DateOrder for F
where
    F: Fn(&EventDate, &EventDate) -> Ordering,
{
    fn compare(&self, a: &EventDate, b: &EventDate) -> Ordering {
        self(a, b)
    }
}

/// Default order: by window start then end; undated events last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearRangeOrder;

impl DateOrder for YearRangeOrder {
    fn compare(&self, a: &EventDate, b: &EventDate) -> Ordering {
        a.range.chronological_cmp(&b.range)
    }
}
