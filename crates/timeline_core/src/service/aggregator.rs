//! Event aggregation across source categories.
//!
//! # Responsibility
//! - Merge own/family/relative/associate/historic events into one stream.
//! - Order the merged stream chronologically.
//!
//! # Invariants
//! - Own events are always included; other categories follow `IncludeFlags`.
//! - Excluded categories are never fetched.
//! - Sorting is stable: ties keep `EventCategory::MERGE_ORDER` precedence.

use crate::config::IncludeFlags;
use crate::model::event::Event;
use crate::model::record::Individual;
use crate::source::{DateOrder, EventCategory, EventSource, EventStreams};
use log::debug;

/// Whether `category` takes part in the merge under `flags`.
pub fn is_included(flags: &IncludeFlags, category: EventCategory) -> bool {
    match category {
        EventCategory::Own => true,
        EventCategory::Family => flags.family,
        EventCategory::Relative => flags.relative,
        EventCategory::Associate => flags.associate,
        EventCategory::Historic => flags.historic,
    }
}

/// Merges pre-loaded collections and sorts them chronologically.
pub fn aggregate(
    streams: &EventStreams,
    flags: &IncludeFlags,
    order: &impl DateOrder,
) -> Vec<Event> {
    let merged = EventCategory::MERGE_ORDER
        .into_iter()
        .filter(|category| is_included(flags, *category))
        .flat_map(|category| streams.get(category).iter().cloned())
        .collect();
    sort_chronologically(merged, order)
}

/// Fetches included categories from `source`, then merges and sorts them.
pub fn collect_events(
    source: &impl EventSource,
    subject: &Individual,
    flags: &IncludeFlags,
    order: &impl DateOrder,
) -> Vec<Event> {
    let mut merged = Vec::new();
    for category in EventCategory::MERGE_ORDER {
        if !is_included(flags, category) {
            continue;
        }
        let events = source.fetch(subject, category);
        debug!(
            "event=events_fetched module=aggregator category={} count={}",
            category.as_str(),
            events.len()
        );
        merged.extend(events);
    }
    sort_chronologically(merged, order)
}

fn sort_chronologically(mut events: Vec<Event>, order: &impl DateOrder) -> Vec<Event> {
    // `sort_by` is stable, which keeps merge precedence for equal dates.
    events.sort_by(|a, b| order.compare(&a.date, &b.date));
    events
}
