//! Timeline use-case service.
//!
//! # Responsibility
//! - Wire aggregation, normalization, party/image resolution and rendering
//!   for one subject per call.
//! - Drop events whose tag is outside the recognized display set.
//!
//! # Invariants
//! - Rows are produced in aggregated order; nothing is reordered afterwards.
//! - No state survives between calls.

use crate::config::TimelineSettings;
use crate::model::event::Event;
use crate::model::record::Individual;
use crate::model::row::TimelineRow;
use crate::render::html::render_timeline;
use crate::service::aggregator::collect_events;
use crate::service::party::resolve_party;
use crate::service::temporal::normalize;
use crate::source::media::MediaResolver;
use crate::source::{DateOrder, EventSource, YearRangeOrder};
use log::{debug, info};

/// Timeline facade over an event source and a media resolver.
pub struct TimelineService<S: EventSource, M: MediaResolver, O: DateOrder = YearRangeOrder> {
    source: S,
    media: M,
    order: O,
    settings: TimelineSettings,
}

impl<S: EventSource, M: MediaResolver> TimelineService<S, M> {
    /// Creates a service using the default chronological order.
    pub fn new(source: S, media: M, settings: TimelineSettings) -> Self {
        Self {
            source,
            media,
            order: YearRangeOrder,
            settings,
        }
    }
}

impl<S: EventSource, M: MediaResolver, O: DateOrder> TimelineService<S, M, O> {
    /// Replaces the date order used for sorting.
    pub fn with_order<P: DateOrder>(self, order: P) -> TimelineService<S, M, P> {
        TimelineService {
            source: self.source,
            media: self.media,
            order,
            settings: self.settings,
        }
    }

    pub fn settings(&self) -> &TimelineSettings {
        &self.settings
    }

    /// Builds render-ready rows for `subject` in chronological order.
    pub fn build_rows(&self, subject: &Individual) -> Vec<TimelineRow> {
        let events = collect_events(&self.source, subject, &self.settings.include, &self.order);
        let max_plausible_age = self.settings.effective_max_plausible_age();
        let total = events.len();

        let rows: Vec<TimelineRow> = events
            .iter()
            .filter_map(|event| build_row(subject, event, max_plausible_age, &self.media))
            .collect();

        info!(
            "event=timeline_build module=service status=ok events={} rows={} dropped={}",
            total,
            rows.len(),
            total - rows.len()
        );
        rows
    }

    /// Builds and renders the full timeline fragment for `subject`.
    pub fn render(&self, subject: &Individual) -> String {
        let rows = self.build_rows(subject);
        render_timeline(&rows, self.settings.stylesheet_url.as_deref())
    }
}

/// Projects one event into a row; `None` for unrecognized tags.
///
/// `max_plausible_age` of `0` falls back to `DEFAULT_MAX_PLAUSIBLE_AGE`.
pub fn build_row(
    subject: &Individual,
    event: &Event,
    max_plausible_age: u32,
    media: &impl MediaResolver,
) -> Option<TimelineRow> {
    if !event.tag.is_recognized() {
        debug!(
            "event=row_dropped module=service reason=unrecognized_tag tag={}",
            event.tag
        );
        return None;
    }

    let normalized = normalize(subject, event, max_plausible_age);
    let party = resolve_party(subject, event, media);

    Some(TimelineRow {
        tag: event.tag.clone(),
        year: normalized.year,
        age: normalized.age,
        title: event.title().to_string(),
        value: party.value,
        date_display: event.date.display.clone(),
        place: event.place.clone(),
        image: party.image,
    })
}
