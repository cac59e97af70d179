//! Core timeline logic for genealogical life-event tabs.
//! Merges event streams, normalizes display year/age, resolves the displayed
//! party and image, and renders the timeline fragment.

pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod source;

pub use config::{IncludeFlags, SettingsError, TimelineSettings, DEFAULT_MAX_PLAUSIBLE_AGE};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::date::{DateRange, DateRangeError, EventDate, PartialDate};
pub use model::event::{recognized_tags, Event, EventTag, Place, CLOSE_RELATIVE_MARKER};
pub use model::record::{Individual, OpaqueRecord, Record, RecordCapability, Sex, Union, Xref};
pub use model::row::{DisplayAge, DisplayValue, DisplayYear, ImageRef, TimelineRow};
pub use render::html::{render_row, render_timeline};
pub use service::aggregator::{aggregate, collect_events};
pub use service::image::{resolve_entity_image, resolve_event_image};
pub use service::party::{classify_owner, resolve_party, OwnerRole, PartyResolution};
pub use service::temporal::{normalize, Normalized};
pub use service::timeline_service::{build_row, TimelineService};
pub use source::media::{
    ImageSource, MediaCatalog, MediaReference, MediaResolver, NoMedia, PortraitFit,
    PortraitRequest,
};
pub use source::{DateOrder, EventCategory, EventSource, EventStreams, YearRangeOrder};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
