//! Domain model for timeline construction.
//!
//! # Responsibility
//! - Define records, events and date windows handed over by the host.
//! - Define the render-ready row projection owned by the core.
//!
//! # Invariants
//! - Input records/events are read-only to the pipeline.
//! - Nothing here is cached across requests.

pub mod date;
pub mod event;
pub mod record;
pub mod row;
