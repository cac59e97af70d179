//! Timeline pipeline stages and the use-case service wiring them.
//!
//! # Responsibility
//! - Keep each stage a pure function over borrowed inputs.
//! - Keep host concerns (storage, media, translation) behind `source` traits.

pub mod aggregator;
pub mod image;
pub mod party;
pub mod temporal;
pub mod timeline_service;
