//! Media collaborator contract.
//!
//! The host resolves portraits and media objects to structured image
//! sources; nothing in the core scrapes rendered markup.

use crate::model::record::{Individual, Xref};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolved image location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    pub url: String,
}

impl ImageSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// How a thumbnail is fitted to the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitFit {
    Crop,
    Contain,
}

/// Portrait size request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortraitRequest {
    pub width: u32,
    pub height: u32,
    pub fit: PortraitFit,
}

impl PortraitRequest {
    /// Square thumbnail used for timeline rows.
    pub const THUMBNAIL: PortraitRequest = PortraitRequest {
        width: 100,
        height: 100,
        fit: PortraitFit::Crop,
    };
}

/// Media reference found inside an event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaReference {
    /// Pointer to a media record (`2 OBJE @M1@`).
    Linked(Xref),
    /// Media embedded in the event itself (`3 FILE path`).
    Embedded { file: String },
}

/// Resolves portraits and media references to image sources.
pub trait MediaResolver {
    /// Portrait of `individual`, `None` when it has no usable image.
    fn portrait(&self, individual: &Individual, request: PortraitRequest) -> Option<ImageSource>;

    /// Image for a media reference, `None` when it cannot be displayed.
    fn media_object(&self, reference: &MediaReference) -> Option<ImageSource>;
}

/// Resolver for hosts without media support.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMedia;

impl MediaResolver for NoMedia {
    fn portrait(&self, _individual: &Individual, _request: PortraitRequest) -> Option<ImageSource> {
        None
    }

    fn media_object(&self, _reference: &MediaReference) -> Option<ImageSource> {
        None
    }
}

/// In-memory resolver keyed by record xref and media file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCatalog {
    portraits: BTreeMap<Xref, ImageSource>,
    media: BTreeMap<Xref, ImageSource>,
    files: BTreeMap<String, ImageSource>,
}

impl MediaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_portrait(mut self, individual_xref: impl Into<Xref>, image: ImageSource) -> Self {
        self.portraits.insert(individual_xref.into(), image);
        self
    }

    pub fn with_media(mut self, media_xref: impl Into<Xref>, image: ImageSource) -> Self {
        self.media.insert(media_xref.into(), image);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>, image: ImageSource) -> Self {
        self.files.insert(file.into(), image);
        self
    }
}

impl MediaResolver for MediaCatalog {
    fn portrait(&self, individual: &Individual, _request: PortraitRequest) -> Option<ImageSource> {
        self.portraits.get(&individual.xref).cloned()
    }

    fn media_object(&self, reference: &MediaReference) -> Option<ImageSource> {
        match reference {
            MediaReference::Linked(xref) => self.media.get(xref).cloned(),
            MediaReference::Embedded { file } => self.files.get(file).cloned(),
        }
    }
}

impl<M: MediaResolver + ?Sized> MediaResolver for &M {
    fn portrait(&self, individual: &Individual, request: PortraitRequest) -> Option<ImageSource> {
        (**self).portrait(individual, request)
    }

    fn media_object(&self, reference: &MediaReference) -> Option<ImageSource> {
        (**self).media_object(reference)
    }
}
