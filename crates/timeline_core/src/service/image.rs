//! Image resolution for records and events.
//!
//! # Responsibility
//! - Resolve portraits through the media collaborator.
//! - Find the first media reference attached to an event payload.
//! - Apply the profile fallback chain (portrait, silhouette, absent).
//!
//! # Invariants
//! - Malformed payloads resolve to absent, never to an error.
//! - Only records with the `Portrait` capability are asked for portraits.

use crate::model::event::Event;
use crate::model::record::{Individual, Record, RecordCapability};
use crate::model::row::ImageRef;
use crate::source::media::{ImageSource, MediaReference, MediaResolver, PortraitRequest};
use once_cell::sync::Lazy;
use regex::Regex;

static GEDCOM_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s+(@[^@\s]+@\s+)?([A-Za-z0-9_]+)(?:\s(.*))?$")
        .expect("valid gedcom line regex")
});

struct GedcomLine<'a> {
    level: u32,
    tag: &'a str,
    value: &'a str,
}

fn parse_line(line: &str) -> Option<GedcomLine<'_>> {
    let caps = GEDCOM_LINE_RE.captures(line)?;
    let level = caps.get(1)?.as_str().parse().ok()?;
    Some(GedcomLine {
        level,
        tag: caps.get(3)?.as_str(),
        value: caps.get(4).map(|m| m.as_str().trim()).unwrap_or(""),
    })
}

/// First level-2 `OBJE` reference in an event payload.
///
/// A pointer value (`@M1@`) yields `Linked`; otherwise the first nested
/// `FILE` line of the block yields `Embedded`.
pub fn find_media_reference(payload: &str) -> Option<MediaReference> {
    let mut lines = payload.lines().filter_map(parse_line);
    let header = lines.by_ref().find(|line| line.level == 2 && line.tag == "OBJE")?;

    let pointer = header.value;
    if pointer.len() > 2 && pointer.starts_with('@') && pointer.ends_with('@') {
        return Some(MediaReference::Linked(pointer.trim_matches('@').to_string()));
    }

    lines
        .take_while(|line| line.level > 2)
        .find(|line| line.tag == "FILE" && !line.value.is_empty())
        .map(|line| MediaReference::Embedded {
            file: line.value.to_string(),
        })
}

/// Portrait of an individual.
pub fn resolve_portrait(individual: &Individual, media: &impl MediaResolver) -> Option<ImageSource> {
    media
        .portrait(individual, PortraitRequest::THUMBNAIL)
        .filter(|image| !image.url.is_empty())
}

/// Portrait of any record that supports one; absent otherwise.
pub fn resolve_entity_image(record: &Record, media: &impl MediaResolver) -> Option<ImageSource> {
    if !record.supports(RecordCapability::Portrait) {
        return None;
    }
    record
        .as_individual()
        .and_then(|individual| resolve_portrait(individual, media))
}

/// Image attached to one of the subject's own events.
///
/// Birth events without attached media fall back to the subject's portrait.
pub fn resolve_event_image(
    subject: &Individual,
    event: &Event,
    media: &impl MediaResolver,
) -> Option<ImageSource> {
    let attached = find_media_reference(&event.payload)
        .and_then(|reference| media.media_object(&reference))
        .filter(|image| !image.url.is_empty());
    match attached {
        Some(image) => Some(image),
        None if event.tag.is_birth() => resolve_portrait(subject, media),
        None => None,
    }
}

/// Profile image with silhouette fallback for records that carry a sex.
pub fn profile_image(record: &Record, media: &impl MediaResolver) -> ImageRef {
    if let Some(image) = resolve_entity_image(record, media) {
        return ImageRef::Url(image.url);
    }
    match record.sex() {
        Some(sex) if record.supports(RecordCapability::Sex) => ImageRef::Icon(sex.silhouette_token()),
        _ => ImageRef::None,
    }
}

/// Profile image of an individual.
pub fn individual_image(individual: &Individual, media: &impl MediaResolver) -> ImageRef {
    match resolve_portrait(individual, media) {
        Some(image) => ImageRef::Url(image.url),
        None => ImageRef::Icon(individual.sex.silhouette_token()),
    }
}

#[cfg(test)]
mod tests {
    use super::{find_media_reference, resolve_event_image};
    use crate::model::event::Event;
    use crate::model::record::Individual;
    use crate::source::media::{ImageSource, MediaCatalog, MediaReference};

    #[test]
    fn finds_linked_media_pointer() {
        let payload = "1 EDUC High school\n2 DATE 1966\n2 OBJE @M7@\n2 PLAC Springfield";
        assert_eq!(
            find_media_reference(payload),
            Some(MediaReference::Linked("M7".to_string()))
        );
    }

    #[test]
    fn finds_embedded_media_file() {
        let payload = "1 RESI\n2 OBJE\n3 FORM jpg\n3 FILE house.jpg\n2 DATE 1970";
        assert_eq!(
            find_media_reference(payload),
            Some(MediaReference::Embedded {
                file: "house.jpg".to_string()
            })
        );
    }

    #[test]
    fn ignores_deeper_or_malformed_media_lines() {
        assert_eq!(find_media_reference("1 BIRT\n3 OBJE @M1@"), None);
        assert_eq!(find_media_reference("1 BIRT\n2 OBJE\n2 DATE 1950"), None);
        assert_eq!(find_media_reference("garbage <img src="), None);
        assert_eq!(find_media_reference(""), None);
    }

    #[test]
    fn birth_falls_back_to_subject_portrait() {
        let subject = Individual::new("I1", "Ann", "/i/I1");
        let media = MediaCatalog::new().with_portrait("I1", ImageSource::new("https://x/ann.jpg"));

        let birth = Event::new(subject.clone(), "BIRT");
        let death = Event::new(subject.clone(), "DEAT");
        assert_eq!(
            resolve_event_image(&subject, &birth, &media),
            Some(ImageSource::new("https://x/ann.jpg"))
        );
        assert_eq!(resolve_event_image(&subject, &death, &media), None);
    }
}
