//! Display party resolution.
//!
//! # Responsibility
//! - Classify an event owner relative to the subject.
//! - Pick the value and image shown for the event (own text, partner,
//!   relative or third-party record).
//!
//! # Invariants
//! - For a union that contains the subject, the displayed party is never the
//!   subject.
//! - Every owner role is handled explicitly; there is no implicit default.

use crate::model::event::{Event, CLOSE_RELATIVE_MARKER};
use crate::model::record::{Individual, Record, Union};
use crate::model::row::{DisplayValue, ImageRef};
use crate::render::markup::strip_tags;
use crate::service::image::{individual_image, profile_image, resolve_event_image};
use crate::source::media::MediaResolver;

/// Owner of an event as seen from the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerRole<'a> {
    /// The subject's own event.
    Subject,
    /// A union the subject is a party to; `partner` is the other spouse.
    PartnerUnion {
        union: &'a Union,
        partner: Option<&'a Individual>,
    },
    /// Another person's event.
    OtherIndividual(&'a Individual),
    /// A union without the subject, or a non-person record.
    ThirdParty(&'a Record),
}

/// Value and image chosen for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyResolution {
    pub value: DisplayValue,
    pub image: ImageRef,
}

/// Classifies `owner` relative to `subject`.
pub fn classify_owner<'a>(subject: &Individual, owner: &'a Record) -> OwnerRole<'a> {
    match owner {
        Record::Individual(individual) if individual.is_same(subject) => OwnerRole::Subject,
        Record::Individual(individual) => OwnerRole::OtherIndividual(individual),
        Record::Union(union) if union.has_spouse(subject) => OwnerRole::PartnerUnion {
            union,
            partner: union.partner_of(subject),
        },
        Record::Union(_) | Record::Opaque(_) => OwnerRole::ThirdParty(owner),
    }
}

/// Resolves the displayed value and image for `event`.
pub fn resolve_party(
    subject: &Individual,
    event: &Event,
    media: &impl MediaResolver,
) -> PartyResolution {
    let own_text = || DisplayValue::text(strip_tags(&event.value));

    match classify_owner(subject, &event.owner) {
        OwnerRole::Subject => PartyResolution {
            value: own_text(),
            image: resolve_event_image(subject, event, media)
                .map(|image| ImageRef::Url(image.url))
                .unwrap_or_default(),
        },
        OwnerRole::PartnerUnion {
            partner: Some(partner),
            ..
        }
        | OwnerRole::OtherIndividual(partner) => individual_party(partner, media),
        OwnerRole::PartnerUnion { partner: None, .. } => PartyResolution {
            value: own_text(),
            image: ImageRef::None,
        },
        OwnerRole::ThirdParty(record) => {
            if event.tag.is_marriage() {
                if let Some(spouse) = union_of(record).and_then(|union| union.opposing_spouse(subject)) {
                    return individual_party(spouse, media);
                }
            }
            let value = strip_tags(&event.value);
            if value.trim() == CLOSE_RELATIVE_MARKER {
                return PartyResolution {
                    value: profile_value(record),
                    image: profile_image(record, media),
                };
            }
            PartyResolution {
                value: DisplayValue::text(value),
                image: ImageRef::None,
            }
        }
    }
}

fn union_of(record: &Record) -> Option<&Union> {
    match record {
        Record::Union(union) => Some(union),
        Record::Individual(_) | Record::Opaque(_) => None,
    }
}

fn individual_party(individual: &Individual, media: &impl MediaResolver) -> PartyResolution {
    PartyResolution {
        value: DisplayValue::profile(&individual.full_name, &individual.url),
        image: individual_image(individual, media),
    }
}

fn profile_value(record: &Record) -> DisplayValue {
    DisplayValue::profile(record.display_name(), record.url())
}

#[cfg(test)]
mod tests {
    use super::{classify_owner, OwnerRole};
    use crate::model::record::{Individual, OpaqueRecord, Record, Union};

    #[test]
    fn classification_covers_every_owner_kind() {
        let subject = Individual::new("I1", "Ann", "/i/I1");
        let other = Individual::new("I2", "Bob", "/i/I2");
        let with_subject = Union::new("F1", "Bob + Ann", "/f/F1")
            .with_husband(other.clone())
            .with_wife(subject.clone());
        let without_subject = Union::new("F2", "Bob + Cy", "/f/F2").with_husband(other.clone());

        assert_eq!(
            classify_owner(&subject, &Record::from(subject.clone())),
            OwnerRole::Subject
        );
        assert_eq!(
            classify_owner(&subject, &Record::from(other.clone())),
            OwnerRole::OtherIndividual(&other)
        );
        let owner = Record::from(with_subject.clone());
        assert_eq!(
            classify_owner(&subject, &owner),
            OwnerRole::PartnerUnion {
                union: &with_subject,
                partner: Some(&other),
            }
        );
        let owner = Record::from(without_subject);
        assert!(matches!(classify_owner(&subject, &owner), OwnerRole::ThirdParty(_)));
        let owner = Record::from(OpaqueRecord::new("S1", "Census", "/s/S1"));
        assert!(matches!(classify_owner(&subject, &owner), OwnerRole::ThirdParty(_)));
    }
}
