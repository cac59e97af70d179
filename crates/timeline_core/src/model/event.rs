//! Life events (GEDCOM facts) as delivered by the record source.
//!
//! # Responsibility
//! - Define the event shape consumed by the timeline pipeline.
//! - Own the recognized type-tag set and its display labels/icons.
//!
//! # Invariants
//! - `EventTag::Other` is never recognized for display.
//! - Tag parsing keeps only the segment after the last `:`.

use crate::model::date::EventDate;
use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Value emitted by the record source for synthesized close-relative events.
pub const CLOSE_RELATIVE_MARKER: &str = "CLOSE_RELATIVE";

/// Event type tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventTag {
    Adoption,
    Annulment,
    LdsBaptism,
    Baptism,
    Birth,
    Burial,
    Christening,
    Death,
    Divorce,
    Education,
    Engagement,
    Event,
    Immigration,
    MarriageBann,
    Marriage,
    Naturalization,
    Occupation,
    Property,
    Residence,
    Retirement,
    LdsSpouseSealing,
    /// Any tag outside the recognized display set.
    Other(String),
}

const RECOGNIZED_TAGS: &[EventTag] = &[
    EventTag::Adoption,
    EventTag::Annulment,
    EventTag::LdsBaptism,
    EventTag::Baptism,
    EventTag::Birth,
    EventTag::Burial,
    EventTag::Christening,
    EventTag::Death,
    EventTag::Divorce,
    EventTag::Education,
    EventTag::Engagement,
    EventTag::Event,
    EventTag::Immigration,
    EventTag::MarriageBann,
    EventTag::Marriage,
    EventTag::Naturalization,
    EventTag::Occupation,
    EventTag::Property,
    EventTag::Residence,
    EventTag::Retirement,
    EventTag::LdsSpouseSealing,
];

impl EventTag {
    /// Parses a raw tag such as `BIRT` or a qualified one such as `INDI:BIRT`.
    pub fn parse(raw: &str) -> Self {
        let tag = raw.rsplit(':').next().unwrap_or(raw).trim();
        match tag {
            "ADOP" => Self::Adoption,
            "ANUL" => Self::Annulment,
            "BAPL" => Self::LdsBaptism,
            "BAPM" => Self::Baptism,
            "BIRT" => Self::Birth,
            "BURI" => Self::Burial,
            "CHR" => Self::Christening,
            "DEAT" => Self::Death,
            "DIV" => Self::Divorce,
            "EDUC" => Self::Education,
            "ENGA" => Self::Engagement,
            "EVEN" => Self::Event,
            "IMMI" => Self::Immigration,
            "MARB" => Self::MarriageBann,
            "MARR" => Self::Marriage,
            "NATU" => Self::Naturalization,
            "OCCU" => Self::Occupation,
            "PROP" => Self::Property,
            "RESI" => Self::Residence,
            "RETI" => Self::Retirement,
            "SLGS" => Self::LdsSpouseSealing,
            other => Self::Other(other.to_string()),
        }
    }

    /// Stable GEDCOM code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Adoption => "ADOP",
            Self::Annulment => "ANUL",
            Self::LdsBaptism => "BAPL",
            Self::Baptism => "BAPM",
            Self::Birth => "BIRT",
            Self::Burial => "BURI",
            Self::Christening => "CHR",
            Self::Death => "DEAT",
            Self::Divorce => "DIV",
            Self::Education => "EDUC",
            Self::Engagement => "ENGA",
            Self::Event => "EVEN",
            Self::Immigration => "IMMI",
            Self::MarriageBann => "MARB",
            Self::Marriage => "MARR",
            Self::Naturalization => "NATU",
            Self::Occupation => "OCCU",
            Self::Property => "PROP",
            Self::Residence => "RESI",
            Self::Retirement => "RETI",
            Self::LdsSpouseSealing => "SLGS",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Default English label for recognized tags; the raw code otherwise.
    pub fn label(&self) -> &str {
        match self {
            Self::Adoption => "Adoption",
            Self::Annulment => "Annulment",
            Self::LdsBaptism => "LDS baptism",
            Self::Baptism => "Baptism",
            Self::Birth => "Birth",
            Self::Burial => "Burial",
            Self::Christening => "Christening",
            Self::Death => "Death",
            Self::Divorce => "Divorce",
            Self::Education => "Education",
            Self::Engagement => "Engagement",
            Self::Event => "Event",
            Self::Immigration => "Immigration",
            Self::MarriageBann => "Marriage banns",
            Self::Marriage => "Marriage",
            Self::Naturalization => "Naturalization",
            Self::Occupation => "Occupation",
            Self::Property => "Property",
            Self::Residence => "Residence",
            Self::Retirement => "Retirement",
            Self::LdsSpouseSealing => "LDS spouse sealing",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Whether this tag is eligible for timeline display.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn is_birth(&self) -> bool {
        matches!(self, Self::Birth)
    }

    pub fn is_marriage(&self) -> bool {
        matches!(self, Self::Marriage)
    }

    /// Category icon token, recognized tags only.
    pub fn icon_token(&self) -> Option<String> {
        self.is_recognized()
            .then(|| format!("wt-fact-icon-{}", self.as_str()))
    }
}

/// Returns the recognized display tag set.
pub fn recognized_tags() -> &'static [EventTag] {
    RECOGNIZED_TAGS
}

impl From<String> for EventTag {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for EventTag {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<EventTag> for String {
    fn from(value: EventTag) -> Self {
        value.as_str().to_string()
    }
}

impl Display for EventTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured place of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub short_name: String,
    pub full_name: String,
    /// Place page URL, when the host can link to one.
    #[serde(default)]
    pub url: Option<String>,
}

impl Place {
    pub fn new(short_name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            full_name: full_name.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// One life event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub owner: Record,
    pub tag: EventTag,
    #[serde(default)]
    pub date: EventDate,
    #[serde(default)]
    pub place: Option<Place>,
    /// Free-text value; may contain markup or a well-known marker.
    #[serde(default)]
    pub value: String,
    /// Raw GEDCOM block of the event.
    #[serde(default)]
    pub payload: String,
    /// Localized label supplied by the host; falls back to `EventTag::label`.
    #[serde(default)]
    pub label: Option<String>,
}

impl Event {
    pub fn new(owner: impl Into<Record>, tag: impl Into<EventTag>) -> Self {
        Self {
            owner: owner.into(),
            tag: tag.into(),
            date: EventDate::default(),
            place: None,
            value: String::new(),
            payload: String::new(),
            label: None,
        }
    }

    pub fn with_date(mut self, date: EventDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_place(mut self, place: Place) -> Self {
        self.place = Some(place);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Human title for the row.
    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.tag.label())
    }
}

#[cfg(test)]
mod tests {
    use super::{recognized_tags, EventTag};

    #[test]
    fn qualified_tags_use_last_segment() {
        assert_eq!(EventTag::parse("INDI:BIRT"), EventTag::Birth);
        assert_eq!(EventTag::parse("FAM:MARR"), EventTag::Marriage);
        assert_eq!(EventTag::parse("MARR"), EventTag::Marriage);
    }

    #[test]
    fn unknown_tags_are_not_recognized() {
        let tag = EventTag::parse("INDI:_MILT");
        assert_eq!(tag, EventTag::Other("_MILT".to_string()));
        assert!(!tag.is_recognized());
        assert_eq!(tag.icon_token(), None);
    }

    #[test]
    fn every_recognized_tag_round_trips_its_code() {
        assert_eq!(recognized_tags().len(), 21);
        for tag in recognized_tags() {
            assert!(tag.is_recognized());
            assert_eq!(&EventTag::parse(tag.as_str()), tag);
            assert_eq!(
                tag.icon_token(),
                Some(format!("wt-fact-icon-{}", tag.as_str()))
            );
        }
    }
}
