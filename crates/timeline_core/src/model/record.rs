//! Genealogical records that own events.
//!
//! # Responsibility
//! - Model individuals, two-party unions and opaque third-party records.
//! - Expose record capabilities (portrait, sex) as data instead of probing.
//!
//! # Invariants
//! - `xref` identifies a record within one tree and is the identity used for
//!   "is this the subject" checks.

use crate::model::date::DateRange;
use serde::{Deserialize, Serialize};

/// Cross-reference id of a record (for example `I12` or `F3`).
pub type Xref = String;

/// Recorded sex of an individual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M", alias = "m")]
    Male,
    #[serde(rename = "F", alias = "f")]
    Female,
    #[default]
    #[serde(rename = "U", alias = "u")]
    Unknown,
}

impl Sex {
    /// Parses a GEDCOM `SEX` value. Anything unrecognized is `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "M" | "m" => Self::Male,
            "F" | "f" => Self::Female,
            _ => Self::Unknown,
        }
    }

    /// Lowercase single-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
            Self::Unknown => "u",
        }
    }

    /// Icon token for the placeholder portrait of this sex.
    pub fn silhouette_token(self) -> String {
        format!("wt-individual-silhouette-{}", self.code())
    }
}

/// Optional behavior a record kind may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordCapability {
    /// Can be asked for a portrait image.
    Portrait,
    /// Carries a recorded sex.
    Sex,
}

impl RecordCapability {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Sex => "sex",
        }
    }
}

/// A person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    pub xref: Xref,
    pub full_name: String,
    /// Profile page URL.
    pub url: String,
    #[serde(default)]
    pub sex: Sex,
    /// Birth window; `DateRange::unknown()` when no birth date is recorded.
    #[serde(default)]
    pub birth: DateRange,
}

impl Individual {
    pub fn new(xref: impl Into<Xref>, full_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            xref: xref.into(),
            full_name: full_name.into(),
            url: url.into(),
            sex: Sex::Unknown,
            birth: DateRange::unknown(),
        }
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_birth(mut self, birth: DateRange) -> Self {
        self.birth = birth;
        self
    }

    /// Whether this record and `other` are the same person.
    pub fn is_same(&self, other: &Individual) -> bool {
        self.xref == other.xref
    }
}

/// A two-party relationship record (family/marriage).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Union {
    pub xref: Xref,
    /// Display name, typically "Husband + Wife".
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub husband: Option<Individual>,
    #[serde(default)]
    pub wife: Option<Individual>,
}

impl Union {
    pub fn new(xref: impl Into<Xref>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            xref: xref.into(),
            name: name.into(),
            url: url.into(),
            husband: None,
            wife: None,
        }
    }

    pub fn with_husband(mut self, husband: Individual) -> Self {
        self.husband = Some(husband);
        self
    }

    pub fn with_wife(mut self, wife: Individual) -> Self {
        self.wife = Some(wife);
        self
    }

    /// Present spouses, husband first.
    pub fn spouses(&self) -> impl Iterator<Item = &Individual> {
        self.husband.iter().chain(self.wife.iter())
    }

    /// Whether `individual` is one of the two parties.
    pub fn has_spouse(&self, individual: &Individual) -> bool {
        self.spouses().any(|spouse| spouse.is_same(individual))
    }

    /// The party that is not `individual`; the last such spouse wins.
    pub fn partner_of(&self, individual: &Individual) -> Option<&Individual> {
        self.spouses()
            .filter(|spouse| !spouse.is_same(individual))
            .last()
    }

    /// The husband, or the wife when the husband is `individual` or absent.
    pub fn opposing_spouse(&self, individual: &Individual) -> Option<&Individual> {
        match &self.husband {
            Some(husband) if !husband.is_same(individual) => Some(husband),
            _ => self.wife.as_ref(),
        }
    }
}

/// Any other record kind that can own events (source, note, shared event...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueRecord {
    pub xref: Xref,
    pub name: String,
    pub url: String,
}

impl OpaqueRecord {
    pub fn new(xref: impl Into<Xref>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            xref: xref.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Owning record of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Individual(Individual),
    Union(Union),
    Opaque(OpaqueRecord),
}

impl Record {
    pub fn xref(&self) -> &str {
        match self {
            Self::Individual(individual) => &individual.xref,
            Self::Union(union) => &union.xref,
            Self::Opaque(record) => &record.xref,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Individual(individual) => &individual.full_name,
            Self::Union(union) => &union.name,
            Self::Opaque(record) => &record.name,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Individual(individual) => &individual.url,
            Self::Union(union) => &union.url,
            Self::Opaque(record) => &record.url,
        }
    }

    /// Capability check; only individuals have portraits and a sex.
    pub fn supports(&self, capability: RecordCapability) -> bool {
        match (self, capability) {
            (Self::Individual(_), RecordCapability::Portrait | RecordCapability::Sex) => true,
            (Self::Union(_) | Self::Opaque(_), _) => false,
        }
    }

    pub fn as_individual(&self) -> Option<&Individual> {
        match self {
            Self::Individual(individual) => Some(individual),
            _ => None,
        }
    }

    /// Recorded sex when the record has the `Sex` capability.
    pub fn sex(&self) -> Option<Sex> {
        self.as_individual().map(|individual| individual.sex)
    }
}

impl From<Individual> for Record {
    fn from(value: Individual) -> Self {
        Self::Individual(value)
    }
}

impl From<Union> for Record {
    fn from(value: Union) -> Self {
        Self::Union(value)
    }
}

impl From<OpaqueRecord> for Record {
    fn from(value: OpaqueRecord) -> Self {
        Self::Opaque(value)
    }
}
