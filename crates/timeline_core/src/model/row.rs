//! Render-ready timeline projections.
//!
//! # Responsibility
//! - Hold the per-event values the renderer turns into markup.
//!
//! # Invariants
//! - `DisplayAge::NotApplicable` only appears on birth rows.
//! - Rows are discarded after one rendering pass.

use crate::model::event::{EventTag, Place};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Column label shown in place of an age on birth rows.
pub const AGE_NOT_APPLICABLE_LABEL: &str = "(AGE)";

/// Year shown for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayYear {
    Year(i32),
    /// No date bound carried a year.
    Empty,
}

impl DisplayYear {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for DisplayYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{year}"),
            Self::Empty => Ok(()),
        }
    }
}

/// Age shown for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayAge {
    Years(u32),
    NotApplicable,
}

impl Display for DisplayAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years}"),
            Self::NotApplicable => f.write_str(AGE_NOT_APPLICABLE_LABEL),
        }
    }
}

/// Primary value of a row: plain text or a link to another record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayValue {
    /// Markup-free text.
    Text { text: String },
    /// Profile link of the displayed party.
    Profile { name: String, url: String },
}

impl DisplayValue {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn profile(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Profile {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Navigable link carried by the value, if any.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::Profile { url, .. } => Some(url.as_str()).filter(|url| !url.is_empty()),
        }
    }
}

/// Resolved row image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ImageRef {
    Url(String),
    /// Icon class token (category icon or silhouette).
    Icon(String),
    #[default]
    None,
}

impl ImageRef {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `self` unless absent, else the lazily built fallback.
    pub fn or_else(self, fallback: impl FnOnce() -> ImageRef) -> ImageRef {
        match self {
            Self::None => fallback(),
            resolved => resolved,
        }
    }
}

/// One render-ready timeline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    pub tag: EventTag,
    pub year: DisplayYear,
    pub age: DisplayAge,
    pub title: String,
    pub value: DisplayValue,
    /// Date text as formatted by the host.
    pub date_display: String,
    pub place: Option<Place>,
    pub image: ImageRef,
}

impl TimelineRow {
    /// Age column text; blank whenever the year is blank.
    pub fn age_label(&self) -> String {
        if self.year.is_empty() {
            String::new()
        } else {
            self.age.to_string()
        }
    }

    /// Click-through target for the image block.
    pub fn link(&self) -> Option<&str> {
        self.value.link()
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayAge, DisplayValue, DisplayYear, ImageRef, TimelineRow};
    use crate::model::event::EventTag;

    fn row(year: DisplayYear, age: DisplayAge) -> TimelineRow {
        TimelineRow {
            tag: EventTag::Birth,
            year,
            age,
            title: "Birth".to_string(),
            value: DisplayValue::text(""),
            date_display: String::new(),
            place: None,
            image: ImageRef::None,
        }
    }

    #[test]
    fn age_label_is_blank_without_year() {
        assert_eq!(row(DisplayYear::Empty, DisplayAge::NotApplicable).age_label(), "");
        assert_eq!(row(DisplayYear::Year(1950), DisplayAge::NotApplicable).age_label(), "(AGE)");
        assert_eq!(row(DisplayYear::Year(1970), DisplayAge::Years(20)).age_label(), "20");
    }

    #[test]
    fn only_profiles_carry_links() {
        assert_eq!(DisplayValue::text("x").link(), None);
        assert_eq!(DisplayValue::profile("A", "/i/I1").link(), Some("/i/I1"));
        assert_eq!(DisplayValue::profile("A", "").link(), None);
    }

    #[test]
    fn or_else_only_replaces_absent_images() {
        let url = ImageRef::Url("https://x/a.jpg".to_string());
        assert_eq!(url.clone().or_else(|| ImageRef::Icon("i".to_string())), url);
        assert_eq!(
            ImageRef::None.or_else(|| ImageRef::Icon("i".to_string())),
            ImageRef::Icon("i".to_string())
        );
    }
}
