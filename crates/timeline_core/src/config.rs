//! Timeline settings and host preference parsing.
//!
//! # Responsibility
//! - Hold per-request knobs: plausibility cap, category flags, stylesheet.
//! - Translate the host's string preference store into typed settings.
//!
//! # Invariants
//! - A cap of `0` or an absent cap resolves to `DEFAULT_MAX_PLAUSIBLE_AGE`.
//! - Boolean preferences follow lenient host semantics: unknown text is `false`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Cap used when the tree does not configure a usable one.
pub const DEFAULT_MAX_PLAUSIBLE_AGE: u32 = 120;

/// Preference key: include family events.
pub const PREF_FAMILY_FACTS: &str = "familyfacts";
/// Preference key: include associate events.
pub const PREF_ASSOCIATE_FACTS: &str = "associatefacts";
/// Preference key: include close-relative events.
pub const PREF_RELATIVE_FACTS: &str = "relativefacts";
/// Preference key: include historic reference events.
pub const PREF_HISTORIC_FACTS: &str = "historicfacts";
/// Tree preference key: maximum believable age.
pub const PREF_MAX_ALIVE_AGE: &str = "MAX_ALIVE_AGE";
/// Preference key: stylesheet URL emitted with the fragment.
pub const PREF_STYLESHEET: &str = "stylesheet";

/// Which optional event categories are merged into the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IncludeFlags {
    pub family: bool,
    pub associate: bool,
    pub relative: bool,
    pub historic: bool,
}

impl Default for IncludeFlags {
    fn default() -> Self {
        Self {
            family: true,
            associate: true,
            relative: true,
            historic: false,
        }
    }
}

impl IncludeFlags {
    /// Every optional category enabled.
    pub fn all() -> Self {
        Self {
            family: true,
            associate: true,
            relative: true,
            historic: true,
        }
    }

    /// Own events only.
    pub fn none() -> Self {
        Self {
            family: false,
            associate: false,
            relative: false,
            historic: false,
        }
    }
}

/// Settings for one timeline build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Ages above this are shown as `0`. `None`/`0` means the default cap.
    pub max_plausible_age: Option<u32>,
    pub include: IncludeFlags,
    /// Emitted as a `<link rel="stylesheet">` inside the container when set.
    pub stylesheet_url: Option<String>,
}

impl TimelineSettings {
    /// Effective plausibility cap.
    pub fn effective_max_plausible_age(&self) -> u32 {
        match self.max_plausible_age {
            Some(age) if age > 0 => age,
            _ => DEFAULT_MAX_PLAUSIBLE_AGE,
        }
    }

    /// Builds settings from the host preference map.
    ///
    /// Missing keys keep their defaults.
    ///
    /// # Errors
    /// - `SettingsError::InvalidNumber` when `MAX_ALIVE_AGE` is not a
    ///   non-negative integer.
    pub fn from_preferences(preferences: &BTreeMap<String, String>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();
        let flag = |key: &str, default: bool| {
            preferences
                .get(key)
                .map(|value| parse_bool_preference(value))
                .unwrap_or(default)
        };

        settings.include = IncludeFlags {
            family: flag(PREF_FAMILY_FACTS, settings.include.family),
            associate: flag(PREF_ASSOCIATE_FACTS, settings.include.associate),
            relative: flag(PREF_RELATIVE_FACTS, settings.include.relative),
            historic: flag(PREF_HISTORIC_FACTS, settings.include.historic),
        };

        if let Some(raw) = preferences.get(PREF_MAX_ALIVE_AGE) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                let age = trimmed
                    .parse::<u32>()
                    .map_err(|_| SettingsError::InvalidNumber {
                        key: PREF_MAX_ALIVE_AGE,
                        value: raw.clone(),
                    })?;
                settings.max_plausible_age = Some(age);
            }
        }

        settings.stylesheet_url = preferences
            .get(PREF_STYLESHEET)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(settings)
    }
}

/// Lenient boolean parsing for stored preference strings.
///
/// `1`, `true`, `on` and `yes` (any case, surrounding whitespace ignored) are
/// `true`; everything else is `false`.
pub fn parse_bool_preference(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

/// Settings parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    InvalidNumber { key: &'static str, value: String },
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "preference `{key}` must be a non-negative integer, got `{value}`")
            }
        }
    }
}

impl Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::{parse_bool_preference, TimelineSettings, DEFAULT_MAX_PLAUSIBLE_AGE};

    #[test]
    fn bool_preferences_are_lenient() {
        for value in ["1", "true", " ON ", "Yes"] {
            assert!(parse_bool_preference(value), "{value} should be true");
        }
        for value in ["0", "", "false", "off", "2", "enabled"] {
            assert!(!parse_bool_preference(value), "{value} should be false");
        }
    }

    #[test]
    fn zero_or_missing_cap_uses_default() {
        let mut settings = TimelineSettings::default();
        assert_eq!(settings.effective_max_plausible_age(), DEFAULT_MAX_PLAUSIBLE_AGE);
        settings.max_plausible_age = Some(0);
        assert_eq!(settings.effective_max_plausible_age(), DEFAULT_MAX_PLAUSIBLE_AGE);
        settings.max_plausible_age = Some(95);
        assert_eq!(settings.effective_max_plausible_age(), 95);
    }

    #[test]
    fn historic_events_are_off_by_default() {
        let settings = TimelineSettings::default();
        assert!(settings.include.family);
        assert!(settings.include.associate);
        assert!(settings.include.relative);
        assert!(!settings.include.historic);
    }
}
