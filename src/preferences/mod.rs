//! Display preferences and partial updates to them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Colour scheme of the profile view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other of the two themes.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Styling class of the outer container for this theme.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully populated preferences record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub notifications: bool,
    /// Short language code, e.g. "en".
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            language: "en".to_string(),
        }
    }
}

impl Preferences {
    /// Shallow-merges `patch` over `self`. Fields absent from the patch keep
    /// their current value.
    pub fn merged(mut self, patch: &PreferencesPatch) -> Self {
        if let Some(theme) = patch.theme {
            self.theme = theme;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(language) = &patch.language {
            self.language = language.clone();
        }
        self
    }
}

/// Partial preferences, used for custom defaults and for updates.
///
/// Deserializes from a TOML table where every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferencesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl PreferencesPatch {
    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn notifications(enabled: bool) -> Self {
        Self {
            notifications: Some(enabled),
            ..Self::default()
        }
    }

    pub fn language(code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.notifications.is_none() && self.language.is_none()
    }

    /// Combines two patches; fields set in `other` win.
    pub fn overlay(self, other: PreferencesPatch) -> Self {
        Self {
            theme: other.theme.or(self.theme),
            notifications: other.notifications.or(self.notifications),
            language: other.language.or(self.language),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_light_with_notifications_in_english() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.notifications);
        assert_eq!(prefs.language, "en");
    }

    #[test]
    fn theme_toggle_flips_between_two_values() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.class_name(), "dark-theme");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn merge_only_touches_fields_present_in_patch() {
        let prefs = Preferences::default().merged(&PreferencesPatch::theme(Theme::Dark));
        assert_eq!(
            prefs,
            Preferences {
                theme: Theme::Dark,
                notifications: true,
                language: "en".to_string(),
            }
        );

        let patch = PreferencesPatch {
            notifications: Some(false),
            language: Some("fr".to_string()),
            ..PreferencesPatch::default()
        };
        let prefs = prefs.merged(&patch);
        assert_eq!(
            prefs,
            Preferences {
                theme: Theme::Dark,
                notifications: false,
                language: "fr".to_string(),
            }
        );
    }

    #[test]
    fn empty_patch_is_identity() {
        let prefs = Preferences::default();
        assert!(PreferencesPatch::default().is_empty());
        assert_eq!(prefs.clone().merged(&PreferencesPatch::default()), prefs);
    }

    #[test]
    fn overlay_prefers_later_patch() {
        let base = PreferencesPatch {
            theme: Some(Theme::Dark),
            notifications: Some(false),
            language: None,
        };
        let combined = base.overlay(PreferencesPatch::theme(Theme::Light));
        assert_eq!(combined.theme, Some(Theme::Light));
        assert_eq!(combined.notifications, Some(false));
        assert_eq!(combined.language, None);
    }

    #[test]
    fn patch_parses_from_partial_toml() {
        let patch: PreferencesPatch = toml::from_str("theme = \"dark\"").unwrap();
        assert_eq!(patch, PreferencesPatch::theme(Theme::Dark));

        let err = toml::from_str::<PreferencesPatch>("colour = \"red\"");
        assert!(err.is_err());
    }
}
