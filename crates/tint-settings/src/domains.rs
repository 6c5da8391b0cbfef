#![forbid(unsafe_code)]

//! Per-domain settings snapshots.
//!
//! Each domain is an immutable value object built through a constructor
//! that clamps every bounded field to its documented range. A consumer
//! holding a snapshot can rely on every field being in range; out-of-range
//! or non-finite config input is normalized, never rejected.

use tint_color::Rgb;

fn clamp_f64(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

/// Chat rendering theme knobs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChatThemeSettings {
    /// Font scale multiplier, clamped to [0.5, 3.0].
    pub font_scale: f64,
    /// Vertical pixels between messages, clamped to [0, 16].
    pub message_spacing: u8,
    /// Explicit timestamp color; `None` derives from the active theme.
    pub timestamp_color: Option<Rgb>,
    pub show_avatars: bool,
}

impl ChatThemeSettings {
    pub fn new(
        font_scale: f64,
        message_spacing: u8,
        timestamp_color: Option<Rgb>,
        show_avatars: bool,
    ) -> Self {
        Self {
            font_scale: clamp_f64(font_scale, 0.5, 3.0, 1.0),
            message_spacing: message_spacing.min(16),
            timestamp_color,
            show_avatars,
        }
    }
}

impl Default for ChatThemeSettings {
    fn default() -> Self {
        Self::new(1.0, 4, None, true)
    }
}

/// User accent colors layered on the active theme.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccentSettings {
    pub focus: Option<Rgb>,
    pub link: Option<Rgb>,
    /// Highlight color behind mentions of the local user.
    pub mention_highlight: Option<Rgb>,
}

impl AccentSettings {
    pub fn new(focus: Option<Rgb>, link: Option<Rgb>, mention_highlight: Option<Rgb>) -> Self {
        Self {
            focus,
            link,
            mention_highlight,
        }
    }
}

/// Inline embed (link preview, media card) styling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmbedStyleSettings {
    /// Stripe color on the embed's leading edge; `None` uses the accent.
    pub stripe_color: Option<Rgb>,
    /// Corner radius in pixels, clamped to [0, 24].
    pub corner_radius: u8,
    /// Maximum preview height in pixels, clamped to [80, 640].
    pub max_height: u16,
}

impl EmbedStyleSettings {
    pub fn new(stripe_color: Option<Rgb>, corner_radius: u8, max_height: u16) -> Self {
        Self {
            stripe_color,
            corner_radius: corner_radius.min(24),
            max_height: max_height.clamp(80, 640),
        }
    }
}

impl Default for EmbedStyleSettings {
    fn default() -> Self {
        Self::new(None, 6, 320)
    }
}

/// Spellcheck behavior for the message composer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellcheckSettings {
    pub enabled: bool,
    /// BCP 47 language tag, lowercased at construction.
    pub language: String,
    /// Underline color for misspellings; `None` derives from the theme.
    pub underline_color: Option<Rgb>,
}

impl SpellcheckSettings {
    pub fn new(enabled: bool, language: &str, underline_color: Option<Rgb>) -> Self {
        Self {
            enabled,
            language: language.trim().to_ascii_lowercase(),
            underline_color,
        }
    }
}

impl Default for SpellcheckSettings {
    fn default() -> Self {
        Self::new(true, "en-us", None)
    }
}

/// Notification rules.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationSettings {
    pub desktop_popups: bool,
    pub sounds: bool,
    /// Popup display time in seconds, clamped to [1, 60].
    pub popup_seconds: u8,
    /// Suppress everything except direct mentions.
    pub mentions_only: bool,
}

impl NotificationSettings {
    pub fn new(desktop_popups: bool, sounds: bool, popup_seconds: u8, mentions_only: bool) -> Self {
        Self {
            desktop_popups,
            sounds,
            popup_seconds: popup_seconds.clamp(1, 60),
            mentions_only,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self::new(true, true, 8, false)
    }
}

/// Window-level UI preferences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralUiSettings {
    /// Raw theme token handed to the installer (keyword, qualified
    /// reference, or pack entry).
    pub theme_token: String,
    pub compact_layout: bool,
    /// Sidebar width in pixels, clamped to [120, 480].
    pub sidebar_width: u16,
}

impl GeneralUiSettings {
    pub fn new(theme_token: &str, compact_layout: bool, sidebar_width: u16) -> Self {
        Self {
            theme_token: theme_token.trim().to_string(),
            compact_layout,
            sidebar_width: sidebar_width.clamp(120, 480),
        }
    }
}

impl Default for GeneralUiSettings {
    fn default() -> Self {
        Self::new("baseline-dark", false, 240)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_scale_is_clamped() {
        assert_eq!(ChatThemeSettings::new(9.0, 4, None, true).font_scale, 3.0);
        assert_eq!(ChatThemeSettings::new(0.1, 4, None, true).font_scale, 0.5);
        assert_eq!(ChatThemeSettings::new(1.25, 4, None, true).font_scale, 1.25);
    }

    #[test]
    fn non_finite_font_scale_falls_back() {
        assert_eq!(
            ChatThemeSettings::new(f64::NAN, 4, None, true).font_scale,
            1.0
        );
        assert_eq!(
            ChatThemeSettings::new(f64::INFINITY, 4, None, true).font_scale,
            1.0
        );
    }

    #[test]
    fn message_spacing_is_capped() {
        assert_eq!(
            ChatThemeSettings::new(1.0, 200, None, true).message_spacing,
            16
        );
    }

    #[test]
    fn embed_bounds_are_enforced() {
        let embed = EmbedStyleSettings::new(None, 99, 10_000);
        assert_eq!(embed.corner_radius, 24);
        assert_eq!(embed.max_height, 640);
        assert_eq!(EmbedStyleSettings::new(None, 0, 0).max_height, 80);
    }

    #[test]
    fn spellcheck_language_is_normalized() {
        let spell = SpellcheckSettings::new(true, "  EN-GB ", None);
        assert_eq!(spell.language, "en-gb");
    }

    #[test]
    fn popup_seconds_never_zero() {
        assert_eq!(NotificationSettings::new(true, true, 0, false).popup_seconds, 1);
        assert_eq!(
            NotificationSettings::new(true, true, 255, false).popup_seconds,
            60
        );
    }

    #[test]
    fn sidebar_width_is_clamped() {
        assert_eq!(GeneralUiSettings::new("x", false, 10).sidebar_width, 120);
        assert_eq!(GeneralUiSettings::new("x", false, 9999).sidebar_width, 480);
    }

    #[test]
    fn defaults_are_in_range() {
        let chat = ChatThemeSettings::default();
        assert!((0.5..=3.0).contains(&chat.font_scale));
        assert!(chat.message_spacing <= 16);
        let notif = NotificationSettings::default();
        assert!((1..=60).contains(&notif.popup_seconds));
    }
}
