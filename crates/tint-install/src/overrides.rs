#![forbid(unsafe_code)]

//! Write-through configuration map scoped to the active theme session.
//!
//! Theme-wide key/value overrides (accent tinting, variant colors) live
//! here rather than in toolkit globals. The map is replaced wholesale on
//! every install — cleared and repopulated atomically, never partially
//! updated — so a new theme session never observes stale keys from the
//! previous one.

use ahash::AHashMap;
use tint_color::Rgb;

/// Override key for the focus accent color.
pub const ACCENT_FOCUS: &str = "accent.focus";
/// Override key for the link accent color.
pub const ACCENT_LINK: &str = "accent.link";
/// Override key for a variant family's tint color.
pub const VARIANT_TINT: &str = "variant.tint";
/// Override key for a variant family's accent color.
pub const VARIANT_ACCENT: &str = "variant.accent";

const ACCENT_KEY_PREFIX: &str = "accent.";

/// A single override value.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideValue {
    Color(Rgb),
    Flag(bool),
    Text(String),
}

/// Session-scoped theme overrides.
#[derive(Debug, Default)]
pub struct SessionOverrides {
    map: AHashMap<String, OverrideValue>,
}

impl SessionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one override for the current session.
    pub fn set(&mut self, key: impl Into<String>, value: OverrideValue) {
        self.map.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&OverrideValue> {
        self.map.get(key)
    }

    /// The color stored under `key`, if the key holds a color.
    pub fn color(&self, key: &str) -> Option<Rgb> {
        match self.map.get(key) {
            Some(OverrideValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Replace the whole map in one step.
    ///
    /// The new contents are built before the old map is dropped, so readers
    /// of `&self` never see a half-populated session.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = (String, OverrideValue)>) {
        let next: AHashMap<String, OverrideValue> = entries.into_iter().collect();
        self.map = next;
    }

    /// Drop every accent override.
    ///
    /// Invoked when a non-flat theme becomes active so a legacy theme never
    /// inherits accent tinting from a flat session.
    pub fn clear_accent_colors(&mut self) {
        self.map.retain(|key, _| !key.starts_with(ACCENT_KEY_PREFIX));
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_read_back_color() {
        let mut overrides = SessionOverrides::new();
        overrides.set(ACCENT_FOCUS, OverrideValue::Color(Rgb::new(1, 2, 3)));
        assert_eq!(overrides.color(ACCENT_FOCUS), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn color_accessor_ignores_non_color_values() {
        let mut overrides = SessionOverrides::new();
        overrides.set("ui.compact", OverrideValue::Flag(true));
        assert_eq!(overrides.color("ui.compact"), None);
    }

    #[test]
    fn clear_accent_colors_is_selective() {
        let mut overrides = SessionOverrides::new();
        overrides.set(ACCENT_FOCUS, OverrideValue::Color(Rgb::WHITE));
        overrides.set(ACCENT_LINK, OverrideValue::Color(Rgb::BLACK));
        overrides.set(VARIANT_TINT, OverrideValue::Color(Rgb::new(9, 9, 9)));
        overrides.clear_accent_colors();
        assert_eq!(overrides.color(ACCENT_FOCUS), None);
        assert_eq!(overrides.color(ACCENT_LINK), None);
        assert_eq!(overrides.color(VARIANT_TINT), Some(Rgb::new(9, 9, 9)));
    }

    #[test]
    fn replace_all_swaps_contents() {
        let mut overrides = SessionOverrides::new();
        overrides.set("stale.key", OverrideValue::Flag(false));
        overrides.replace_all([(
            ACCENT_LINK.to_string(),
            OverrideValue::Color(Rgb::new(4, 5, 6)),
        )]);
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("stale.key"), None);
        assert_eq!(overrides.color(ACCENT_LINK), Some(Rgb::new(4, 5, 6)));
    }

    #[test]
    fn text_values_round_trip() {
        let mut overrides = SessionOverrides::new();
        overrides.set("font.family", OverrideValue::Text("Inter".to_string()));
        assert_eq!(
            overrides.get("font.family"),
            Some(&OverrideValue::Text("Inter".to_string()))
        );
    }
}
