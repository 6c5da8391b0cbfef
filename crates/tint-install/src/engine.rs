#![forbid(unsafe_code)]

//! The UI-toolkit seam and the flat preset catalog.
//!
//! The installer never talks to a concrete windowing toolkit. Everything it
//! needs — activating an engine, reading the active panel background — goes
//! through [`ThemeEngine`]. The real implementation lives with the toolkit
//! collaborator; tests script a fake.
//!
//! All engine mutations happen on the thread that owns the toolkit's global
//! state; callers marshal onto it, this crate does not.

use tint_color::Rgb;

use crate::error::EngineError;

/// Capability surface of the UI-toolkit theme machinery.
pub trait ThemeEngine {
    /// Activate a built-in engine by name (e.g. `"system-native"`).
    fn install_named(&mut self, name: &str) -> Result<(), EngineError>;

    /// Instantiate and activate a look-and-feel by fully qualified
    /// implementation name.
    fn install_qualified(&mut self, target: &str) -> Result<(), EngineError>;

    /// Activate the generic flat engine with the given preset.
    ///
    /// This is the baseline path with no preconditions; a failure here is
    /// treated as fatal by the installer.
    fn install_flat(&mut self, preset: &FlatPreset) -> Result<(), EngineError>;

    /// Name of the currently active engine, if any.
    fn active_engine(&self) -> Option<String>;

    /// Background color of the active panel surface, if known.
    fn panel_background(&self) -> Option<Rgb>;
}

/// A pre-baked configuration layered on the generic flat engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatPreset {
    pub name: &'static str,
    pub background: Rgb,
    pub foreground: Rgb,
    pub overlay: Rgb,
}

/// The guaranteed baseline: always installable, dark.
pub const BASELINE_DARK: FlatPreset = FlatPreset {
    name: "baseline-dark",
    background: Rgb::new(30, 32, 36),
    foreground: Rgb::new(224, 226, 230),
    overlay: Rgb::new(45, 48, 54),
};

/// Light counterpart of the baseline.
pub const BASELINE_LIGHT: FlatPreset = FlatPreset {
    name: "baseline-light",
    background: Rgb::new(246, 247, 249),
    foreground: Rgb::new(28, 30, 34),
    overlay: Rgb::new(232, 234, 238),
};

/// Deep blue-black preset.
pub const MIDNIGHT: FlatPreset = FlatPreset {
    name: "midnight",
    background: Rgb::new(12, 14, 22),
    foreground: Rgb::new(198, 206, 222),
    overlay: Rgb::new(24, 28, 40),
};

/// Warm off-white preset.
pub const PAPER: FlatPreset = FlatPreset {
    name: "paper",
    background: Rgb::new(250, 247, 240),
    foreground: Rgb::new(42, 40, 36),
    overlay: Rgb::new(236, 231, 220),
};

const PRESETS: [&FlatPreset; 4] = [&BASELINE_DARK, &BASELINE_LIGHT, &MIDNIGHT, &PAPER];

/// Look up a flat preset by normalized keyword.
pub fn flat_preset(keyword: &str) -> Option<&'static FlatPreset> {
    PRESETS.iter().copied().find(|p| p.name == keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_color::{CHAT_TEXT_MIN_RATIO, contrast_ratio};

    #[test]
    fn preset_lookup_by_keyword() {
        assert_eq!(flat_preset("baseline-dark"), Some(&BASELINE_DARK));
        assert_eq!(flat_preset("paper"), Some(&PAPER));
        assert_eq!(flat_preset("nope"), None);
    }

    #[test]
    fn preset_names_match_registry_keys() {
        for preset in PRESETS {
            assert_eq!(flat_preset(preset.name), Some(preset));
        }
    }

    #[test]
    fn preset_foregrounds_are_readable() {
        for preset in PRESETS {
            let ratio = contrast_ratio(preset.foreground, preset.background);
            assert!(
                ratio >= CHAT_TEXT_MIN_RATIO,
                "{}: fg/bg ratio {ratio} below text minimum",
                preset.name
            );
        }
    }
}
