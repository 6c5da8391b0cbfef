#![forbid(unsafe_code)]

//! Look-and-feel installation for the chat client.
//!
//! Turns a theme request (keyword, qualified reference, or pack entry) into
//! an active theme, degrading through fallback chains so the UI always ends
//! up themed. The toolkit and the external theme pack sit behind the
//! [`ThemeEngine`] and [`ThemePackProvider`] seams.

pub mod engine;
pub mod error;
pub mod installer;
pub mod overrides;
pub mod pack;
pub mod strategy;

pub use engine::{
    BASELINE_DARK, BASELINE_LIGHT, FlatPreset, MIDNIGHT, PAPER, ThemeEngine, flat_preset,
};
pub use error::{EngineError, FatalThemeError};
pub use installer::{
    ACCENT_REPAIR_MIN_RATIO, DIAGNOSTICS_ENV, InstallPath, InstallReport, LookAndFeelInstaller,
};
pub use overrides::{
    ACCENT_FOCUS, ACCENT_LINK, OverrideValue, SessionOverrides, VARIANT_ACCENT, VARIANT_TINT,
};
pub use pack::{NoopThemePack, ThemePackProvider};
pub use strategy::{InstallCtx, InstallStrategy, VariantSpec};
