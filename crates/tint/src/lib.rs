#![forbid(unsafe_code)]

//! Facade over the theme subsystem.
//!
//! Re-exports the component crates under stable module names so an
//! application depends on one crate:
//!
//! - [`color`] — hex parsing, mixing, luminance, and contrast search
//! - [`resolve`] — theme token classification
//! - [`install`] — the look-and-feel installation pipeline
//! - [`settings`] — typed settings buses and snapshot domains
//!
//! ```
//! use tint::prelude::*;
//!
//! let token = resolve::normalize("  Baseline-Dark ");
//! assert_eq!(token, ThemeToken::Keyword("baseline-dark".to_string()));
//!
//! let text = best_text_color(Rgb::new(30, 32, 36));
//! assert_eq!(text, Rgb::WHITE);
//! ```

pub use tint_color as color;
pub use tint_install as install;
pub use tint_resolve as resolve;
pub use tint_settings as settings;

/// The names most applications need.
pub mod prelude {
    pub use tint_color::{
        Rgb, best_text_color, contrast_ratio, correct_readability, ensure_contrast, is_dark,
    };
    pub use tint_install::{
        FatalThemeError, InstallReport, LookAndFeelInstaller, NoopThemePack, OverrideValue,
        ThemeEngine, ThemePackProvider,
    };
    pub use tint_resolve::{ThemeToken, normalize, same_theme};
    pub use tint_settings::{SettingsBus, SettingsHub};

    pub use crate::{color, install, resolve, settings};
}
