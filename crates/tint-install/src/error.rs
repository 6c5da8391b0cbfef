#![forbid(unsafe_code)]

//! Error types for the installation pipeline.
//!
//! [`EngineError`] covers a single install attempt and is always absorbed by
//! the fallback machinery. [`FatalThemeError`] is the one error that escapes
//! [`LookAndFeelInstaller::install`](crate::LookAndFeelInstaller::install):
//! the guaranteed baseline theme could not be installed, and the application
//! cannot render without a theme.

use thiserror::Error;

/// A single strategy or engine attempt failed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The named engine does not exist on this platform.
    #[error("engine `{0}` is unavailable on this platform")]
    Unavailable(String),
    /// The engine exists but activation failed.
    #[error("failed to activate `{target}`: {reason}")]
    Activation { target: String, reason: String },
}

/// The designed-to-always-succeed baseline install failed.
#[derive(Debug, Error)]
pub enum FatalThemeError {
    /// Fatal configuration error; surfaced to the caller's error channel,
    /// never masked.
    #[error("baseline theme install failed: {0}")]
    BaselineFailed(#[from] EngineError),
}
