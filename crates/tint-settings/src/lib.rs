#![forbid(unsafe_code)]

//! Typed settings buses for the chat client.
//!
//! Every settings domain is an immutable snapshot held by a
//! [`SettingsBus`]: readers take wait-free snapshots, writers replace the
//! value wholesale and notify listeners synchronously. [`SettingsHub`]
//! groups one bus per domain for the process lifetime.

pub mod bus;
pub mod domains;
pub mod hub;

pub use bus::{ListenerId, SettingsBus};
pub use domains::{
    AccentSettings, ChatThemeSettings, EmbedStyleSettings, GeneralUiSettings,
    NotificationSettings, SpellcheckSettings,
};
pub use hub::SettingsHub;
