#![forbid(unsafe_code)]

//! Process-lifetime aggregation of the per-domain buses.

use crate::bus::SettingsBus;
use crate::domains::{
    AccentSettings, ChatThemeSettings, EmbedStyleSettings, GeneralUiSettings,
    NotificationSettings, SpellcheckSettings,
};

/// One bus per settings domain.
///
/// The application builds a single hub at startup and hands collaborators
/// references to the buses they care about. Buses are independent; editing
/// one domain never notifies another.
#[derive(Default)]
pub struct SettingsHub {
    pub chat_theme: SettingsBus<ChatThemeSettings>,
    pub accent: SettingsBus<AccentSettings>,
    pub embed_style: SettingsBus<EmbedStyleSettings>,
    pub spellcheck: SettingsBus<SpellcheckSettings>,
    pub notifications: SettingsBus<NotificationSettings>,
    pub general_ui: SettingsBus<GeneralUiSettings>,
}

impl SettingsHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-announce every domain's current snapshot.
    ///
    /// Called after a theme install so consumers re-derive colors computed
    /// against the previous theme's backgrounds.
    pub fn refresh_all(&self) {
        self.chat_theme.refresh();
        self.accent.refresh();
        self.embed_style.refresh();
        self.spellcheck.refresh();
        self.notifications.refresh();
        self.general_ui.refresh();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn hub_starts_with_domain_defaults() {
        let hub = SettingsHub::new();
        assert_eq!(*hub.chat_theme.get(), ChatThemeSettings::default());
        assert_eq!(*hub.notifications.get(), NotificationSettings::default());
    }

    #[test]
    fn domains_are_independent() {
        let hub = SettingsHub::new();
        let chat_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&chat_calls);
        hub.chat_theme.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        hub.accent.set(Some(AccentSettings::default()));
        assert_eq!(chat_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn refresh_all_touches_every_bus() {
        let hub = SettingsHub::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let c1 = Arc::clone(&calls);
        let c2 = Arc::clone(&calls);
        hub.chat_theme.subscribe(move |_, _| {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        hub.general_ui.subscribe(move |_, _| {
            c2.fetch_add(1, Ordering::SeqCst);
        });
        hub.refresh_all();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
