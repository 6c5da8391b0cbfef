#![forbid(unsafe_code)]

//! Generic snapshot-swap settings bus.
//!
//! One bus holds one immutable settings value behind an [`ArcSwap`].
//! Readers take a cheap snapshot and never block writers; writers replace
//! the whole value and notify listeners with the previous and next
//! snapshots. A panicking listener is logged and skipped, never allowed to
//! take down the notifying thread or starve later listeners.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::warn;

/// Handle for removing a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener<T> = Arc<dyn Fn(&T, &T) + Send + Sync>;

/// A single-value settings bus for one settings domain.
///
/// `set(None)` restores the domain default rather than clearing the value;
/// a bus always holds a usable snapshot.
pub struct SettingsBus<T> {
    snapshot: ArcSwap<T>,
    listeners: Mutex<Vec<(ListenerId, Listener<T>)>>,
    next_id: AtomicU64,
}

impl<T: Default + Send + Sync + 'static> Default for SettingsBus<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Default + Send + Sync + 'static> SettingsBus<T> {
    pub fn new(initial: T) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(initial),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Current snapshot. Cheap; never blocks writers.
    pub fn get(&self) -> Arc<T> {
        self.snapshot.load_full()
    }

    /// Replace the snapshot and notify listeners with (previous, next).
    /// `None` resets the domain to its default value.
    pub fn set(&self, value: Option<T>) {
        let next = Arc::new(value.unwrap_or_default());
        let prev = self.snapshot.swap(Arc::clone(&next));
        self.notify(&prev, &next);
    }

    /// Re-announce the current snapshot to every listener.
    ///
    /// Used after an operation with out-of-band effects (a theme install)
    /// so consumers re-derive anything computed from settings.
    pub fn refresh(&self) {
        let current = self.snapshot.load_full();
        self.notify(&current, &current);
    }

    /// Register a change listener. The listener sees every subsequent `set`
    /// and `refresh`, with the pre- and post-change snapshots.
    ///
    /// Listeners may call back into the bus — including removing
    /// themselves — while being notified; registration changes apply from
    /// the next notification.
    pub fn subscribe(&self, listener: impl Fn(&T, &T) + Send + Sync + 'static) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: ListenerId) {
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&self, prev: &T, next: &T) {
        // Snapshot under the lock, invoke outside it: a listener may call
        // back into this bus (unsubscribe itself, subscribe another, even
        // set) without deadlocking. Registration changes made during a
        // notification take effect from the next one.
        let snapshot: Vec<(ListenerId, Listener<T>)> = {
            let listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
            listeners.clone()
        };
        for (id, listener) in snapshot {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener(prev, next)));
            if outcome.is_err() {
                warn!(listener = id.0, "settings listener panicked; skipping");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Knobs {
        level: u32,
    }

    #[test]
    fn set_replaces_the_snapshot() {
        let bus = SettingsBus::<Knobs>::default();
        bus.set(Some(Knobs { level: 7 }));
        assert_eq!(bus.get().level, 7);
    }

    #[test]
    fn set_none_restores_the_default() {
        let bus = SettingsBus::new(Knobs { level: 3 });
        bus.set(None);
        assert_eq!(*bus.get(), Knobs::default());
    }

    #[test]
    fn listeners_see_prev_and_next() {
        let bus = SettingsBus::new(Knobs { level: 1 });
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bus.subscribe(move |prev, next: &Knobs| {
            sink.lock().unwrap().push((prev.level, next.level));
        });
        bus.set(Some(Knobs { level: 2 }));
        bus.set(Some(Knobs { level: 5 }));
        assert_eq!(*seen.lock().unwrap(), vec![(1, 2), (2, 5)]);
    }

    #[test]
    fn refresh_renotifies_with_identical_snapshots() {
        let bus = SettingsBus::new(Knobs { level: 4 });
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        bus.subscribe(move |prev, next: &Knobs| {
            assert_eq!(prev, next);
            counter.fetch_add(1, Ordering::SeqCst);
        });
        bus.refresh();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(bus.get().level, 4);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let bus = SettingsBus::<Knobs>::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = bus.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        bus.set(Some(Knobs { level: 1 }));
        bus.unsubscribe(id);
        bus.set(Some(Knobs { level: 2 }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn panicking_listener_does_not_starve_later_ones() {
        let bus = SettingsBus::<Knobs>::default();
        bus.subscribe(|_, _| panic!("listener bug"));
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        bus.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        bus.set(Some(Knobs { level: 9 }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // Bus stays usable after the panic.
        bus.set(Some(Knobs { level: 10 }));
        assert_eq!(bus.get().level, 10);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn listener_can_unsubscribe_itself_during_notification() {
        let bus = Arc::new(SettingsBus::<Knobs>::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let own_id = Arc::new(std::sync::OnceLock::new());

        let bus_handle = Arc::clone(&bus);
        let id_handle = Arc::clone(&own_id);
        let counter = Arc::clone(&calls);
        let id = bus.subscribe(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            if let Some(id) = id_handle.get() {
                bus_handle.unsubscribe(*id);
            }
        });
        own_id.set(id).unwrap();

        bus.set(Some(Knobs { level: 1 }));
        bus.set(Some(Knobs { level: 2 }));
        // Removal took effect after the first notification.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_can_subscribe_another_during_notification() {
        let bus = Arc::new(SettingsBus::<Knobs>::default());
        let late_calls = Arc::new(AtomicUsize::new(0));

        let bus_handle = Arc::clone(&bus);
        let counter = Arc::clone(&late_calls);
        bus.subscribe(move |_, _| {
            let inner = Arc::clone(&counter);
            bus_handle.subscribe(move |_, _| {
                inner.fetch_add(1, Ordering::SeqCst);
            });
        });

        bus.set(Some(Knobs { level: 1 }));
        // The listener registered mid-notification starts with the next one.
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);
        bus.set(Some(Knobs { level: 2 }));
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listener_can_write_back_to_the_bus() {
        let bus = Arc::new(SettingsBus::<Knobs>::default());
        let bus_handle = Arc::clone(&bus);
        bus.subscribe(move |_, next: &Knobs| {
            // Clamp-style follow-up write; only reacts to the first value to
            // keep the cascade finite.
            if next.level == 1 {
                bus_handle.set(Some(Knobs { level: 2 }));
            }
        });
        bus.set(Some(Knobs { level: 1 }));
        assert_eq!(bus.get().level, 2);
    }

    #[test]
    fn snapshots_outlive_later_writes() {
        let bus = SettingsBus::new(Knobs { level: 1 });
        let old = bus.get();
        bus.set(Some(Knobs { level: 2 }));
        assert_eq!(old.level, 1);
        assert_eq!(bus.get().level, 2);
    }
}
