//! Animation preference state with persistence and change notification.
//!
//! [`AnimationStore`] is owned by whoever composes the page and handed to the
//! parts that need it. Persistence goes through [`PreferenceStorage`], so the
//! browser can back it with `localStorage` and tests with [`MemoryStorage`].

use crate::config::{AnimationConfig, Complexity, ConfigPatch};
use crate::constants::{STORAGE_KEY_CONFIG, STORAGE_KEY_ENABLED};
use crate::device::{DeviceInfo, PerformanceLevel};
use crate::error::Result;
use std::collections::HashMap;

/// Key-value persistence for preferences.
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage; used when no persistent store is reachable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Snapshot handed to subscribers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// The user's toggle, before reduced motion is taken into account.
    pub animations_enabled: bool,
    pub is_reduced_motion: bool,
    pub performance_level: PerformanceLevel,
    pub config: AnimationConfig,
}

impl AnimationState {
    /// What the renderer should honour.
    pub fn effective_enabled(&self) -> bool {
        self.animations_enabled && !self.is_reduced_motion
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    EnabledChanged,
    ConfigChanged,
    ReducedMotionChanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(StoreEvent, &AnimationState)>;

/// Patch forced on low-end devices.
pub fn low_performance_patch() -> ConfigPatch {
    ConfigPatch::default()
        .complexity(Complexity::Low)
        .intensity(0.5)
}

/// Patch forced while the system asks for reduced motion.
pub fn reduced_motion_patch() -> ConfigPatch {
    ConfigPatch::default().speed(0.5).intensity(0.3)
}

pub struct AnimationStore<S: PreferenceStorage> {
    storage: S,
    state: AnimationState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: PreferenceStorage> AnimationStore<S> {
    /// Rehydrate from `storage`. Missing or unreadable entries fall back to
    /// defaults; device-driven overrides are applied on top.
    pub fn load(storage: S, device: &DeviceInfo) -> Self {
        let animations_enabled = match storage.get(STORAGE_KEY_ENABLED) {
            Some(raw) if !raw.is_empty() => raw == "true",
            _ => true,
        };
        let config = match storage.get(STORAGE_KEY_CONFIG) {
            Some(raw) => AnimationConfig::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[prefs] discarding stored config: {e}");
                AnimationConfig::default()
            }),
            None => AnimationConfig::default(),
        };
        let mut store = Self {
            storage,
            state: AnimationState {
                animations_enabled,
                is_reduced_motion: device.prefers_reduced_motion,
                performance_level: device.performance_level,
                config,
            },
            listeners: Vec::new(),
            next_id: 0,
        };
        if store.state.performance_level == PerformanceLevel::Low {
            store.state.config = store.state.config.merged(&low_performance_patch());
        }
        if store.state.is_reduced_motion {
            store.state.config = store.state.config.merged(&reduced_motion_patch());
        }
        store.persist_enabled();
        store.persist_config();
        log::debug!(
            "[prefs] loaded enabled={} reduced_motion={} performance={} complexity={}",
            store.state.animations_enabled,
            store.state.is_reduced_motion,
            store.state.performance_level.as_str(),
            store.state.config.complexity
        );
        store
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> AnimationConfig {
        self.state.config
    }

    /// Effective flag: the user toggle AND NOT reduced motion.
    pub fn animations_enabled(&self) -> bool {
        self.state.effective_enabled()
    }

    pub fn is_reduced_motion(&self) -> bool {
        self.state.is_reduced_motion
    }

    pub fn performance_level(&self) -> PerformanceLevel {
        self.state.performance_level
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn toggle_animations(&mut self) {
        let next = !self.state.animations_enabled;
        self.set_animations_enabled(next);
    }

    pub fn set_animations_enabled(&mut self, enabled: bool) {
        if self.state.animations_enabled == enabled {
            return;
        }
        self.state.animations_enabled = enabled;
        self.persist_enabled();
        self.notify(StoreEvent::EnabledChanged);
    }

    /// Shallow-merge `patch` into the config; the last update wins.
    pub fn update_config(&mut self, patch: ConfigPatch) {
        let next = self.state.config.merged(&patch);
        if next == self.state.config {
            return;
        }
        self.state.config = next;
        self.persist_config();
        self.notify(StoreEvent::ConfigChanged);
    }

    /// Back to the default config, then re-apply device overrides.
    pub fn reset_config(&mut self) {
        let mut config = AnimationConfig::default();
        if self.state.performance_level == PerformanceLevel::Low {
            config = config.merged(&low_performance_patch());
        }
        if self.state.is_reduced_motion {
            config = config.merged(&reduced_motion_patch());
        }
        self.state.config = config;
        self.persist_config();
        self.notify(StoreEvent::ConfigChanged);
    }

    /// Live update from the system reduced-motion preference.
    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.state.is_reduced_motion == reduced {
            return;
        }
        self.state.is_reduced_motion = reduced;
        self.notify(StoreEvent::ReducedMotionChanged);
        if reduced {
            self.update_config(reduced_motion_patch());
        }
    }

    /// Register `listener` for every subsequent change. Listeners run while
    /// the store is mutably borrowed, so they must not call back into it.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(StoreEvent, &AnimationState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        let state = self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(event, &state);
        }
    }

    fn persist_enabled(&mut self) {
        let raw = if self.state.animations_enabled { "true" } else { "false" };
        if let Err(e) = self.storage.set(STORAGE_KEY_ENABLED, raw) {
            log::warn!("[prefs] could not persist enabled flag: {e}");
        }
    }

    fn persist_config(&mut self) {
        let raw = self.state.config.to_json();
        if let Err(e) = self.storage.set(STORAGE_KEY_CONFIG, &raw) {
            log::warn!("[prefs] could not persist config: {e}");
        }
    }
}
