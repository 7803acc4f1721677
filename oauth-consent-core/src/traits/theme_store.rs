//! Theme preference storage port
//!
//! The only state surviving a component lifetime is the theme preference.
//! Platform wrappers implement this against whatever storage they have
//! (browser local storage, a settings file); the in-memory impl serves
//! demos and tests.

use std::sync::Mutex;

use crate::types::ThemeMode;

/// Persisted theme preference port
pub trait ThemeStore: Send + Sync {
    /// Saved preference, if any
    fn load_preference(&self) -> Option<ThemeMode>;

    /// Persist the preference (written on every toggle)
    fn save_preference(&self, mode: ThemeMode);
}

/// In-memory theme store
#[derive(Debug, Default)]
pub struct InMemoryThemeStore {
    saved: Mutex<Option<ThemeMode>>,
}

impl InMemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for InMemoryThemeStore {
    fn load_preference(&self) -> Option<ThemeMode> {
        self.saved.lock().map(|guard| *guard).unwrap_or(None)
    }

    fn save_preference(&self, mode: ThemeMode) {
        if let Ok(mut guard) = self.saved.lock() {
            *guard = Some(mode);
        }
    }
}
