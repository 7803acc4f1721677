//! Theme resolution and persistence
//!
//! A configured [`Theme`] plus the stored preference and the platform
//! color-scheme preference resolve to the applied [`ThemeMode`]. The
//! stored preference is consulted only when the configured default is
//! `System`; an explicit `Light`/`Dark` default always wins on mount.
//! The form core does not depend on this module.

use std::sync::Arc;

use crate::traits::ThemeStore;
use crate::types::{Theme, ThemeMode};

/// Resolve the initial appearance for a mount
#[must_use]
pub fn resolve_initial(
    default_theme: Theme,
    saved: Option<ThemeMode>,
    system_prefers_dark: bool,
) -> ThemeMode {
    match default_theme {
        Theme::Light => ThemeMode::Light,
        Theme::Dark => ThemeMode::Dark,
        Theme::System => saved.unwrap_or(if system_prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }),
    }
}

/// Owns the applied theme and persists every toggle
pub struct ThemeController {
    store: Arc<dyn ThemeStore>,
    current: ThemeMode,
}

impl ThemeController {
    /// Mount: resolve the initial appearance from the store and the
    /// platform preference
    #[must_use]
    pub fn new(
        default_theme: Theme,
        store: Arc<dyn ThemeStore>,
        system_prefers_dark: bool,
    ) -> Self {
        let current = resolve_initial(default_theme, store.load_preference(), system_prefers_dark);
        Self { store, current }
    }

    /// The applied appearance
    #[must_use]
    pub fn current(&self) -> ThemeMode {
        self.current
    }

    /// Presentational class for the applied appearance
    #[must_use]
    pub fn class(&self) -> &'static str {
        self.current.class()
    }

    /// Flip light/dark and persist the new preference
    pub fn toggle(&mut self) -> ThemeMode {
        self.current = self.current.toggled();
        self.store.save_preference(self.current);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::InMemoryThemeStore;

    #[test]
    fn system_default_uses_saved_preference_first() {
        assert_eq!(
            resolve_initial(Theme::System, Some(ThemeMode::Dark), false),
            ThemeMode::Dark
        );
        assert_eq!(
            resolve_initial(Theme::System, Some(ThemeMode::Light), true),
            ThemeMode::Light
        );
    }

    #[test]
    fn system_default_falls_back_to_platform_preference() {
        assert_eq!(
            resolve_initial(Theme::System, None, true),
            ThemeMode::Dark
        );
        assert_eq!(
            resolve_initial(Theme::System, None, false),
            ThemeMode::Light
        );
    }

    #[test]
    fn explicit_default_ignores_saved_preference() {
        assert_eq!(
            resolve_initial(Theme::Dark, Some(ThemeMode::Light), false),
            ThemeMode::Dark
        );
        assert_eq!(
            resolve_initial(Theme::Light, Some(ThemeMode::Dark), true),
            ThemeMode::Light
        );
    }

    #[test]
    fn toggle_persists_every_flip() {
        let store = Arc::new(InMemoryThemeStore::new());
        let mut controller = ThemeController::new(Theme::Light, store.clone(), false);
        assert_eq!(controller.current(), ThemeMode::Light);
        assert_eq!(controller.class(), "");

        assert_eq!(controller.toggle(), ThemeMode::Dark);
        assert_eq!(store.load_preference(), Some(ThemeMode::Dark));
        assert_eq!(controller.class(), "dark");

        assert_eq!(controller.toggle(), ThemeMode::Light);
        assert_eq!(store.load_preference(), Some(ThemeMode::Light));
    }
}
