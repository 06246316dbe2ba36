//! Reactive handle on the theme controller, provided via Leptos context.
//!
//! DESIGN
//! ======
//! The controller lives in a `StoredValue`; its listener mirrors every
//! publish into two signals. Renderers read the signals, event handlers go
//! through the controller. The handle is `Copy` so closures capture it freely.

#[cfg(test)]
#[path = "theme_context_test.rs"]
mod theme_context_test;

use leptos::prelude::*;

use crate::state::theme::{ResolvedTheme, ThemeController, ThemeMode};
use crate::util::theme_host::{BrowserHost, watch_system_preference};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: RwSignal<ThemeMode>,
    resolved: RwSignal<ResolvedTheme>,
    controller: StoredValue<ThemeController<BrowserHost>>,
}

impl ThemeContext {
    /// Create the context in its deterministic first-render state.
    pub fn new() -> Self {
        let mut controller = ThemeController::deterministic(BrowserHost);
        let mode = RwSignal::new(controller.mode());
        let resolved = RwSignal::new(controller.get_mode());
        controller.subscribe(move |m, r| {
            mode.set(m);
            resolved.set(r);
        });
        Self {
            mode,
            resolved,
            controller: StoredValue::new(controller),
        }
    }

    /// Create the context and make it available to the component tree.
    pub fn provide() -> Self {
        let theme = Self::new();
        provide_context(theme);
        theme
    }

    /// Resolved rule set. Tracked.
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved.get()
    }

    /// Explicit setting. Tracked.
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.controller.update_value(|c| c.set_mode(mode));
    }

    pub fn toggle(&self) {
        self.controller.update_value(ThemeController::toggle);
    }

    /// Align with the browser and start following OS scheme changes.
    /// Later calls do nothing.
    pub fn reconcile(&self) {
        let first = self.controller.try_update_value(ThemeController::reconcile);
        if first == Some(true) {
            let controller = self.controller;
            watch_system_preference(move |dark| {
                controller.update_value(|c| c.system_changed(dark));
            });
        }
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}
