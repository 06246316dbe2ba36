#![cfg(not(feature = "hydrate"))]

use leptos::prelude::Owner;

use super::*;

#[test]
fn starts_in_deterministic_light() {
    Owner::new().with(|| {
        let theme = ThemeContext::new();
        assert_eq!(theme.mode(), ThemeMode::System);
        assert_eq!(theme.resolved(), ResolvedTheme::Light);
    });
}

#[test]
fn toggle_mirrors_into_signals() {
    Owner::new().with(|| {
        let theme = ThemeContext::new();
        theme.reconcile();

        theme.toggle();
        assert_eq!(theme.resolved(), ResolvedTheme::Dark);
        assert_eq!(theme.mode(), ThemeMode::Dark);

        theme.toggle();
        assert_eq!(theme.resolved(), ResolvedTheme::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
    });
}

#[test]
fn set_mode_mirrors_into_signals() {
    Owner::new().with(|| {
        let theme = ThemeContext::new();
        theme.set_mode(ThemeMode::Dark);
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.resolved(), ResolvedTheme::Dark);

        // No host preference outside the browser, so system resolves light.
        theme.set_mode(ThemeMode::System);
        assert_eq!(theme.mode(), ThemeMode::System);
        assert_eq!(theme.resolved(), ResolvedTheme::Light);
    });
}

#[test]
fn second_reconcile_keeps_user_choice() {
    Owner::new().with(|| {
        let theme = ThemeContext::new();
        theme.reconcile();
        theme.set_mode(ThemeMode::Dark);

        // A repeated reconcile would otherwise re-read the (empty) host and
        // fall back to system.
        theme.reconcile();
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.resolved(), ResolvedTheme::Dark);
    });
}

#[test]
fn copies_share_one_controller() {
    Owner::new().with(|| {
        let theme = ThemeContext::new();
        let handle = theme;
        handle.toggle();
        assert_eq!(theme.resolved(), ResolvedTheme::Dark);
    });
}
