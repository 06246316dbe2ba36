//! Appearance mode resolution, persistence, and change broadcast.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page renders in either a light or a dark rule set. The user picks
//! `light`, `dark`, or `system`; `system` follows the browser's
//! `prefers-color-scheme`. Environment access goes through [`ThemeHost`] so
//! the controller runs unchanged under SSR, in the browser, and in tests.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is fire-and-forget. A failed write is logged and the
//! in-memory mode stays authoritative for the rest of the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Errors raised by theme hosts and mode parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("failed to write theme preference: {0}")]
    StorageWrite(String),
    #[error("unknown theme mode `{0}`")]
    UnknownMode(String),
}

/// The user-facing appearance setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Storage representation of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Resolve against the host preference. An unknown host preference
    /// resolves `system` to light.
    pub fn resolve(self, system_prefers_dark: Option<bool>) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => {
                if system_prefers_dark.unwrap_or(false) {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ThemeError::UnknownMode(other.to_owned())),
        }
    }
}

/// The concrete rule set applied to the document. Never `system`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<ResolvedTheme> for ThemeMode {
    fn from(value: ResolvedTheme) -> Self {
        match value {
            ResolvedTheme::Light => Self::Light,
            ResolvedTheme::Dark => Self::Dark,
        }
    }
}

/// Environment the controller reads from and writes to.
pub trait ThemeHost {
    /// Raw persisted preference, if any.
    fn stored_preference(&self) -> Option<String>;

    /// Persist an explicit choice for future loads.
    ///
    /// # Errors
    ///
    /// Returns an error when storage is missing or rejects the write.
    fn persist_preference(&self, mode: ThemeMode) -> Result<(), ThemeError>;

    /// Whether the host reports a dark color-scheme preference. `None` when
    /// the host cannot tell.
    fn system_prefers_dark(&self) -> Option<bool>;

    /// Select the light or dark rule set on the document root.
    fn apply(&self, resolved: ResolvedTheme);
}

type Listener = Box<dyn Fn(ThemeMode, ResolvedTheme) + Send + Sync>;

/// Owns the explicit mode and publishes every change to the host and to
/// subscribed renderers.
pub struct ThemeController<H> {
    host: H,
    mode: ThemeMode,
    system_prefers_dark: Option<bool>,
    reconciled: bool,
    listeners: Vec<Listener>,
}

impl<H: ThemeHost> ThemeController<H> {
    /// Controller for the first render: `system` mode with an unknown host
    /// preference, so it resolves to light without touching the host.
    pub fn deterministic(host: H) -> Self {
        Self {
            host,
            mode: ThemeMode::System,
            system_prefers_dark: None,
            reconciled: false,
            listeners: Vec::new(),
        }
    }

    /// Controller initialized straight from the host.
    pub fn load(host: H) -> Self {
        let mut controller = Self::deterministic(host);
        controller.reconcile();
        controller
    }

    /// Explicit setting chosen by the user (or `system`).
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Currently resolved rule set.
    pub fn get_mode(&self) -> ResolvedTheme {
        self.mode.resolve(self.system_prefers_dark)
    }

    #[cfg(test)]
    pub fn is_reconciled(&self) -> bool {
        self.reconciled
    }

    /// Register a renderer. Listeners run synchronously on every publish.
    pub fn subscribe(
        &mut self,
        listener: impl Fn(ThemeMode, ResolvedTheme) + Send + Sync + 'static,
    ) {
        self.listeners.push(Box::new(listener));
    }

    /// Set and persist an explicit mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(e) = self.host.persist_preference(mode) {
            log::warn!("theme preference not persisted: {e}");
        }
        self.publish();
    }

    /// Flip the resolved rule set and store it as an explicit choice.
    pub fn toggle(&mut self) {
        self.set_mode(self.get_mode().opposite().into());
    }

    /// Align with the host environment once it is available.
    ///
    /// Returns `false` if reconciliation already happened.
    pub fn reconcile(&mut self) -> bool {
        if self.reconciled {
            return false;
        }
        self.reconciled = true;
        self.system_prefers_dark = self.host.system_prefers_dark();
        if let Some(raw) = self.host.stored_preference() {
            match raw.parse::<ThemeMode>() {
                Ok(mode) => self.mode = mode,
                Err(e) => log::debug!("ignoring stored theme preference: {e}"),
            }
        }
        self.publish();
        true
    }

    /// The host color-scheme preference changed at runtime.
    pub fn system_changed(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = Some(prefers_dark);
        if self.mode == ThemeMode::System {
            self.publish();
        }
    }

    fn publish(&self) {
        let resolved = self.get_mode();
        self.host.apply(resolved);
        for listener in &self.listeners {
            listener(self.mode, resolved);
        }
    }
}
