//! Mobile navigation drawer state.
//!
//! DESIGN
//! ======
//! Two states and three events. The page owns a `RwSignal<MenuState>` and
//! feeds it events; the drawer renders only while [`MenuState::Open`].

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Whether the mobile drawer is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Menu button activated.
    pub fn on_menu_button(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// A navigation link inside the drawer was activated.
    pub fn on_nav_link(self) -> Self {
        Self::Closed
    }

    /// First client-side paint finished.
    pub fn on_mounted(self) -> Self {
        Self::Closed
    }
}
