//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `menu`) so components depend on small
//! focused models. Both models are plain Rust and testable without a
//! reactive runtime; [`theme_context`] adapts the theme controller to Leptos.

pub mod menu;
pub mod theme;
pub mod theme_context;
