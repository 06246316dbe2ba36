//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and content cards, reading the theme from
//! Leptos context and the menu state from props handed down by the page.

pub mod book_now;
pub mod cards;
pub mod hero;
pub mod icon;
pub mod mobile_menu;
pub mod nav_bar;
pub mod theme_toggle;
