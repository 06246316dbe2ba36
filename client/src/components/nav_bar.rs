//! Fixed top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wide screens get inline section links, the theme toggle, and a booking
//! button. Narrow screens get the theme toggle and a menu button that
//! drives the page's [`MenuState`].

use leptos::prelude::*;

use crate::components::book_now::BookNow;
use crate::components::icon::IconView;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{BRAND, Icon, NAV_SECTIONS};
use crate::state::menu::MenuState;

/// Top bar. `menu` is owned by the page.
#[component]
pub fn NavBar(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <div class="nav-bar__brand">{BRAND}</div>

            <div class="nav-bar__links">
                {NAV_SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <a class="nav-bar__link" href=section.anchor()>
                                {section.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <ThemeToggle/>
                <BookNow/>
            </div>

            <div class="nav-bar__compact">
                <ThemeToggle/>
                <button
                    class="nav-bar__menu-button"
                    on:click=move |_| menu.update(|m| *m = m.on_menu_button())
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                >
                    {move || {
                        let icon = if menu.get().is_open() { Icon::Close } else { Icon::Menu };
                        view! { <IconView icon=icon/> }
                    }}
                </button>
            </div>
        </nav>
    }
}
