//! Drop-down navigation drawer for narrow screens.

use leptos::prelude::*;

use crate::components::book_now::BookNow;
use crate::content::NAV_SECTIONS;
use crate::state::menu::MenuState;

/// Rendered only while `menu` is open. Any link closes it.
#[component]
pub fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    view! {
        <Show when=move || menu.get().is_open()>
            <div class="mobile-menu">
                {NAV_SECTIONS
                    .iter()
                    .map(|section| {
                        view! {
                            <a
                                class="mobile-menu__link"
                                href=section.anchor()
                                on:click=move |_| menu.update(|m| *m = m.on_nav_link())
                            >
                                {section.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <BookNow class="btn btn--primary mobile-menu__book"/>
            </div>
        </Show>
    }
}
