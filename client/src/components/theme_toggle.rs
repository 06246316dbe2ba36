//! Light/dark switch button.

use leptos::prelude::*;

use crate::components::icon::IconView;
use crate::content::Icon;
use crate::state::theme_context::ThemeContext;

/// Shows a sun while dark (click for light) and a moon while light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| theme.toggle()
            title="Toggle dark mode"
            aria-label="Toggle dark mode"
        >
            {move || {
                let icon = if theme.resolved().is_dark() { Icon::Sun } else { Icon::Moon };
                view! { <IconView icon=icon size=20/> }
            }}
        </button>
    }
}
