//! Root application component and the SSR HTML shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::{SITE_DESCRIPTION, SITE_TITLE};
use crate::pages::home::HomePage;
use crate::site::{BASE_PATH, BASE_SEGMENT, stylesheet_url};
use crate::state::theme_context::ThemeContext;
use crate::util::lifecycle::after_first_render;
use crate::util::theme_host::bootstrap_script;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The inline head script picks the rule set before first paint; the
/// hydrated app reconciles its own state right after.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=bootstrap_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options root=BASE_PATH.to_owned()/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context and mounts the page under the site's subpath.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeContext::provide();
    after_first_render(move || theme.reconcile());

    view! {
        <Stylesheet id="leptos" href=stylesheet_url()/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| view! { <HomePage/> }>
                <Route path=StaticSegment(BASE_SEGMENT) view=HomePage/>
            </Routes>
        </Router>
    }
}
