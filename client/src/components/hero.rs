//! Hero banner at the top of the page.

use leptos::prelude::*;

use crate::components::book_now::BookNow;
use crate::content::{HERO_HEADING, HERO_TAGLINE, Section};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1 class="hero__heading">{HERO_HEADING}</h1>
            <p class="hero__tagline">{HERO_TAGLINE}</p>
            <div class="hero__actions">
                <BookNow label="Get Started" class="btn btn--primary btn--large"/>
                <a class="btn btn--outline btn--large" href=Section::Services.anchor()>
                    "View Services"
                </a>
            </div>
        </header>
    }
}
