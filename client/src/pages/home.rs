//! The single landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes the nav bar, mobile drawer, hero, and the three content
//! sections. Owns the drawer state; the theme comes from context.

use leptos::prelude::*;

use crate::components::cards::{ContactCard, PriceCard, ServiceCard};
use crate::components::hero::Hero;
use crate::components::mobile_menu::MobileMenu;
use crate::components::nav_bar::NavBar;
use crate::content::{CONTACTS, PRICE_TIERS, SERVICES, Section};
use crate::state::menu::MenuState;
use crate::util::lifecycle::after_first_render;

#[component]
pub fn HomePage() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    after_first_render(move || menu.update(|m| *m = m.on_mounted()));

    view! {
        <div class="page">
            <NavBar menu=menu/>
            <MobileMenu menu=menu/>
            <Hero/>

            <section id=Section::Services.id() class="section section--raised">
                <h2 class="section__heading">{Section::Services.heading()}</h2>
                <div class="section__grid">
                    {SERVICES
                        .iter()
                        .map(|service| view! { <ServiceCard service=*service/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id=Section::Pricing.id() class="section">
                <h2 class="section__heading">{Section::Pricing.heading()}</h2>
                <div class="section__grid">
                    {PRICE_TIERS
                        .iter()
                        .map(|tier| view! { <PriceCard tier=*tier/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id=Section::Contact.id() class="section section--raised">
                <h2 class="section__heading">{Section::Contact.heading()}</h2>
                <div class="section__grid">
                    {CONTACTS
                        .iter()
                        .map(|item| view! { <ContactCard item=*item/> })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
