//! Content cards for the services, pricing, and contact sections.
//!
//! DESIGN
//! ======
//! Each card takes one `content` record by value. Records are `Copy` and
//! `'static`, so cards hold no state and render identically in every theme.

use leptos::prelude::*;

use crate::components::book_now::BookNow;
use crate::components::icon::IconView;
use crate::content::{ContactItem, PriceTier, Service};

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <article class="card service-card">
            <div class="card__header">
                <IconView icon=service.icon class="icon card__icon"/>
                <h3 class="card__title">{service.title}</h3>
            </div>
            <p class="card__text">{service.description}</p>
        </article>
    }
}

#[component]
pub fn PriceCard(tier: PriceTier) -> impl IntoView {
    view! {
        <article class="card price-card">
            <h3 class="price-card__service">{tier.service}</h3>
            <div class="price-card__price">
                <span class="price-card__amount">{tier.price}</span>
                <span class="price-card__unit">{tier.unit}</span>
            </div>
            <ul class="price-card__features">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="price-card__feature">
                                <span class="price-card__bullet" aria-hidden="true"></span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <BookNow class="btn btn--primary btn--block"/>
        </article>
    }
}

#[component]
pub fn ContactCard(item: ContactItem) -> impl IntoView {
    view! {
        <article class="card contact-card">
            <div class="card__header">
                <IconView icon=item.icon class="icon card__icon"/>
                <h3 class="card__title">{item.title}</h3>
            </div>
            <p class="card__text">{item.content}</p>
        </article>
    }
}
