//! Call-to-action link to the external scheduling page.

use leptos::prelude::*;

use crate::content::BOOKING_URL;

/// Opens the booking page in a new browsing context.
#[component]
pub fn BookNow(
    #[prop(default = "Book Now")] label: &'static str,
    #[prop(default = "btn btn--primary")] class: &'static str,
) -> impl IntoView {
    view! {
        <a class=class href=BOOKING_URL target="_blank" rel="noopener noreferrer">
            {label}
        </a>
    }
}
