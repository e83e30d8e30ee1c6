//! Property Card Component
//!
//! Display card for a single listing: image with an optional discount
//! badge, then name, location, rating, category chips, and nightly price.

use dioxus::prelude::*;
use propertyhub_core::Property;

/// Listing card.
///
/// Pure display of a [`Property`]; the card itself has no handlers.
#[component]
pub fn PropertyCard(property: Property) -> Element {
    let rating = format!("{:.2}", property.rating);

    rsx! {
        article { class: "property-card",
            // Top: image with badge overlay
            div { class: "card-image-area",
                img {
                    class: "card-image",
                    src: "{property.image}",
                    alt: "{property.name}",
                }
                if let Some(discount) = property.discount {
                    span { class: "card-badge card-badge--discount", "-{discount}%" }
                }
            }

            // Bottom: listing details
            div { class: "card-body",
                div { class: "card-title-row",
                    h3 { class: "card-name", "{property.name}" }
                    span { class: "card-rating",
                        span { class: "rating-star", "\u{2605}" }
                        "{rating}"
                    }
                }

                p { class: "card-location", "{property.location()}" }

                div { class: "card-tags",
                    for tag in &property.category {
                        span { class: "card-tag", "{tag}" }
                    }
                }

                div { class: "card-footer",
                    span { class: "card-price", "{property.price_label()}" }
                }
            }
        }
    }
}
