//! Home page - hero, category filter, listings grid, featured section.

use dioxus::prelude::*;
use propertyhub_core::{ListingState, Property};

use crate::components::{FilterBar, NavHeader, PropertyCard, SearchInput};
use crate::context::use_catalog;
use crate::theme::colors;

/// Property listing home page.
///
/// Owns the listing state built over the injected catalog; the filter pills
/// and the empty-state button are the only controls that mutate it.
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let mut listing = use_signal(|| ListingState::new(catalog()));

    // Snapshot for this render
    let state = listing.read();
    let visible: Vec<Property> = state.visible();
    let featured: Vec<Property> = state.featured();
    let options = state.filter_options().to_vec();
    let active = state.active_filter().map(str::to_string);
    let shown = state.shown_count();
    let total = state.total_count();
    drop(state);

    let hero_style = format!(
        "background-image: linear-gradient(135deg, {}, {});",
        colors::HERO_GRADIENT_FROM,
        colors::HERO_GRADIENT_TO
    );

    rsx! {
        div { class: "page",
            NavHeader {}

            // Hero
            section { class: "hero", style: "{hero_style}",
                div { class: "hero-content",
                    h1 { class: "hero-title", "Find your favorite place here!" }
                    p { class: "hero-subtitle",
                        "The best prices for over 2 million properties worldwide."
                    }
                    SearchInput {
                        placeholder: "Where do you want to go?",
                        class: Some("hero-search".to_string()),
                    }
                }
            }

            // Filter section
            section { class: "filter-section",
                div { class: "section-inner",
                    h2 { class: "section-title", "Filter by Category" }
                    FilterBar {
                        options: options,
                        active: active.clone(),
                        on_select: move |label: String| listing.write().apply_filter(&label),
                    }
                    p { class: "results-counter",
                        "Showing {shown} of {total} properties"
                        if let Some(label) = active {
                            span { class: "results-filter-label", " filtered by \"{label}\"" }
                        }
                    }
                }
            }

            // Listings
            section { class: "listings-section",
                div { class: "section-inner",
                    if visible.is_empty() {
                        div { class: "empty-state",
                            h3 { class: "empty-title", "No properties found" }
                            p { class: "empty-hint",
                                "Try adjusting your filters or search criteria to find more properties."
                            }
                            button {
                                class: "btn-primary",
                                onclick: move |_| listing.write().clear_filter(),
                                "Clear Filters"
                            }
                        }
                    } else {
                        div { class: "listing-grid",
                            for (index, property) in visible.iter().enumerate() {
                                PropertyCard {
                                    key: "{property.name}-{index}",
                                    property: property.clone(),
                                }
                            }
                        }
                    }
                }
            }

            // Featured (always the full catalog's top-rated subset)
            section { class: "featured-section",
                div { class: "section-inner",
                    div { class: "featured-header",
                        h2 { class: "section-title", "Featured Properties" }
                        p { class: "featured-subtitle",
                            "Discover our handpicked selection of premium properties with exceptional ratings and unique features."
                        }
                    }
                    div { class: "featured-grid",
                        for (index, property) in featured.iter().enumerate() {
                            PropertyCard {
                                key: "featured-{property.name}-{index}",
                                property: property.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
