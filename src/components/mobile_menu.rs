//! Mobile Menu Component
//!
//! Collapsible panel under the header on narrow viewports (< 768px),
//! holding the search field, the full accommodation list, and the auth
//! buttons the desktop row shows inline.

use dioxus::prelude::*;

use crate::components::nav_header::ACCOMMODATION_TYPES;
use crate::components::SearchInput;

/// Collapsible mobile panel.
///
/// Rendered only while the header's menu flag is open; everything inside is
/// presentation-only.
#[component]
pub fn MobileMenu() -> Element {
    rsx! {
        div { class: "mobile-menu",
            // Search (mobile)
            SearchInput {
                placeholder: "Search properties...",
                class: Some("mobile-menu-search".to_string()),
            }

            // All accommodation types
            div { class: "mobile-menu-types",
                for type_label in ACCOMMODATION_TYPES.iter() {
                    button { class: "mobile-menu-btn", "{type_label}" }
                }
            }

            // Auth buttons
            div { class: "mobile-menu-auth",
                button { class: "mobile-menu-btn", "Sign In" }
                button { class: "mobile-menu-btn primary", "Sign Up" }
            }
        }
    }
}
