//! Navigation Header Component
//!
//! Desktop: brand, search field, accommodation shortcuts, auth buttons.
//! Mobile: brand plus a menu toggle revealing the collapsible panel.

use dioxus::prelude::*;

use crate::components::{MobileMenu, SearchInput};

/// Accommodation-type shortcuts shown in the header.
///
/// The desktop row shows the first [`INLINE_TYPE_COUNT`]; the mobile menu
/// lists all of them.
pub const ACCOMMODATION_TYPES: [&str; 6] = [
    "Rooms",
    "Mansion",
    "Countryside",
    "Villa",
    "Apartment",
    "Chalet",
];

/// How many shortcuts fit inline in the desktop header.
pub const INLINE_TYPE_COUNT: usize = 4;

/// Site header.
///
/// The only state is the mobile-menu visibility flag; the search field and
/// every button here are presentation-only.
#[component]
pub fn NavHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                // Brand
                div { class: "brand",
                    h1 { class: "brand-title", "PropertyHub" }
                }

                // Search (desktop)
                div { class: "header-search",
                    SearchInput { placeholder: "Search properties..." }
                }

                // Navigation (desktop)
                nav { class: "header-nav",
                    div { class: "type-shortcuts",
                        for type_label in ACCOMMODATION_TYPES.iter().take(INLINE_TYPE_COUNT) {
                            button { class: "type-btn", "{type_label}" }
                        }
                    }
                    div { class: "auth-actions",
                        button { class: "auth-btn", "Sign In" }
                        button { class: "auth-btn primary", "Sign Up" }
                    }
                }

                // Menu toggle (mobile)
                button {
                    class: "menu-toggle",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                    "aria-expanded": "{menu_open()}",
                    if menu_open() {
                        {close_icon()}
                    } else {
                        {menu_icon()}
                    }
                }
            }

            // Collapsible panel (mobile)
            if menu_open() {
                MobileMenu {}
            }
        }
    }
}

/// Lucide menu icon
fn menu_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        }
    }
}

/// Lucide x icon
fn close_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_shortcut_split() {
        let inline: Vec<&str> = ACCOMMODATION_TYPES
            .iter()
            .take(INLINE_TYPE_COUNT)
            .copied()
            .collect();
        assert_eq!(inline, ["Rooms", "Mansion", "Countryside", "Villa"]);
        assert_eq!(ACCOMMODATION_TYPES.len() - INLINE_TYPE_COUNT, 2);
    }

    #[test]
    fn test_menu_toggle_round_trip() {
        let mut menu_open = false;
        menu_open = !menu_open;
        assert!(menu_open);
        menu_open = !menu_open;
        assert!(!menu_open);
    }

    #[test]
    fn test_toggle_aria_label() {
        let label = |open: bool| if open { "Close menu" } else { "Open menu" };
        assert_eq!(label(false), "Open menu");
        assert_eq!(label(true), "Close menu");
    }
}
