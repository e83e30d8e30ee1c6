//! Search Input Component
//!
//! Shared by the desktop header, the mobile menu, and the hero banner.
//! The field keeps local text but runs no query; there is no search backend.

use dioxus::prelude::*;

/// Decorative search field with a magnifier icon.
///
/// # Props
///
/// * `placeholder` - placeholder text for the input
/// * `class` - optional extra class for placement-specific sizing
#[component]
pub fn SearchInput(
    placeholder: String,
    #[props(default = None)] class: Option<String>,
) -> Element {
    let mut query = use_signal(String::new);

    let wrapper_class = match class {
        Some(extra) => format!("search-input {extra}"),
        None => "search-input".to_string(),
    };

    rsx! {
        div { class: "{wrapper_class}",
            span { class: "search-icon", {search_icon()} }
            input {
                class: "search-field",
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
        }
    }
}

/// Lucide search icon
fn search_icon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}
