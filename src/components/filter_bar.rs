//! Category Filter Components
//!
//! [`FilterPill`] renders one label button; [`FilterBar`] maps the catalog's
//! filter options to a row of pills. Clicking the active pill again is the
//! toggle-off path, handled upstream by the listing state.

use dioxus::prelude::*;

/// One category filter button.
///
/// # Props
///
/// * `label` - the filter label this pill applies
/// * `active` - whether this label is the active filter
/// * `on_click` - called with the label when clicked
#[component]
pub fn FilterPill(label: String, active: bool, on_click: EventHandler<String>) -> Element {
    let pill_class = if active {
        "filter-pill active"
    } else {
        "filter-pill"
    };
    let click_label = label.clone();

    rsx! {
        button {
            class: "{pill_class}",
            "aria-pressed": "{active}",
            onclick: move |_| on_click.call(click_label.clone()),
            "{label}"
        }
    }
}

/// Row of filter pills, one per catalog filter option.
///
/// # Props
///
/// * `options` - the fixed filter labels, in catalog order
/// * `active` - the currently active label, if any
/// * `on_select` - called with the clicked label
#[component]
pub fn FilterBar(
    options: Vec<String>,
    active: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "filter-bar",
            for option in options {
                FilterPill {
                    key: "{option}",
                    label: option.clone(),
                    active: active.as_deref() == Some(option.as_str()),
                    on_click: move |label| on_select.call(label),
                }
            }
        }
    }
}
