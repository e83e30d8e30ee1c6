use dioxus::prelude::*;
use propertyhub_core::Catalog;

use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Property listing home page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles and the catalog context.
#[component]
pub fn App() -> Element {
    // The catalog is immutable configuration resolved in main; every page
    // reads it through context instead of a module-level constant.
    let catalog: Signal<Catalog> = use_signal(crate::get_catalog);
    use_context_provider(|| catalog);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
