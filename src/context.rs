//! Catalog context for PropertyHub.
//!
//! The listing catalog is provided once by [`App`](crate::app::App) and read
//! through context, so no component depends on hidden module-level state.

use dioxus::prelude::*;
use propertyhub_core::Catalog;

/// Hook to access the immutable listing catalog.
///
/// # Example
///
/// ```ignore
/// let catalog = use_catalog();
/// let listing = use_signal(|| ListingState::new(catalog()));
/// ```
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}
