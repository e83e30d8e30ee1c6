//! PropertyHub Core Library
//!
//! Listing catalog and category filtering for the PropertyHub desktop app.
//!
//! ## Overview
//!
//! Everything here is synchronous and in-memory. A [`Catalog`] is immutable
//! configuration: the sample property records plus the fixed filter-option
//! labels, seeded from an embedded JSON document (or a user-supplied file)
//! at startup. A [`ListingState`] owns a catalog and derives the visible
//! subset from a single active filter label; re-applying the active label
//! toggles the filter off. The featured selection is computed from the full
//! catalog and never reacts to the filter.
//!
//! ## Quick Start
//!
//! ```
//! use propertyhub_core::{Catalog, ListingState};
//!
//! let catalog = Catalog::sample()?;
//! let mut listing = ListingState::new(catalog);
//!
//! listing.apply_filter("Villa");
//! for property in listing.visible() {
//!     println!("{} - {}", property.name, property.location());
//! }
//!
//! // Same label again clears the filter
//! listing.apply_filter("Villa");
//! assert_eq!(listing.shown_count(), listing.total_count());
//! # Ok::<(), propertyhub_core::CatalogError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod listing;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use listing::{ListingState, FEATURED_LIMIT, FEATURED_MIN_RATING};
pub use types::{Address, Property};
