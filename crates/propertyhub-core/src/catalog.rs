//! Immutable listing catalog
//!
//! The catalog bundles the sample property records with the fixed set of
//! filter-option labels. It is configuration, not state: built once at
//! startup (from the embedded seed or a user-supplied JSON file) and passed
//! into [`ListingState`](crate::listing::ListingState) by value, never
//! written back.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::types::Property;

/// Embedded sample dataset, same JSON shape `load` accepts.
const SAMPLE_LISTINGS: &str = include_str!("../data/sample_listings.json");

/// The full set of listings plus the filter labels the UI offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Canonical dataset, in display order
    pub properties: Vec<Property>,
    /// Fixed enumerated filter labels
    pub filter_options: Vec<String>,
}

impl Catalog {
    /// Parse the embedded sample dataset.
    pub fn sample() -> CatalogResult<Self> {
        Self::from_json(SAMPLE_LISTINGS)
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a listings file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            properties = catalog.len(),
            "loaded listings catalog"
        );
        Ok(catalog)
    }

    /// Number of properties in the catalog.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the catalog holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
