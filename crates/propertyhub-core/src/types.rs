//! Core types for PropertyHub

use serde::{Deserialize, Serialize};

/// Location of a listing.
///
/// Display-only metadata; no field participates in filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// City or town
    pub city: String,
    /// State, province or region (absent for some countries)
    pub state: Option<String>,
    /// Country name
    pub country: String,
}

/// A rentable listing in the catalog.
///
/// Records are read-only sample data seeded at startup; nothing in the
/// application mutates a `Property` after the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Listing name (duplicates are allowed across the catalog)
    pub name: String,
    /// Short marketing blurb
    #[serde(default)]
    pub description: String,
    /// Category tags, e.g. "Villa", "Countryside"
    pub category: Vec<String>,
    /// Guest rating, 0.0 to 5.0
    pub rating: f32,
    /// Nightly price in whole dollars
    pub price: u32,
    /// Discount percentage badge, when the listing has one
    pub discount: Option<u8>,
    /// Where the listing is
    pub address: Address,
    /// Image URL for the card
    pub image: String,
}

impl Property {
    /// Create a property with the fields the filter logic cares about.
    ///
    /// Display metadata gets neutral defaults; catalog seeds normally come
    /// from JSON instead.
    pub fn new(name: impl Into<String>, category: Vec<String>, rating: f32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            rating,
            price: 0,
            discount: None,
            address: Address {
                city: String::new(),
                state: None,
                country: String::new(),
            },
            image: String::new(),
        }
    }

    /// Whether any category tag contains `label` as a case-insensitive
    /// substring.
    ///
    /// Partial match, not exact-set membership: "Villa" matches a property
    /// tagged "Pool Villa" or "POOL VILLA".
    pub fn matches_category(&self, label: &str) -> bool {
        let needle = label.to_lowercase();
        self.category
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
    }

    /// "City, Country" display line.
    pub fn location(&self) -> String {
        format!("{}, {}", self.address.city, self.address.country)
    }

    /// Formatted nightly price.
    pub fn price_label(&self) -> String {
        format!("${}/night", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_category_exact_tag() {
        let property = Property::new("Test", vec!["Villa".to_string()], 4.5);
        assert!(property.matches_category("Villa"));
    }

    #[test]
    fn test_matches_category_case_insensitive() {
        let property = Property::new("Test", vec!["villa".to_string()], 4.5);
        assert!(property.matches_category("Villa"));
        assert!(property.matches_category("VILLA"));
    }

    #[test]
    fn test_matches_category_substring() {
        let property = Property::new("Test", vec!["POOL VILLA".to_string()], 4.5);
        assert!(property.matches_category("Villa"));
    }

    #[test]
    fn test_matches_category_no_match() {
        let property = Property::new("Test", vec!["Apartment".to_string()], 4.5);
        assert!(!property.matches_category("Villa"));
    }

    #[test]
    fn test_matches_category_any_tag() {
        let property = Property::new(
            "Test",
            vec!["Apartment".to_string(), "Countryside".to_string()],
            4.5,
        );
        assert!(property.matches_category("Countryside"));
    }

    #[test]
    fn test_location_line() {
        let mut property = Property::new("Test", vec![], 4.0);
        property.address = Address {
            city: "Seminyak".to_string(),
            state: Some("Bali".to_string()),
            country: "Indonesia".to_string(),
        };
        assert_eq!(property.location(), "Seminyak, Indonesia");
    }

    #[test]
    fn test_price_label() {
        let mut property = Property::new("Test", vec![], 4.0);
        property.price = 3200;
        assert_eq!(property.price_label(), "$3200/night");
    }
}
