//! Listing view state
//!
//! [`ListingState`] owns an injected [`Catalog`] and derives the visible
//! subset from the single active filter label. Every operation is total and
//! synchronous; an empty visible subset is a normal state, not an error.

use crate::catalog::Catalog;
use crate::types::Property;

/// Minimum rating for the featured grid.
pub const FEATURED_MIN_RATING: f32 = 4.9;

/// Maximum number of featured listings shown.
pub const FEATURED_LIMIT: usize = 6;

/// Filter state over an immutable catalog.
///
/// The visible subset is stored as indices into the catalog, so positions
/// stay stable even when listing names repeat. It is recomputed only when
/// the active filter changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    catalog: Catalog,
    active_filter: Option<String>,
    visible: Vec<usize>,
}

impl ListingState {
    /// Build listing state over `catalog` with no filter active.
    pub fn new(catalog: Catalog) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            active_filter: None,
            visible,
        }
    }

    /// The catalog this state was built over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Filter labels the UI offers, in catalog order.
    pub fn filter_options(&self) -> &[String] {
        &self.catalog.filter_options
    }

    /// Currently active filter label, if any.
    pub fn active_filter(&self) -> Option<&str> {
        self.active_filter.as_deref()
    }

    /// Apply or toggle off a category filter.
    ///
    /// Re-applying the active label clears the filter and restores the full
    /// dataset. Any other label becomes active and the visible subset is
    /// recomputed as every property with a tag containing the label as a
    /// case-insensitive substring.
    pub fn apply_filter(&mut self, label: &str) {
        if self.active_filter.as_deref() == Some(label) {
            self.clear_filter();
            return;
        }

        self.active_filter = Some(label.to_string());
        self.visible = self
            .catalog
            .properties
            .iter()
            .enumerate()
            .filter(|(_, property)| property.matches_category(label))
            .map(|(index, _)| index)
            .collect();

        tracing::debug!(
            filter = %label,
            shown = self.visible.len(),
            total = self.catalog.len(),
            "applied category filter"
        );
    }

    /// Drop the active filter and show the full dataset.
    pub fn clear_filter(&mut self) {
        self.active_filter = None;
        self.visible = (0..self.catalog.len()).collect();
        tracing::debug!("cleared category filter");
    }

    /// The visible properties, in catalog order.
    pub fn visible(&self) -> Vec<Property> {
        self.visible
            .iter()
            .map(|&index| self.catalog.properties[index].clone())
            .collect()
    }

    /// Number of visible properties.
    pub fn shown_count(&self) -> usize {
        self.visible.len()
    }

    /// Size of the full dataset; never changes after construction.
    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Top-rated listings for the featured grid.
    ///
    /// Always computed from the full catalog: rating at least
    /// [`FEATURED_MIN_RATING`], capped to [`FEATURED_LIMIT`], in original
    /// dataset order. Unaffected by the active filter.
    pub fn featured(&self) -> Vec<Property> {
        self.catalog
            .properties
            .iter()
            .filter(|property| property.rating >= FEATURED_MIN_RATING)
            .take(FEATURED_LIMIT)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Property;

    /// 10 listings, 3 of them villa-tagged in different case forms.
    fn fixture_catalog() -> Catalog {
        let seed = vec![
            Property::new("Sunrise Hideout", vec!["villa".into()], 4.95),
            Property::new("Harbor Loft", vec!["Apartment".into()], 4.4),
            Property::new("Meadow House", vec!["Countryside".into()], 4.92),
            Property::new("Grand Estate", vec!["Mansion".into()], 4.99),
            Property::new(
                "Palm Retreat",
                vec!["POOL VILLA".into(), "Beachfront".into()],
                4.7,
            ),
            Property::new("City Studio", vec!["Apartment".into()], 4.2),
            Property::new("Shepherd Cottage", vec!["Countryside".into()], 4.91),
            Property::new("Cliff Manor", vec!["Mansion".into(), "Sea View".into()], 4.97),
            Property::new("Lagoon Villa", vec!["Villa".into()], 4.93),
            Property::new("Old Town Flat", vec!["Apartment".into()], 4.96),
        ];

        Catalog {
            properties: seed,
            filter_options: vec![
                "Villa".into(),
                "Apartment".into(),
                "Countryside".into(),
                "Mansion".into(),
                "Beachfront".into(),
            ],
        }
    }

    #[test]
    fn test_new_shows_full_dataset() {
        let listing = ListingState::new(fixture_catalog());
        assert_eq!(listing.shown_count(), 10);
        assert_eq!(listing.total_count(), 10);
        assert_eq!(listing.active_filter(), None);
    }

    #[test]
    fn test_apply_filter_matches_case_variants() {
        let mut listing = ListingState::new(fixture_catalog());
        listing.apply_filter("Villa");

        assert_eq!(listing.active_filter(), Some("Villa"));
        let visible = listing.visible();
        assert_eq!(visible.len(), 3);
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Sunrise Hideout", "Palm Retreat", "Lagoon Villa"]);
    }

    #[test]
    fn test_reapply_same_filter_toggles_off() {
        let mut listing = ListingState::new(fixture_catalog());
        listing.apply_filter("Villa");
        listing.apply_filter("Villa");

        assert_eq!(listing.active_filter(), None);
        assert_eq!(listing.shown_count(), 10);
    }

    #[test]
    fn test_switching_filters_replaces_subset() {
        let mut listing = ListingState::new(fixture_catalog());
        listing.apply_filter("Villa");
        listing.apply_filter("Apartment");

        assert_eq!(listing.active_filter(), Some("Apartment"));
        assert_eq!(listing.shown_count(), 3);
        assert!(listing.visible().iter().all(|p| p.matches_category("Apartment")));
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let mut listing = ListingState::new(fixture_catalog());
        listing.apply_filter("Castle");

        assert_eq!(listing.active_filter(), Some("Castle"));
        assert_eq!(listing.shown_count(), 0);
        assert!(listing.visible().is_empty());
    }

    #[test]
    fn test_clear_filter_restores_full_dataset() {
        let mut listing = ListingState::new(fixture_catalog());
        listing.apply_filter("Castle");
        listing.clear_filter();

        assert_eq!(listing.active_filter(), None);
        assert_eq!(listing.shown_count(), 10);
    }

    #[test]
    fn test_visible_preserves_catalog_order() {
        let mut listing = ListingState::new(fixture_catalog());
        listing.apply_filter("Countryside");

        let names: Vec<String> = listing.visible().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, ["Meadow House", "Shepherd Cottage"]);
    }

    #[test]
    fn test_total_count_unchanged_by_filtering() {
        let mut listing = ListingState::new(fixture_catalog());
        listing.apply_filter("Villa");
        assert_eq!(listing.total_count(), 10);
        listing.apply_filter("Castle");
        assert_eq!(listing.total_count(), 10);
    }

    #[test]
    fn test_featured_threshold_and_cap() {
        let listing = ListingState::new(fixture_catalog());
        let featured = listing.featured();

        // 7 fixture listings rate >= 4.9; the grid caps at 6
        assert_eq!(featured.len(), FEATURED_LIMIT);
        assert!(featured.iter().all(|p| p.rating >= FEATURED_MIN_RATING));
    }

    #[test]
    fn test_featured_keeps_dataset_order() {
        let listing = ListingState::new(fixture_catalog());
        let names: Vec<String> = listing.featured().iter().map(|p| p.name.clone()).collect();
        assert_eq!(
            names,
            [
                "Sunrise Hideout",
                "Meadow House",
                "Grand Estate",
                "Shepherd Cottage",
                "Cliff Manor",
                "Lagoon Villa"
            ]
        );
    }

    #[test]
    fn test_featured_unaffected_by_active_filter() {
        let mut listing = ListingState::new(fixture_catalog());
        let before = listing.featured();

        listing.apply_filter("Apartment");
        assert_eq!(listing.featured(), before);

        listing.apply_filter("Castle");
        assert_eq!(listing.featured(), before);

        listing.clear_filter();
        assert_eq!(listing.featured(), before);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog {
            properties: vec![],
            filter_options: vec!["Villa".into()],
        };
        let mut listing = ListingState::new(catalog);

        assert_eq!(listing.shown_count(), 0);
        listing.apply_filter("Villa");
        assert_eq!(listing.shown_count(), 0);
        assert!(listing.featured().is_empty());
    }
}
