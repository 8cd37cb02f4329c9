use crate::parser::Listing;
use std::collections::HashMap;

/// The complete, ordered collection of listings for one render run.
///
/// Built once from validated listings and read-only afterwards. The
/// ordering invariant (ids strictly increasing) holds because the
/// validator rejects duplicate ids before a catalog is ever built.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Builds a catalog from validated listings, sorted by id ascending.
    pub fn from_validated(mut listings: Vec<Listing>) -> Self {
        listings.sort_by_key(|listing| listing.id);
        log::debug!("built catalog with {} listing(s)", listings.len());
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    /// Returns listing counts per language tag, for the run statistics.
    pub fn language_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for listing in &self.listings {
            *counts.entry(listing.language.clone()).or_insert(0) += 1;
        }
        counts
    }
}
