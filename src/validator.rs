use crate::config::LanguageSet;
use crate::error::CatalogError;
use crate::parser::Listing;
use std::collections::HashMap;

/// Validates the full sequence of parsed listings.
///
/// Validation is total: every listing is checked and every violation is
/// collected, so callers see all problems at once instead of fixing them
/// one run at a time. An empty return means the sequence is valid and may
/// be handed to the catalog builder unchanged.
///
/// Checks:
/// - no two listings share an id (each duplicate names both locations)
/// - every language tag resolves in the recognized set
pub fn validate_listings(listings: &[Listing], languages: &LanguageSet) -> Vec<CatalogError> {
    let mut errors = Vec::new();
    let mut first_seen: HashMap<u32, usize> = HashMap::new();

    for listing in listings {
        match first_seen.get(&listing.id) {
            Some(&first_line) => {
                errors.push(CatalogError::DuplicateId {
                    id: listing.id,
                    first_line,
                    second_line: listing.line,
                });
            }
            None => {
                first_seen.insert(listing.id, listing.line);
            }
        }

        if languages.resolve(&listing.language).is_none() {
            errors.push(CatalogError::UnknownLanguage {
                id: listing.id,
                line: listing.line,
                tag: listing.language.clone(),
            });
        }
    }

    if errors.is_empty() {
        log::debug!("validated {} listing(s)", listings.len());
    } else {
        log::debug!(
            "validation found {} problem(s) in {} listing(s)",
            errors.len(),
            listings.len()
        );
    }

    errors
}
