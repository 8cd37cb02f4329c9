//! Common test utilities for integration tests
//!
//! This module contains shared fixtures and helpers used across
//! integration tests. These utilities are not compiled into the library.

use listing_catalog::catalog::Catalog;
use listing_catalog::config::{CatalogConfig, LanguageSet, OutputFormat, RenderConfig};
use listing_catalog::error::CatalogError;
use listing_catalog::{parse_listings, render, validate_listings, Listing};

/// A small listing file mirroring the textbook appendix layout: comment
/// banner headers, mixed languages, untagged Kotlin blocks.
pub const SAMPLE_SOURCE: &str = r#"// Untagged listings are Kotlin code

//////////////////////////////////////////
// Listing 1: Flut von Klammern (Lisp)  //
//////////////////////////////////////////
(defun factorial (x)
    (if (zerop x)
        1
        (* x (factorial (- x 1)))))

//////////////////////////////////////////////////////////
// Listing 2: Fakultätsberechnung [imperativ] //
//////////////////////////////////////////////////////////

fun factorial(n: Int): Int {
    var res = 1
    for (i in 2..n)
        res *= i
    return res
}

//////////////////////////////////////////
// Listing 3: Lokale Typinferenz (Java) //
//////////////////////////////////////////

var fib = List.of(0, 1, 1, 2, 3, 5, 8);
for (var number : fib) {
    System.out.println(number);
}

//////////////////////////////////////////
// Listing 4: Scope Functions (Scala)  //
//////////////////////////////////////////

def getLengthFunctional(str: String): Int = str.let(_.length)
"#;

pub fn default_language_set() -> LanguageSet {
    LanguageSet::from_config(&CatalogConfig::default())
}

/// Runs parse + validate with the default configuration.
pub fn parse_and_validate(source: &str) -> Result<Vec<Listing>, Vec<CatalogError>> {
    let listings = parse_listings(source, "kotlin").map_err(|e| vec![e])?;
    let errors = validate_listings(&listings, &default_language_set());
    if errors.is_empty() {
        Ok(listings)
    } else {
        Err(errors)
    }
}

/// Runs the whole pipeline on a valid source and renders it.
///
/// Panics on parse or validation failures so tests for the rendering
/// stage stay focused on their own assertions.
pub fn render_source(source: &str, format: OutputFormat) -> String {
    let listings = parse_and_validate(source).expect("fixture should be valid");
    let catalog = Catalog::from_validated(listings);
    let config = RenderConfig {
        format,
        include_toc: true,
        highlight: true,
    };
    render(&catalog, &default_language_set(), &config)
}
