//! listing-catalog library
//!
//! This library turns a text file of labeled code listings (delimited by
//! `Listing N: Title (language)` comment headers, as found in a textbook's
//! listing appendix) into a navigable document. The pipeline is linear:
//! parse the source into listings, validate ids and language tags, build
//! an id-ordered catalog, and render it as plain text, Markdown, or HTML.
//!
//! The primary interface is the listing-catalog binary, but each stage is
//! exposed for programmatic use and testing:
//!
//! - [`parse_listings`] - extract [`Listing`]s from the raw source
//! - [`validate_listings`] - collect every id/language violation
//! - [`Catalog::from_validated`] - assemble the ordered catalog
//! - [`render`] - produce the output document

pub mod catalog;
pub mod config;
pub mod error;
pub mod highlight;
pub mod parser;
pub mod renderer;
pub mod reporting;
pub mod validator;

pub use catalog::Catalog;
pub use config::{CatalogConfig, LanguageConfig, LanguageSet, OutputFormat, RenderConfig};
pub use error::{CatalogError, Result};
pub use parser::{parse_listings, Listing};
pub use renderer::render;
pub use validator::validate_listings;
