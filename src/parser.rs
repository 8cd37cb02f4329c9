use crate::error::{CatalogError, Result};

/// Minimum length for a line of slashes to count as a decorative rule.
const RULE_MIN_LEN: usize = 4;

/// A code listing extracted from the source text with its metadata.
///
/// Listings are identified by delimiter headers in the source:
///
/// ```text
/// //////////////////////////////////////////
/// // Listing 1: Flut von Klammern (Lisp)  //
/// //////////////////////////////////////////
/// (defun factorial (x) ...)
/// ```
///
/// The header carries a numeric id, a title, and an optional trailing
/// parenthesized language tag. Listings without an explicit tag inherit
/// the default language for the whole input. The lines of slashes framing
/// a header are decoration and are not part of any body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Numeric id from the header, the catalog's ordering key
    pub id: u32,
    /// Title text, with the language tag stripped
    pub title: String,
    /// Lowercased language tag, explicit or inherited from the default
    pub language: String,
    /// Body lines, verbatim, with leading/trailing blank lines trimmed
    pub body: Vec<String>,
    /// 1-based line number of the header in the source
    pub line: usize,
}

impl Listing {
    /// Returns the body joined into a single newline-separated string.
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }
}

/// Parses the source text into a sequence of listings.
///
/// This is a single pass over the input lines. Text before the first
/// header is treated as a prologue and ignored (the source material opens
/// with a free-form note). Parsing stops at the first structural error.
///
/// # Arguments
///
/// * `source` - The full UTF-8 source text
/// * `default_language` - Language assigned to listings with no explicit tag
///
/// # Errors
///
/// * [`CatalogError::MalformedListing`] if a header has no parseable id
/// * [`CatalogError::EmptyBody`] if a block has no body lines after trimming
pub fn parse_listings(source: &str, default_language: &str) -> Result<Vec<Listing>> {
    let mut listings = Vec::new();
    let mut current: Option<Listing> = None;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;

        if is_rule_line(raw_line) {
            continue;
        }

        if let Some(header) = header_text(raw_line) {
            let (id, title, tag) = parse_header(header, line_no)?;
            if let Some(listing) = current.take() {
                listings.push(finish_listing(listing)?);
            }

            let language = tag.unwrap_or_else(|| default_language.to_lowercase());
            log::debug!("found listing {} ({}) at line {}", id, language, line_no);

            current = Some(Listing {
                id,
                title,
                language,
                body: Vec::new(),
                line: line_no,
            });
            continue;
        }

        if let Some(listing) = current.as_mut() {
            listing.body.push(raw_line.to_string());
        }
        // Prologue line before the first header: ignored.
    }

    if let Some(listing) = current.take() {
        listings.push(finish_listing(listing)?);
    }

    Ok(listings)
}

/// Trims blank edges off the body and rejects empty blocks.
fn finish_listing(mut listing: Listing) -> Result<Listing> {
    while listing.body.first().is_some_and(|l| l.trim().is_empty()) {
        listing.body.remove(0);
    }
    while listing.body.last().is_some_and(|l| l.trim().is_empty()) {
        listing.body.pop();
    }

    if listing.body.is_empty() {
        return Err(CatalogError::EmptyBody {
            id: listing.id,
            line: listing.line,
        });
    }

    Ok(listing)
}

/// Returns true for decorative lines consisting only of slashes.
fn is_rule_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= RULE_MIN_LEN && trimmed.chars().all(|c| c == '/')
}

/// Strips comment framing and returns the header text, if this line is a
/// delimiter. A delimiter's content starts with "Listing" and contains a
/// colon somewhere after it.
fn header_text(line: &str) -> Option<&str> {
    let inner = line
        .trim()
        .trim_start_matches('/')
        .trim_end_matches('/')
        .trim();

    (inner.starts_with("Listing") && inner.contains(':')).then_some(inner)
}

/// Parses a header's id, title, and optional trailing language tag.
///
/// Examples:
/// - "Listing 2: Fakultätsberechnung [imperativ]" -> (2, title, None)
/// - "Listing 1: Flut von Klammern (Lisp)" -> (1, title, Some("lisp"))
fn parse_header(header: &str, line_no: usize) -> Result<(u32, String, Option<String>)> {
    let malformed = || CatalogError::MalformedListing {
        line: line_no,
        header: header.to_string(),
    };

    let rest = header.strip_prefix("Listing").ok_or_else(malformed)?;
    let (id_part, title_part) = rest.split_once(':').ok_or_else(malformed)?;
    let id: u32 = id_part.trim().parse().map_err(|_| malformed())?;

    let (title, tag) = split_language_tag(title_part.trim());
    Ok((id, title, tag))
}

/// Splits a trailing parenthesized language tag off the title.
///
/// Only a simple trailing "(word)" is treated as a tag; anything else
/// stays part of the title. Tags are lowercased here so that the
/// validator and renderer compare a single spelling.
fn split_language_tag(title: &str) -> (String, Option<String>) {
    let trimmed = title.trim_end();
    if !trimmed.ends_with(')') {
        return (title.to_string(), None);
    }

    let Some(open) = trimmed.rfind('(') else {
        return (title.to_string(), None);
    };

    let tag = trimmed[open + 1..trimmed.len() - 1].trim();
    let is_tag = !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '+' | '#'));

    if !is_tag {
        return (title.to_string(), None);
    }

    (trimmed[..open].trim_end().to_string(), Some(tag.to_lowercase()))
}
