//! Integration tests for listing-catalog
//!
//! These tests run the full parse → validate → catalog → render pipeline
//! against in-memory fixtures (and tempfile-backed files where the
//! on-disk path matters) and assert on the documented failure kinds.

mod common;

use common::{default_language_set, parse_and_validate, render_source, SAMPLE_SOURCE};
use listing_catalog::catalog::Catalog;
use listing_catalog::config::{CatalogConfig, LanguageSet, OutputFormat, RenderConfig};
use listing_catalog::error::CatalogError;
use listing_catalog::{parse_listings, render, validate_listings};
use std::str::FromStr;

#[test]
fn integration_sample_source_parses_all_listings() {
    let listings = parse_and_validate(SAMPLE_SOURCE).expect("sample should be valid");

    assert_eq!(listings.len(), 4);
    let languages: Vec<&str> = listings.iter().map(|l| l.language.as_str()).collect();
    assert_eq!(languages, vec!["lisp", "kotlin", "java", "scala"]);
}

#[test]
fn integration_catalog_ids_strictly_increasing() {
    // Headers out of order in the source still come out sorted
    let source = r#"
// Listing 9: Neun //
val a = 9
// Listing 2: Zwei //
val b = 2
// Listing 5: Fuenf //
val c = 5
"#;

    let listings = parse_and_validate(source).unwrap();
    let catalog = Catalog::from_validated(listings);

    let ids: Vec<u32> = catalog.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![2, 5, 9]);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn integration_plain_text_round_trip() {
    let listings = parse_and_validate(SAMPLE_SOURCE).unwrap();
    let catalog = Catalog::from_validated(listings);
    let out = render_source(SAMPLE_SOURCE, OutputFormat::Plain);

    // Strip the formatting markers and compare each section's lines with
    // the original body, byte for byte.
    let mut sections: Vec<Vec<&str>> = Vec::new();
    for line in out.lines() {
        if line.starts_with("--- Listing ") {
            sections.push(Vec::new());
        } else if let Some(section) = sections.last_mut() {
            section.push(line);
        }
    }
    for section in &mut sections {
        while section.last().is_some_and(|l| l.is_empty()) {
            section.pop();
        }
    }

    assert_eq!(sections.len(), catalog.len());
    for (section, listing) in sections.iter().zip(catalog.iter()) {
        assert_eq!(section, &listing.body.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

#[test]
fn integration_rendering_is_idempotent() {
    for format in [OutputFormat::Plain, OutputFormat::Markdown, OutputFormat::Html] {
        let first = render_source(SAMPLE_SOURCE, format);
        let second = render_source(SAMPLE_SOURCE, format);
        assert_eq!(first, second);
    }
}

#[test]
fn integration_duplicate_id_reports_both_locations() {
    let source = r#"
// Listing 3: Erste Variante //
val a = 1

// Listing 3: Zweite Variante //
val b = 2
"#;

    let errors = parse_and_validate(source).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        CatalogError::DuplicateId {
            id,
            first_line,
            second_line,
        } => {
            assert_eq!(*id, 3);
            assert_eq!(*first_line, 2);
            assert_eq!(*second_line, 5);
        }
        other => panic!("expected DuplicateId, got {other:?}"),
    }

    let message = errors[0].to_string();
    assert!(message.contains("lines 2 and 5"), "message was: {message}");
}

#[test]
fn integration_empty_body_references_id() {
    // A delimiter immediately followed by another delimiter
    let source = r#"
// Listing 4: Leer //
// Listing 5: Voll //
val a = 1
"#;

    let err = parse_listings(source, "kotlin").unwrap_err();
    match err {
        CatalogError::EmptyBody { id, .. } => assert_eq!(id, 4),
        other => panic!("expected EmptyBody, got {other:?}"),
    }
}

#[test]
fn integration_unsupported_format_rejected_before_any_io() {
    let err = OutputFormat::from_str("pdf").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnsupportedFormat { ref format } if format == "pdf"
    ));
    assert!(err.to_string().contains("pdf"));
}

#[test]
fn integration_validation_collects_every_problem() {
    let source = r#"
// Listing 1: Eins //
val a = 1
// Listing 1: Nochmal Eins //
val b = 1
// Listing 2: Unbekannt (Fortran) //
PRINT *, 'hi'
"#;

    let errors = parse_and_validate(source).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .any(|e| matches!(e, CatalogError::DuplicateId { id: 1, .. })));
    assert!(errors
        .iter()
        .any(|e| matches!(e, CatalogError::UnknownLanguage { tag, .. } if tag == "fortran")));
}

#[test]
fn integration_config_file_narrows_language_set() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("catalog.toml");
    std::fs::write(
        &config_path,
        r#"
default_language = "java"

[languages.java]
"#,
    )?;

    let config = CatalogConfig::from_path(&config_path)?;
    let set = LanguageSet::from_config(&config);

    let listings = parse_listings(SAMPLE_SOURCE, &config.default_language)?;
    let errors = validate_listings(&listings, &set);

    // The untagged listing now inherits "java"; the Lisp and Scala tags
    // are no longer recognized
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|e| matches!(e, CatalogError::UnknownLanguage { .. })));
    Ok(())
}

#[test]
fn integration_input_read_from_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("listings.txt");
    std::fs::write(&input_path, SAMPLE_SOURCE)?;

    let source = std::fs::read_to_string(&input_path)?;
    let listings = parse_and_validate(&source).expect("sample should be valid");
    let catalog = Catalog::from_validated(listings);

    let output_path = dir.path().join("catalog.html");
    let config = RenderConfig {
        format: OutputFormat::Html,
        include_toc: true,
        highlight: true,
    };
    std::fs::write(&output_path, render(&catalog, &default_language_set(), &config))?;

    let written = std::fs::read_to_string(&output_path)?;
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("<a href=\"#listing-1\">"));
    Ok(())
}

#[test]
fn integration_markdown_toc_links_sections() {
    let out = render_source(SAMPLE_SOURCE, OutputFormat::Markdown);

    assert!(out.contains("## Contents"));
    assert!(out.contains("(#listing-1-flut-von-klammern)"));
    assert!(out.contains("## Listing 1: Flut von Klammern"));
    assert!(out.contains("```lisp"));
}
