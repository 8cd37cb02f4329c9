use thiserror::Error;

/// Errors produced along the parse/validate/render pipeline.
///
/// Parse-time errors (`MalformedListing`, `EmptyBody`) are fatal and abort
/// the run immediately. Validation errors (`DuplicateId`, `UnknownLanguage`)
/// are collected so the caller sees every problem at once.
/// `UnsupportedFormat` is raised while handling configuration, before any
/// input is read.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("listing header at line {line} has no parseable id: {header:?}")]
    MalformedListing { line: usize, header: String },

    #[error("listing {id} (line {line}) has an empty body")]
    EmptyBody { id: u32, line: usize },

    #[error("duplicate listing id {id} (lines {first_line} and {second_line})")]
    DuplicateId {
        id: u32,
        first_line: usize,
        second_line: usize,
    },

    #[error("listing {id} (line {line}) has unrecognized language tag {tag:?}")]
    UnknownLanguage { id: u32, line: usize, tag: String },

    #[error("unsupported output format {format:?} (expected one of: plain, markdown, html)")]
    UnsupportedFormat { format: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
