use crate::catalog::Catalog;
use crate::config::{LanguageSet, OutputFormat, RenderConfig};
use crate::highlight::{escape_html, highlight_line, keywords_for};
use crate::parser::Listing;

const DOCUMENT_TITLE: &str = "Listing Catalog";

/// Renders a catalog into a single output document.
///
/// The output is an optional table of contents followed by one section
/// per listing (id, title, language, then the body verbatim). Rendering
/// is deterministic and never fails: the format has already been checked
/// while handling configuration, and highlighting degrades to plain text
/// for languages without a keyword table.
pub fn render(catalog: &Catalog, languages: &LanguageSet, config: &RenderConfig) -> String {
    log::debug!(
        "rendering {} listing(s) as {:?}",
        catalog.len(),
        config.format
    );

    match config.format {
        OutputFormat::Plain => render_plain(catalog, config),
        OutputFormat::Markdown => render_markdown(catalog, config),
        OutputFormat::Html => render_html(catalog, languages, config),
    }
}

fn render_plain(catalog: &Catalog, config: &RenderConfig) -> String {
    let mut out = String::new();

    out.push_str(DOCUMENT_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(DOCUMENT_TITLE.len()));
    out.push_str("\n\n");

    if config.include_toc {
        out.push_str("Contents:\n");
        for listing in catalog.iter() {
            out.push_str(&format!(
                "  {}. {} ({})\n",
                listing.id, listing.title, listing.language
            ));
        }
        out.push('\n');
    }

    for listing in catalog.iter() {
        out.push_str(&format!(
            "--- Listing {}: {} [{}] ---\n",
            listing.id, listing.title, listing.language
        ));
        for line in &listing.body {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

fn render_markdown(catalog: &Catalog, config: &RenderConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {DOCUMENT_TITLE}\n\n"));

    if config.include_toc {
        out.push_str("## Contents\n\n");
        for listing in catalog.iter() {
            let heading = section_heading(listing);
            out.push_str(&format!(
                "- [{}](#{}) ({})\n",
                heading,
                slug(&heading),
                listing.language
            ));
        }
        out.push('\n');
    }

    for listing in catalog.iter() {
        out.push_str(&format!("## {}\n\n", section_heading(listing)));
        out.push_str(&format!("Language: `{}`\n\n", listing.language));

        let fence_tag = if config.highlight {
            listing.language.as_str()
        } else {
            ""
        };
        out.push_str(&format!("```{fence_tag}\n"));
        for line in &listing.body {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("```\n\n");
    }

    out
}

fn render_html(catalog: &Catalog, languages: &LanguageSet, config: &RenderConfig) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(DOCUMENT_TITLE)));
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(DOCUMENT_TITLE)));

    if config.include_toc {
        out.push_str("<nav>\n<ul>\n");
        for listing in catalog.iter() {
            out.push_str(&format!(
                "<li><a href=\"#listing-{}\">{}</a> <code>{}</code></li>\n",
                listing.id,
                escape_html(&section_heading(listing)),
                escape_html(&listing.language)
            ));
        }
        out.push_str("</ul>\n</nav>\n");
    }

    for listing in catalog.iter() {
        out.push_str(&format!("<section id=\"listing-{}\">\n", listing.id));
        out.push_str(&format!(
            "<h2>{} <code>{}</code></h2>\n",
            escape_html(&section_heading(listing)),
            escape_html(&listing.language)
        ));
        out.push_str(&format!(
            "<pre><code class=\"language-{}\">",
            escape_html(&listing.language)
        ));

        // Keyword tables are keyed by canonical name, so alias tags
        // highlight the same way as the canonical spelling.
        let keywords = if config.highlight {
            languages
                .resolve(&listing.language)
                .and_then(keywords_for)
        } else {
            None
        };

        for line in &listing.body {
            match keywords {
                Some(kw) => highlight_line(line, kw, &mut out),
                None => out.push_str(&escape_html(line)),
            }
            out.push('\n');
        }

        out.push_str("</code></pre>\n</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn section_heading(listing: &Listing) -> String {
    format!("Listing {}: {}", listing.id, listing.title)
}

/// GitHub-style anchor slug for a markdown heading: lowercase, alphanumeric
/// runs kept, spaces become hyphens, everything else dropped.
fn slug(heading: &str) -> String {
    let mut out = String::with_capacity(heading.len());
    for ch in heading.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
        } else if ch == ' ' || ch == '-' {
            out.push('-');
        }
    }
    out
}
