use anyhow::{Context, Result};
use clap::Parser;
use listing_catalog::catalog::Catalog;
use listing_catalog::config::{CatalogConfig, LanguageSet, OutputFormat, RenderConfig};
use listing_catalog::error::CatalogError;
use listing_catalog::{parse_listings, render, reporting, validate_listings};
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;
use std::time::Instant;

/// Render a file of labeled code listings into a navigable document.
#[derive(Debug, Parser)]
#[command(name = "listing-catalog", version, about)]
struct Cli {
    /// Path to the listing source file
    input: PathBuf,

    /// Output path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: plain, markdown, or html
    #[arg(short, long, default_value = "plain")]
    format: String,

    /// Omit the table of contents
    #[arg(long)]
    no_toc: bool,

    /// Disable syntax highlighting
    #[arg(long)]
    no_highlight: bool,

    /// Path to a TOML file configuring the recognized languages
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language for listings without an explicit tag
    #[arg(long)]
    default_language: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

/// Reports pipeline errors and turns them into the run's failure.
fn fail(errors: Vec<CatalogError>) -> anyhow::Error {
    let count = errors.len();
    reporting::report_errors(&errors);
    anyhow::anyhow!("{} problem(s) found", count)
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    // The format is checked before any file I/O so a bad flag fails
    // without wasted work.
    let format = OutputFormat::from_str(&cli.format).map_err(|e| fail(vec![e]))?;

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::from_path(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(language) = &cli.default_language {
        config.default_language = language.clone();
        config
            .validate()
            .context("Invalid --default-language override")?;
    }
    let languages = LanguageSet::from_config(&config);

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let listings = parse_listings(&source, &config.default_language).map_err(|e| fail(vec![e]))?;
    log::info!("parsed {} listing(s) from {}", listings.len(), cli.input.display());

    let violations = validate_listings(&listings, &languages);
    if !violations.is_empty() {
        return Err(fail(violations));
    }

    let catalog = Catalog::from_validated(listings);
    let render_config = RenderConfig {
        format,
        include_toc: !cli.no_toc,
        highlight: !cli.no_highlight,
    };
    let document = render(&catalog, &languages, &render_config);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(document.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    reporting::print_render_statistics(&catalog, start.elapsed());
    Ok(())
}
