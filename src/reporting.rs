use crate::catalog::Catalog;
use crate::error::CatalogError;
use std::time::Duration;

/// Formats an error message with a timestamp and module prefix.
fn format_error<'a>(
    timestamp: &chrono::format::DelayedFormat<chrono::format::StrftimeItems<'a>>,
    message: &str,
) -> String {
    format!("{} [ERROR] (listing_catalog): {}", timestamp, message)
}

/// Reports a batch of pipeline errors to stderr.
///
/// Every collected error is printed on its own line, followed by a
/// summary count, so a single run surfaces all problems at once.
pub fn report_errors(errors: &[CatalogError]) {
    use chrono::Local;

    let now = Local::now();
    let timestamp = now.format("%Y-%m-%d %H:%M:%S");

    for error in errors {
        eprintln!("{}", format_error(&timestamp, &error.to_string()));
    }
    eprintln!(
        "{}",
        format_error(
            &timestamp,
            &format!("{} problem(s) found, nothing rendered", errors.len())
        )
    );
}

/// Prints run statistics to stderr.
///
/// Shows the number of listings rendered with per-language counts and the
/// total pipeline time, e.g.:
///
/// ```text
/// 2024-01-01 12:00:00 [INFO] (listing_catalog): Rendered 11 listing(s) (java: 2, kotlin: 7, lisp: 1, scala: 1)
/// ```
pub fn print_render_statistics(catalog: &Catalog, duration: Duration) {
    use chrono::Local;

    let mut sorted_stats: Vec<_> = catalog.language_counts().into_iter().collect();
    sorted_stats.sort_by(|(a, _), (b, _)| a.cmp(b));

    let stats_str = sorted_stats
        .iter()
        .map(|(lang, count)| format!("{}: {}", lang, count))
        .collect::<Vec<_>>()
        .join(", ");

    eprintln!(
        "{} [INFO] (listing_catalog): Rendered {} listing(s) ({})",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        catalog.len(),
        stats_str
    );
    eprintln!(
        "{} [INFO] (listing_catalog): Pipeline finished in {}ms",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        duration.as_millis()
    );
}
