use crate::error::CatalogError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Configuration for a catalog run.
///
/// This structure is deserialized from an optional TOML file. It names the
/// recognized language set and the default language assigned to listings
/// without an explicit tag.
///
/// # Example
///
/// ```toml
/// default_language = "kotlin"
///
/// [languages.kotlin]
/// aliases = ["kotlin", "kt"]
///
/// [languages.groovy]
/// aliases = ["groovy"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Language assigned to listings with no explicit tag
    pub default_language: String,

    /// Language-specific configurations indexed by canonical name
    pub languages: HashMap<String, LanguageConfig>,
}

/// Configuration for a single recognized language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Whether this language is part of the recognized set
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Tags that map to this language; empty means "use the built-in
    /// aliases for this name"
    #[serde(default)]
    pub aliases: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            aliases: Vec::new(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let languages = ["kotlin", "java", "scala", "lisp", "plaintext"]
            .into_iter()
            .map(|name| (name.to_string(), LanguageConfig::default()))
            .collect();

        Self {
            default_language: "kotlin".to_string(),
            languages,
        }
    }
}

impl CatalogConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: CatalogConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.languages.values().all(|lang| !lang.enabled) {
            anyhow::bail!("Configuration must enable at least one language");
        }

        for (name, lang) in &self.languages {
            if lang.aliases.iter().any(|a| a.trim().is_empty()) {
                anyhow::bail!("Language '{}' has an empty alias", name);
            }
        }

        let set = LanguageSet::from_config(self);
        if set.resolve(&self.default_language).is_none() {
            anyhow::bail!(
                "Default language '{}' is not in the recognized set",
                self.default_language
            );
        }

        Ok(())
    }
}

/// Built-in alias table for the languages the source material uses.
///
/// Aliases follow the highlight.js fence markers for each language. Names
/// without a built-in mapping fall back to the name itself, so custom
/// languages from the configuration are recognized as written.
fn default_aliases(name: &str) -> Vec<String> {
    match name {
        "kotlin" => vec!["kotlin", "kt"],
        "java" => vec!["java", "jsp"],
        "scala" => vec!["scala", "sc"],
        "lisp" => vec!["lisp"],
        "plaintext" => vec!["plaintext", "txt", "text"],
        _ => vec![name],
    }
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// The recognized language set, mapping tags to canonical names.
///
/// Built once from the configuration and passed explicitly into the
/// validator and renderer; there is no global registry.
#[derive(Debug, Clone)]
pub struct LanguageSet {
    tags: HashMap<String, String>,
}

impl LanguageSet {
    /// Builds the set from enabled languages and their resolved aliases.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut tags = HashMap::new();

        for (name, lang) in &config.languages {
            if !lang.enabled {
                continue;
            }
            let aliases = if lang.aliases.is_empty() {
                default_aliases(name)
            } else {
                lang.aliases.clone()
            };
            for alias in aliases {
                tags.insert(alias.to_lowercase(), name.clone());
            }
        }

        Self { tags }
    }

    /// Resolves a tag to its canonical language name.
    pub fn resolve(&self, tag: &str) -> Option<&str> {
        self.tags.get(&tag.to_lowercase()).map(String::as_str)
    }
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Markdown,
    Html,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" | "txt" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            _ => Err(CatalogError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Options controlling the rendered document.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub include_toc: bool,
    pub highlight: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_recognizes_source_languages() {
        let config = CatalogConfig::default();
        let set = LanguageSet::from_config(&config);

        assert_eq!(set.resolve("kotlin"), Some("kotlin"));
        assert_eq!(set.resolve("kt"), Some("kotlin"));
        assert_eq!(set.resolve("Lisp"), Some("lisp"));
        assert_eq!(set.resolve("scala"), Some("scala"));
        assert_eq!(set.resolve("java"), Some("java"));
        assert_eq!(set.resolve("fortran"), None);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
default_language = "java"

[languages.java]

[languages.groovy]
aliases = ["groovy", "gvy"]

[languages.lisp]
enabled = false
"#;

        let config: CatalogConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        let set = LanguageSet::from_config(&config);

        assert_eq!(config.default_language, "java");
        assert_eq!(set.resolve("gvy"), Some("groovy"));
        assert_eq!(set.resolve("lisp"), None);
    }

    #[test]
    fn test_unresolvable_default_language_rejected() {
        let config = CatalogConfig {
            default_language: "cobol".to_string(),
            ..CatalogConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("plain").unwrap(), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_str("HTML").unwrap(), OutputFormat::Html);

        let err = OutputFormat::from_str("pdf").unwrap_err();
        match err {
            CatalogError::UnsupportedFormat { format } => assert_eq!(format, "pdf"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }
}
