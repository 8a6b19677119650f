//! Configuration for the reader
//!
//! Supplied by the host page as an inline JSON block. Every field has a
//! default, so a partial block (or none at all) is valid.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound for the search debounce delay
pub const MAX_SEARCH_DEBOUNCE_MS: u32 = 5_000;

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Where the article document is fetched from
    pub data_url: String,
    /// Quiet period before a search edit is applied
    pub search_debounce_ms: u32,
    /// Which part of an article opens its detail panel
    pub detail_toggle: DetailToggle,
    /// Offer per-axiom sort fields
    pub axiom_sort: bool,
    /// Tracing filter directive for console logging
    pub log_filter: String,
    /// Host page element ids
    pub elements: ElementIds,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            data_url: "/data/articles.json".to_string(),
            search_debounce_ms: 200,
            detail_toggle: DetailToggle::default(),
            axiom_sort: true,
            log_filter: "info".to_string(),
            elements: ElementIds::default(),
        }
    }
}

/// Element that expands an article's per-axiom breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailToggle {
    /// The title toggles the panel; the source link opens the article.
    #[default]
    Title,
    /// The score toggles the panel; the title opens the article.
    Score,
}

/// Ids of the host page elements the reader binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub list: String,
    pub status: String,
    pub pagination: String,
    pub source_filter: String,
    pub topic_filter: String,
    /// Wrapper hidden when there is at most one topic
    pub topic_filter_label: String,
    pub search: String,
    /// Container of `data-sort` buttons
    pub sort_buttons: String,
    pub sort_field: String,
    pub sort_direction: String,
    /// Container for axiom checkboxes
    pub axiom_filter: String,
    /// Server-rendered fallback list, hidden once the reader runs
    pub static_articles: String,
    pub config: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            list: "article-list".to_string(),
            status: "reader-status".to_string(),
            pagination: "reader-pagination".to_string(),
            source_filter: "filter-source".to_string(),
            topic_filter: "filter-topic".to_string(),
            topic_filter_label: "topic-filter-label".to_string(),
            search: "filter-search".to_string(),
            sort_buttons: "reader-sort".to_string(),
            sort_field: "sort-field".to_string(),
            sort_direction: "sort-dir".to_string(),
            axiom_filter: "axiom-filter".to_string(),
            static_articles: "static-articles".to_string(),
            config: "reader-config".to_string(),
        }
    }
}

impl ReaderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON string and validate it
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_url.trim().is_empty() {
            return Err(ConfigError::MissingField("data_url".to_string()));
        }

        if self.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(ConfigError::OutOfRange(format!(
                "search_debounce_ms must be at most {}",
                MAX_SEARCH_DEBOUNCE_MS
            )));
        }

        if self.elements.list.is_empty() {
            return Err(ConfigError::MissingField("elements.list".to_string()));
        }

        Ok(())
    }
}
