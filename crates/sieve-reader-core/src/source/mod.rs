//! Where the article document comes from.
//!
//! The browser build fetches it with `window.fetch`; natively it can be read
//! from disk or (feature `native`) over HTTP. Every source yields the same
//! [`ArticleDocument`], loaded once per session.

#[cfg(feature = "native")]
mod http;

use std::path::PathBuf;

use crate::article::ArticleDocument;
use crate::error::Result;

#[cfg(feature = "native")]
pub use http::HttpSource;

/// A one-shot provider of the article document.
#[allow(async_fn_in_trait)]
pub trait ArticleSource {
    /// Human-readable origin, for logs.
    fn describe(&self) -> String;

    async fn load(&self) -> Result<ArticleDocument>;
}

/// Parse a response body into a document.
pub fn parse_document(body: &str) -> Result<ArticleDocument> {
    let document: ArticleDocument = serde_json::from_str(body)?;
    if let Some(declared) = document.total_articles {
        if declared != document.articles.len() as u64 {
            tracing::debug!(
                declared,
                actual = document.articles.len(),
                "total_articles disagrees with article count"
            );
        }
    }
    Ok(document)
}

/// Reads the document from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArticleSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<ArticleDocument> {
        let body = std::fs::read_to_string(&self.path)?;
        parse_document(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;

    #[test]
    fn parses_minimal_document() {
        let doc = parse_document(r#"{"articles": [{"title": "A", "url": "https://a"}]}"#).unwrap();
        assert_eq!(doc.articles.len(), 1);
        assert_eq!(doc.generated_at, None);
    }

    #[test]
    fn null_articles_is_empty() {
        let doc = parse_document(r#"{"generated_at": "2026-01-01T00:00:00Z", "articles": null}"#)
            .unwrap();
        assert!(doc.articles.is_empty());
    }

    #[test]
    fn rejects_non_document() {
        assert!(matches!(parse_document("[1, 2]"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_document("<html>"), Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileSource::new("/definitely/not/here.json");
        assert!(matches!(source.load().await, Err(LoadError::Io(_))));
    }
}
