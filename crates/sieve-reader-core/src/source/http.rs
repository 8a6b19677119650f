//! Native HTTP source using reqwest

use std::time::Duration;

use reqwest::Client;

use super::{parse_document, ArticleSource};
use crate::article::ArticleDocument;
use crate::error::{LoadError, Result};

const USER_AGENT: &str = concat!("sieve-reader/", env!("CARGO_PKG_VERSION"));

/// Fetches the document from a URL.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LoadError::transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ArticleSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<ArticleDocument> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::transport(e.to_string()))?;

        parse_document(&body)
    }
}
