//! Loads the article document with `window.fetch`.

use sieve_reader_core::error::{LoadError, Result};
use sieve_reader_core::{parse_document, ArticleDocument, ArticleSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ArticleSource for FetchSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<ArticleDocument> {
        let window = web_sys::window().ok_or_else(|| LoadError::transport("no window"))?;

        let response: Response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
            });
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| LoadError::transport("response body is not text"))?;

        parse_document(&body)
    }
}

fn js_error(value: JsValue) -> LoadError {
    LoadError::transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
