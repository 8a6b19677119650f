//! sieve-reader-web: browser entry point for the Sieve article reader
//!
//! On load this reads the optional inline configuration block, installs
//! console logging, hides the server-rendered fallback list and starts the
//! reader once the article document has been fetched.
//!
//! ```html
//! <script type="application/json" id="reader-config">
//!   {"detail_toggle": "score", "log_filter": "sieve_reader_core=debug"}
//! </script>
//! <script type="module">
//!   import init from "/pkg/sieve_reader_web.js";
//!   init();
//! </script>
//! ```

mod app;
mod dom;
mod fetch;
mod logging;

use sieve_reader_core::{ConfigError, ReaderConfig};
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

pub use fetch::FetchSource;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = dom::document()?;
    let (config, config_error) = read_config(&document);

    logging::init(&config.log_filter);
    if let Some(err) = config_error {
        warn!(error = %err, "invalid reader config, using defaults");
    }

    if let Some(fallback) = dom::by_id::<HtmlElement>(&document, &config.elements.static_articles)
    {
        fallback.set_hidden(true);
    }

    let elements = app::Elements::resolve(&document, &config)?;
    wasm_bindgen_futures::spawn_local(app::run(config, elements));
    Ok(())
}

/// Configuration from the inline JSON block. Absent or blank means defaults.
fn read_config(document: &Document) -> (ReaderConfig, Option<ConfigError>) {
    let id = ReaderConfig::default().elements.config;
    let json = dom::by_id::<Element>(document, &id)
        .and_then(|block| block.text_content())
        .filter(|text| !text.trim().is_empty());

    match json {
        Some(json) => match ReaderConfig::from_json(&json) {
            Ok(config) => (config, None),
            Err(err) => (ReaderConfig::default(), Some(err)),
        },
        None => (ReaderConfig::default(), None),
    }
}
