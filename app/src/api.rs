//! Browser fetch client
//!
//! Fetches static files served next to the app bundle. Used for the
//! reference link CSV, which is loaded once on mount.

use serpdash_core::{LinkSourceError, ReferenceSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// A file fetched over HTTP by relative URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn fetch_error(&self, reason: impl std::fmt::Debug) -> LinkSourceError {
        LinkSourceError::Fetch {
            url: self.url.clone(),
            reason: format!("{reason:?}"),
        }
    }
}

impl ReferenceSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LinkSourceError> {
        let window = web_sys::window().ok_or_else(|| self.fetch_error("no window"))?;

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(|e| self.fetch_error(e))?;
        let response: web_sys::Response = response.dyn_into().map_err(|e| self.fetch_error(e))?;

        if !response.ok() {
            return Err(LinkSourceError::Status {
                url: self.url.clone(),
                status: response.status(),
            });
        }

        let buffer = response.array_buffer().map_err(|e| self.fetch_error(e))?;
        let buffer = JsFuture::from(buffer)
            .await
            .map_err(|e| self.fetch_error(e))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }
}
