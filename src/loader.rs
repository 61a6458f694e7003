//! Async image loading: fetch bytes for a locator, then decode them.
//!
//! Loading is the only suspend point before an object enters the scene. The
//! caller adds the object (and redraws) only after [`load_image`] resolves
//! successfully; a failed load leaves the scene untouched. Loads are not
//! cancellable.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::future::Future;
use std::path::PathBuf;

use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::EditorError;
use crate::sprite::SpriteImage;

/// Source of raw image bytes.
pub trait Fetch {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<Vec<u8>, EditorError>>;
}

/// Reads locators as paths relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetch for FsFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, EditorError> {
        std::fs::read(self.root.join(locator)).map_err(|e| EditorError::Fetch {
            locator: locator.to_owned(),
            reason: e.to_string(),
        })
    }
}

/// Fetches locators (relative URLs or `data:` URLs) with `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetcher;

impl Fetch for BrowserFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, EditorError> {
        let window = web_sys::window().ok_or_else(|| EditorError::Js("no window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_str(locator)).await?.dyn_into()?;
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(EditorError::Fetch { locator: locator.to_owned(), reason: format!("HTTP {status}") });
        }
        let buffer = JsFuture::from(response.array_buffer()?).await?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}

/// Fetch and decode the image at `locator`.
///
/// # Errors
///
/// Returns the fetch or decode error; both are logged here.
pub async fn load_image<F: Fetch>(fetcher: &F, locator: &str) -> Result<SpriteImage, EditorError> {
    let bytes = match fetcher.fetch(locator).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(locator, error = %e, "image fetch failed");
            return Err(e);
        }
    };
    match SpriteImage::decode(&bytes) {
        Ok(image) => {
            tracing::info!(locator, width = image.width(), height = image.height(), "image loaded");
            Ok(image.with_source(locator))
        }
        Err(e) => {
            tracing::warn!(locator, error = %e, "image decode failed");
            Err(e)
        }
    }
}
