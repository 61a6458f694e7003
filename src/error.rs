//! Errors raised at the edges of the editor: decoding, fetching, surfaces,
//! encoding, configuration and platform sharing.
//!
//! The interaction controller itself never fails; operations without a
//! selection are no-ops. Everything here belongs to the collaborators that
//! feed images in or carry the finished raster out.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("fetch failed for {locator}: {reason}")]
    Fetch { locator: String, reason: String },
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    PixelData { expected: usize, actual: usize },
    #[error("cannot allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
    #[error("png encoding failed: {0}")]
    Encode(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("web share with files is not supported")]
    ShareUnsupported,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EditorError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
