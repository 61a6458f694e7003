//! Export: PNG snapshots of the drawing surface, browser download, and the
//! platform share sheet.
//!
//! The snapshot is exactly what the surface shows, selection handles
//! included. Download and share are fire-and-forget: their outcome is logged
//! (or alerted) and never fed back into the scene.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use tiny_skia::Pixmap;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FilePropertyBag, HtmlAnchorElement, Navigator, Url};

use crate::config::EditorConfig;
use crate::engine::EngineCore;
use crate::error::EditorError;

pub const PNG_MIME: &str = "image/png";

/// How long a download's object URL outlives the click that started it.
pub const REVOKE_DELAY_MS: i32 = 10_000;

/// Alert text when the browser cannot share files.
pub const SHARE_UNSUPPORTED_MESSAGE: &str = "Your browser does not support the Web Share API with files.";

/// Encode a surface as PNG.
///
/// # Errors
///
/// Returns [`EditorError::Encode`] if the encoder fails.
pub fn encode_png(surface: &Pixmap) -> Result<Vec<u8>, EditorError> {
    surface.encode_png().map_err(|e| EditorError::Encode(e.to_string()))
}

/// Render the current scene and encode it as PNG.
///
/// # Errors
///
/// Returns `Err` if the surface cannot be allocated or encoding fails.
pub fn snapshot_png(core: &EngineCore) -> Result<Vec<u8>, EditorError> {
    let surface = core.snapshot()?;
    let bytes = encode_png(&surface)?;
    tracing::info!(bytes = bytes.len(), objects = core.scene.len(), "snapshot encoded");
    Ok(bytes)
}

/// Save `bytes` through a temporary anchor with a `download` attribute.
///
/// The object URL is revoked after [`REVOKE_DELAY_MS`] so the browser has
/// finished reading the blob.
///
/// # Errors
///
/// Returns `Err` if any DOM call fails.
pub fn download_png(bytes: &[u8], file_name: &str) -> Result<(), EditorError> {
    let window = web_sys::window().ok_or_else(|| EditorError::Js("no window".into()))?;
    let document = window.document().ok_or_else(|| EditorError::Js("no document".into()))?;

    let blob = png_blob(bytes)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| EditorError::Js("anchor element has unexpected type".into()))?;
    anchor.set_download(file_name);
    anchor.set_href(&url);
    anchor.click();

    let revoke = Closure::once_into_js(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            tracing::warn!(error = ?e, "object url revoke failed");
        }
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), REVOKE_DELAY_MS)?;

    tracing::info!(file_name, bytes = bytes.len(), "download triggered");
    Ok(())
}

/// Offer `bytes` to the Web Share API as a PNG file.
///
/// # Errors
///
/// Returns [`EditorError::ShareUnsupported`] after alerting the user when the
/// browser cannot share files, or `Err` if the share itself is rejected.
pub async fn share_png(bytes: &[u8], config: &EditorConfig) -> Result<(), EditorError> {
    let window = web_sys::window().ok_or_else(|| EditorError::Js("no window".into()))?;
    let navigator = window.navigator();

    let opts = FilePropertyBag::new();
    opts.set_type(PNG_MIME);
    let file = File::new_with_u8_array_sequence_and_options(&byte_parts(bytes), &config.export_file_name, &opts)?;

    let data = Object::new();
    Reflect::set(&data, &"files".into(), &Array::of1(&file))?;
    Reflect::set(&data, &"title".into(), &JsValue::from_str(&config.share_title))?;
    Reflect::set(&data, &"text".into(), &JsValue::from_str(&config.share_text))?;

    if !can_share(&navigator, &data)? {
        window.alert_with_message(SHARE_UNSUPPORTED_MESSAGE)?;
        return Err(EditorError::ShareUnsupported);
    }

    let share = Reflect::get(&navigator, &"share".into())?.dyn_into::<Function>()?;
    let promise = share.call1(&navigator, &data)?.dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    tracing::info!(bytes = bytes.len(), "image shared");
    Ok(())
}

/// `navigator.canShare(data)`, treating a missing method as "no".
fn can_share(navigator: &Navigator, data: &Object) -> Result<bool, EditorError> {
    let method = Reflect::get(navigator, &"canShare".into())?;
    let Some(method) = method.dyn_ref::<Function>() else {
        return Ok(false);
    };
    Ok(method.call1(navigator, data)?.is_truthy())
}

fn png_blob(bytes: &[u8]) -> Result<Blob, EditorError> {
    let opts = BlobPropertyBag::new();
    opts.set_type(PNG_MIME);
    Ok(Blob::new_with_u8_array_sequence_and_options(&byte_parts(bytes), &opts)?)
}

fn byte_parts(bytes: &[u8]) -> Array {
    Array::of1(&Uint8Array::from(bytes))
}
