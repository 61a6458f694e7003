//! Editor configuration supplied by the host page.
//!
//! Every field has a default, so the host may pass a partial JSON object
//! (or nothing at all) and only override what it cares about.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "canvas-image.png";
pub const DEFAULT_SHARE_TITLE: &str = "My Canvas Image";
pub const DEFAULT_SHARE_TEXT: &str = "Check out my creation!";

/// Surface size, handle styling and export naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Drawing surface width in pixels.
    pub width: u32,
    /// Drawing surface height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA fill for resize handles.
    pub handle_color: [u8; 4],
    /// File name used for downloads and shared files.
    pub export_file_name: String,
    /// Title passed to the platform share sheet.
    pub share_title: String,
    /// Body text passed to the platform share sheet.
    pub share_text: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
            handle_color: [0, 0, 255, 255],
            export_file_name: DEFAULT_EXPORT_FILE_NAME.into(),
            share_title: DEFAULT_SHARE_TITLE.into(),
            share_text: DEFAULT_SHARE_TEXT.into(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Config`] when the input is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }
}
