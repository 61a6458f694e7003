//! Decoded material images.
//!
//! A [`SpriteImage`] is produced once per load (catalog material or imported
//! file) and then owned by exactly one placed object. Pixels are stored
//! premultiplied so the renderer can composite them without conversion.

#[cfg(test)]
#[path = "sprite_test.rs"]
mod sprite_test;

use tiny_skia::{ColorU8, Pixmap, PixmapRef};

use crate::error::EditorError;

/// An immutable decoded raster.
#[derive(Debug, Clone)]
pub struct SpriteImage {
    pixmap: Pixmap,
    source: Option<String>,
}

impl SpriteImage {
    /// Decode PNG/JPEG/GIF/WebP bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Decode`] for unrecognized or corrupt data and
    /// [`EditorError::Surface`] for a zero-sized image.
    pub fn decode(bytes: &[u8]) -> Result<Self, EditorError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        Self::from_rgba(rgba.width(), rgba.height(), rgba.as_raw())
    }

    /// Build from straight-alpha RGBA8 rows.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::PixelData`] when `data` is not exactly
    /// `width * height * 4` bytes, or [`EditorError::Surface`] when either
    /// dimension is zero.
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self, EditorError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(EditorError::PixelData { expected, actual: data.len() });
        }
        let mut pixmap = Pixmap::new(width, height).ok_or(EditorError::Surface { width, height })?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(data.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }
        Ok(Self { pixmap, source: None })
    }

    /// Attach the locator the image was loaded from.
    #[must_use]
    pub fn with_source(mut self, locator: impl Into<String>) -> Self {
        self.source = Some(locator.into());
        self
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Where the image came from, when known.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Borrow the premultiplied pixels for drawing.
    #[must_use]
    pub fn pixels(&self) -> PixmapRef<'_> {
        self.pixmap.as_ref()
    }
}
