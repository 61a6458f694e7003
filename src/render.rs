//! Rendering: draws the full scene onto a raster surface.
//!
//! This module is the only place that paints pixels. It receives a read-only
//! view of the scene and produces the composite: every object in paint order,
//! rotated about its center, followed by the selection's resize handles. The
//! same surface backs the on-screen canvas and the exported PNG.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use tiny_skia::{Color, FilterQuality, Paint, Pixmap, PixmapPaint, Rect, Transform};

use crate::config::EditorConfig;
use crate::consts::CONTROL_SIZE;
use crate::doc::{PlacedObject, Scene};
use crate::error::EditorError;
use crate::hit;

/// Allocate a transparent surface of the configured size.
///
/// # Errors
///
/// Returns [`EditorError::Surface`] if either dimension is zero.
pub fn new_surface(config: &EditorConfig) -> Result<Pixmap, EditorError> {
    Pixmap::new(config.width, config.height).ok_or(EditorError::Surface {
        width: config.width,
        height: config.height,
    })
}

/// Draw the full scene: objects, then selection handles.
pub fn draw(surface: &mut Pixmap, scene: &Scene, config: &EditorConfig) {
    // Layer 1: clear.
    surface.fill(Color::TRANSPARENT);

    // Layer 2: objects in paint order (bottom first).
    for obj in scene.objects() {
        draw_object(surface, obj);
    }

    // Layer 3: selection handles.
    if let Some(obj) = scene.selected() {
        draw_controls(surface, obj, config.handle_color);
    }
}

/// Straight-alpha RGBA bytes of `surface`, as `ImageData` and PNG encoders expect.
#[must_use]
pub fn demultiplied_rgba(surface: &Pixmap) -> Vec<u8> {
    surface
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}

fn draw_object(surface: &mut Pixmap, obj: &PlacedObject) {
    let paint = PixmapPaint { quality: FilterQuality::Bilinear, ..PixmapPaint::default() };
    surface.draw_pixmap(0, 0, obj.image.pixels(), &paint, object_transform(obj), None);
}

/// Map image pixels into the object's box, rotated about the box center.
///
/// Equivalent to translate(center) · rotate(rotation) · translate(-w/2, -h/2)
/// · scale(w / image_w, h / image_h).
#[allow(clippy::cast_possible_truncation)]
fn object_transform(obj: &PlacedObject) -> Transform {
    let (sin, cos) = obj.rotation.to_radians().sin_cos();
    let sx = obj.width / f64::from(obj.image.width());
    let sy = obj.height / f64::from(obj.image.height());
    let c = obj.center();
    let hw = obj.width / 2.0;
    let hh = obj.height / 2.0;

    Transform::from_row(
        (cos * sx) as f32,
        (sin * sx) as f32,
        (-sin * sy) as f32,
        (cos * sy) as f32,
        (c.x - cos * hw + sin * hh) as f32,
        (c.y - sin * hw - cos * hh) as f32,
    )
}

#[allow(clippy::cast_possible_truncation)]
fn draw_controls(surface: &mut Pixmap, obj: &PlacedObject, color: [u8; 4]) {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], color[3]);
    paint.anti_alias = false;

    let half = CONTROL_SIZE / 2.0;
    for (_, c) in hit::resize_handles(obj) {
        let Some(rect) = Rect::from_xywh(
            (c.x - half) as f32,
            (c.y - half) as f32,
            CONTROL_SIZE as f32,
            CONTROL_SIZE as f32,
        ) else {
            continue;
        };
        surface.fill_rect(rect, &paint, Transform::identity(), None);
    }
}
