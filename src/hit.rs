//! Hit-testing: pure geometry over a pointer position and an object's bounds.
//!
//! Handles sit on the corners of the *unrotated* bounding box even when the
//! object is drawn rotated. Interior and handle tests use strict inequalities,
//! so points exactly on an edge miss.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::CONTROL_SIZE;
use crate::doc::PlacedObject;
use crate::input::Cursor;

/// A point in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Corner resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Handle {
    /// All handles in hit-test priority order.
    pub const ALL: [Handle; 4] = [Handle::TopLeft, Handle::TopRight, Handle::BottomLeft, Handle::BottomRight];

    /// Kebab-case name, as shown in gesture logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

/// True iff `pt` lies strictly inside the object's bounding box.
#[must_use]
pub fn is_inside(pt: Point, obj: &PlacedObject) -> bool {
    pt.x > obj.x && pt.x < obj.x + obj.width && pt.y > obj.y && pt.y < obj.y + obj.height
}

/// The four corner handles, in [`Handle::ALL`] order.
#[must_use]
pub fn resize_handles(obj: &PlacedObject) -> [(Handle, Point); 4] {
    let right = obj.x + obj.width;
    let bottom = obj.y + obj.height;
    [
        (Handle::TopLeft, Point::new(obj.x, obj.y)),
        (Handle::TopRight, Point::new(right, obj.y)),
        (Handle::BottomLeft, Point::new(obj.x, bottom)),
        (Handle::BottomRight, Point::new(right, bottom)),
    ]
}

/// True iff `pt` lies strictly inside a `CONTROL_SIZE` square centered on any handle.
#[must_use]
pub fn is_inside_handle(pt: Point, obj: &PlacedObject) -> bool {
    let half = CONTROL_SIZE / 2.0;
    resize_handles(obj).iter().any(|(_, c)| {
        pt.x > c.x - half && pt.x < c.x + half && pt.y > c.y - half && pt.y < c.y + half
    })
}

/// Which handle `pt` grabs, if any.
///
/// Each axis is compared independently against the full `CONTROL_SIZE`, so
/// the grab zone is wider than the drawn square. The first match in
/// [`Handle::ALL`] order wins.
#[must_use]
pub fn handle_direction(pt: Point, obj: &PlacedObject) -> Option<Handle> {
    resize_handles(obj)
        .into_iter()
        .find(|(_, c)| (pt.x - c.x).abs() < CONTROL_SIZE && (pt.y - c.y).abs() < CONTROL_SIZE)
        .map(|(handle, _)| handle)
}

/// Pointer affordance for hovering `pt`, relative to the selected object.
#[must_use]
pub fn cursor_for(pt: Point, selected: Option<&PlacedObject>) -> Cursor {
    match selected {
        Some(obj) if is_inside_handle(pt, obj) => Cursor::Resize,
        Some(obj) if is_inside(pt, obj) => Cursor::Move,
        _ => Cursor::Default,
    }
}
