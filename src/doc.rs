//! Scene model: placed objects, their paint order, and the selection.
//!
//! A [`Scene`] is an ordered list of [`PlacedObject`]s. Vector order is paint
//! order: the last element is drawn last, so it is visually topmost and wins
//! hit-tests. At most one object is selected; the selection is held as an
//! [`ObjectId`] and always names an object still present in the list.
//!
//! Mutations arrive from the input engine. The renderer reads
//! [`Scene::objects`] to determine draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use uuid::Uuid;

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_X, DEFAULT_Y, MIN_SIZE};
use crate::hit::{self, Handle, Point};
use crate::sprite::SpriteImage;

/// Unique identifier for a placed object.
pub type ObjectId = Uuid;

/// One image instance on the scene.
#[derive(Debug, Clone)]
pub struct PlacedObject {
    /// Identity used by the selection.
    pub id: ObjectId,
    /// Decoded raster drawn into the bounding box.
    pub image: SpriteImage,
    /// Left edge of the bounding box in scene coordinates.
    pub x: f64,
    /// Top edge of the bounding box in scene coordinates.
    pub y: f64,
    /// Width of the bounding box; at least [`MIN_SIZE`] after any resize.
    pub width: f64,
    /// Height of the bounding box; at least [`MIN_SIZE`] after any resize.
    pub height: f64,
    /// Clockwise rotation in degrees around the box center. Never normalized.
    pub rotation: f64,
}

impl PlacedObject {
    /// Place `image` with the stock defaults (150, 150, 100×100, unrotated).
    #[must_use]
    pub fn new(image: SpriteImage) -> Self {
        Self::with_bounds(image, DEFAULT_X, DEFAULT_Y, DEFAULT_WIDTH, DEFAULT_HEIGHT, 0.0)
    }

    #[must_use]
    pub fn with_bounds(image: SpriteImage, x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self { id: Uuid::new_v4(), image, x, y, width, height, rotation }
    }

    /// Center of the unrotated bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the object so its center sits on `pt`.
    pub fn center_on(&mut self, pt: Point) {
        self.x = pt.x - self.width / 2.0;
        self.y = pt.y - self.height / 2.0;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn rotate_by(&mut self, degrees: f64) {
        self.rotation += degrees;
    }

    /// Drag `handle` to `pt`, keeping the opposite corner where it is.
    ///
    /// Bounds are read and written on the object itself, so each call is
    /// absolute to the cursor rather than a delta. Width and height are then
    /// clamped to [`MIN_SIZE`] without moving the anchor back, which makes
    /// the anchored corner jump once the cursor crosses the minimum.
    pub fn resize_from(&mut self, handle: Handle, pt: Point) {
        match handle {
            Handle::TopLeft => {
                self.width += self.x - pt.x;
                self.height += self.y - pt.y;
                self.x = pt.x;
                self.y = pt.y;
            }
            Handle::TopRight => {
                self.width = pt.x - self.x;
                self.height += self.y - pt.y;
                self.y = pt.y;
            }
            Handle::BottomLeft => {
                self.width += self.x - pt.x;
                self.height = pt.y - self.y;
                self.x = pt.x;
            }
            Handle::BottomRight => {
                self.width = pt.x - self.x;
                self.height = pt.y - self.y;
            }
        }
        self.width = self.width.max(MIN_SIZE);
        self.height = self.height.max(MIN_SIZE);
    }
}

/// Ordered list of placed objects plus the current selection.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<PlacedObject>,
    selected: Option<ObjectId>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `image` at the default placement and select it.
    pub fn add_object(&mut self, image: SpriteImage) -> ObjectId {
        self.push(PlacedObject::new(image))
    }

    /// Append an already-placed object on top and select it.
    pub fn push(&mut self, obj: PlacedObject) -> ObjectId {
        let id = obj.id;
        self.objects.push(obj);
        self.selected = Some(id);
        tracing::debug!(%id, count = self.objects.len(), "object added");
        id
    }

    /// Remove the selected object, if any, and clear the selection.
    pub fn delete_selected(&mut self) -> Option<PlacedObject> {
        let id = self.selected.take()?;
        let idx = self.index_of(&id)?;
        let removed = self.objects.remove(idx);
        tracing::debug!(%id, count = self.objects.len(), "object deleted");
        Some(removed)
    }

    /// Move the object to the top of the paint order and select it.
    ///
    /// Returns `false` (and leaves the scene untouched) for an unknown id.
    pub fn bring_to_front(&mut self, id: &ObjectId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        if idx + 1 != self.objects.len() {
            let obj = self.objects.remove(idx);
            self.objects.push(obj);
        }
        self.selected = Some(*id);
        true
    }

    /// Remove every object and clear the selection.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.selected = None;
        tracing::debug!("scene cleared");
    }

    /// Select `id`, or clear the selection with `None`. Unknown ids clear it.
    pub fn select(&mut self, id: Option<ObjectId>) {
        self.selected = id.filter(|id| self.index_of(id).is_some());
    }

    /// The topmost object whose interior contains `pt`.
    #[must_use]
    pub fn topmost_at(&self, pt: Point) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .find(|obj| hit::is_inside(pt, obj))
            .map(|obj| obj.id)
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&PlacedObject> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut PlacedObject> {
        let id = self.selected?;
        self.get_mut(&id)
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.objects.iter().find(|obj| obj.id == *id)
    }

    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|obj| obj.id == *id)
    }

    /// Objects in paint order (bottom first).
    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Ids in paint order (bottom first).
    #[must_use]
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.iter().map(|obj| obj.id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn index_of(&self, id: &ObjectId) -> Option<usize> {
        self.objects.iter().position(|obj| obj.id == *id)
    }
}
