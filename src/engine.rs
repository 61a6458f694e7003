use js_sys::Function;
use tiny_skia::Pixmap;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::config::EditorConfig;
use crate::consts::ROTATE_STEP_DEG;
use crate::doc::{ObjectId, PlacedObject, Scene};
use crate::error::EditorError;
use crate::hit::{self, Point};
use crate::input::{Cursor, InputEvent, InputState, Key};
use crate::render;
use crate::sprite::SpriteImage;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectAdded(ObjectId),
    ObjectUpdated(ObjectId),
    ObjectDeleted(ObjectId),
    SelectionChanged(Option<ObjectId>),
    SetCursor(Cursor),
    RenderNeeded,
}

impl Action {
    /// Name and subject of a scene change reported to the host, `None` for
    /// actions the engine carries out itself.
    #[must_use]
    pub fn change(&self) -> Option<(&'static str, Option<ObjectId>)> {
        match self {
            Self::ObjectAdded(id) => Some(("object-added", Some(*id))),
            Self::ObjectUpdated(id) => Some(("object-updated", Some(*id))),
            Self::ObjectDeleted(id) => Some(("object-deleted", Some(*id))),
            Self::SelectionChanged(id) => Some(("selection-changed", *id)),
            Self::SetCursor(_) | Self::RenderNeeded => None,
        }
    }
}

/// Editor state and every rule that does not touch the canvas element.
///
/// Runs natively; `Engine` adds the browser canvas on top.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub input: InputState,
    pub cursor: Cursor,
    pub config: EditorConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Route one event to its handler.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerDown(pt) => self.on_pointer_down(pt),
            InputEvent::PointerMove(pt) => self.on_pointer_move(pt),
            InputEvent::PointerUp => self.on_pointer_up(),
            InputEvent::KeyDown(key) => self.on_key_down(&key),
            InputEvent::Rotate => self.rotate_selected(),
            InputEvent::Clear => self.clear(),
        }
    }

    // --- Data inputs ---

    /// Place a freshly loaded image at the default position and select it.
    pub fn add_image(&mut self, image: SpriteImage) -> Vec<Action> {
        self.add_object(PlacedObject::new(image))
    }

    /// Place an object with explicit bounds and select it.
    pub fn add_object(&mut self, obj: PlacedObject) -> Vec<Action> {
        let id = self.scene.push(obj);
        vec![Action::ObjectAdded(id), Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    /// Remove every object.
    pub fn clear(&mut self) -> Vec<Action> {
        let had_selection = self.scene.selected_id().is_some();
        self.scene.clear();
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        if had_selection {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Pointer ---

    /// Pick the topmost object under `pt` and start a drag or resize on it.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        let before = self.scene.selected_id();
        self.scene.select(None);
        self.input = InputState::Idle;

        if let Some(id) = self.scene.topmost_at(pt) {
            self.scene.bring_to_front(&id);
            if let Some(obj) = self.scene.selected() {
                if hit::is_inside_handle(pt, obj) {
                    if let Some(handle) = hit::handle_direction(pt, obj) {
                        self.input = InputState::Resizing(handle);
                    }
                } else if hit::is_inside(pt, obj) {
                    self.input = InputState::Dragging;
                }
            }
        }

        let after = self.scene.selected_id();
        tracing::debug!(x = pt.x, y = pt.y, selected = ?after, state = %self.input, "pointer down");

        let mut actions = Vec::new();
        if after != before {
            actions.push(Action::SelectionChanged(after));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Continue the active gesture, then refresh the hover cursor.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();

        let state = self.input;
        if let Some(obj) = self.scene.selected_mut() {
            match state {
                InputState::Resizing(handle) => obj.resize_from(handle, pt),
                InputState::Dragging => obj.center_on(pt),
                InputState::Idle => {}
            }
            if state != InputState::Idle {
                actions.push(Action::ObjectUpdated(obj.id));
                actions.push(Action::RenderNeeded);
            }
        }

        self.cursor = hit::cursor_for(pt, self.scene.selected());
        actions.push(Action::SetCursor(self.cursor));
        actions
    }

    /// End any gesture.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        Vec::new()
    }

    // --- Commands ---

    /// Rotate the selection clockwise by one step.
    pub fn rotate_selected(&mut self) -> Vec<Action> {
        let Some(obj) = self.scene.selected_mut() else {
            return Vec::new();
        };
        obj.rotate_by(ROTATE_STEP_DEG);
        tracing::debug!(id = %obj.id, rotation = obj.rotation, "object rotated");
        vec![Action::ObjectUpdated(obj.id), Action::RenderNeeded]
    }

    /// Delete the selection on Delete/Backspace; nudge it on arrow keys.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_delete() {
            let Some(removed) = self.scene.delete_selected() else {
                return Vec::new();
            };
            self.input = InputState::Idle;
            return vec![
                Action::ObjectDeleted(removed.id),
                Action::SelectionChanged(None),
                Action::RenderNeeded,
            ];
        }

        let Some((dx, dy)) = key.nudge() else {
            return Vec::new();
        };
        let Some(obj) = self.scene.selected_mut() else {
            return Vec::new();
        };
        obj.translate(dx, dy);
        vec![Action::ObjectUpdated(obj.id), Action::RenderNeeded]
    }

    // --- Rendering ---

    /// Draw the scene into an existing surface.
    pub fn render_into(&self, surface: &mut Pixmap) {
        render::draw(surface, &self.scene, &self.config);
    }

    /// Draw the scene into a fresh surface of the configured size.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Surface`] for a zero-sized configuration.
    pub fn snapshot(&self) -> Result<Pixmap, EditorError> {
        let mut surface = render::new_surface(&self.config)?;
        self.render_into(&mut surface);
        Ok(surface)
    }

    // --- Queries ---

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.scene.selected_id()
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&PlacedObject> {
        self.scene.get(id)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// The scene is rendered into an owned pixmap and then copied onto the
/// canvas with `putImageData`.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: Pixmap,
    on_change: Option<Function>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, resizing the
    /// element to the configured surface size.
    ///
    /// # Errors
    ///
    /// Fails if the canvas has no 2D context or the surface cannot be allocated.
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, EditorError> {
        let surface = render::new_surface(&config)?;
        canvas.set_width(config.width);
        canvas.set_height(config.height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| EditorError::Js("2d context unavailable".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EditorError::Js("2d context has unexpected type".into()))?;
        Ok(Self { canvas, ctx, surface, on_change: None, core: EngineCore::with_config(config) })
    }

    /// Feed one event through the core and carry out the resulting actions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails while rendering or updating the cursor.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<Vec<Action>, EditorError> {
        let actions = self.core.handle(event);
        self.apply(&actions)?;
        Ok(actions)
    }

    /// Add a loaded image and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the redraw fails.
    pub fn add_image(&mut self, image: SpriteImage) -> Result<Vec<Action>, EditorError> {
        let actions = self.core.add_image(image);
        self.apply(&actions)?;
        Ok(actions)
    }

    /// Call `listener(kind, id)` for every scene change; `id` is `null` when
    /// the selection is cleared.
    pub fn set_on_change(&mut self, listener: Option<Function>) {
        self.on_change = listener;
    }

    fn apply(&mut self, actions: &[Action]) -> Result<(), EditorError> {
        let mut render_needed = false;
        for action in actions {
            match action {
                Action::RenderNeeded => render_needed = true,
                Action::SetCursor(cursor) => self.canvas.style().set_property("cursor", cursor.css())?,
                _ => self.notify(action)?,
            }
        }
        if render_needed {
            self.render()?;
        }
        Ok(())
    }

    fn notify(&self, action: &Action) -> Result<(), EditorError> {
        let (Some(listener), Some((kind, id))) = (&self.on_change, action.change()) else {
            return Ok(());
        };
        let id = id.map_or(JsValue::NULL, |id| JsValue::from_str(&id.to_string()));
        listener.call2(&JsValue::NULL, &JsValue::from_str(kind), &id)?;
        Ok(())
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ImageData` construction or `putImageData` fails.
    pub fn render(&mut self) -> Result<(), EditorError> {
        self.core.render_into(&mut self.surface);
        let rgba = render::demultiplied_rgba(&self.surface);
        let image =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(rgba.as_slice()), self.surface.width(), self.surface.height())?;
        self.ctx.put_image_data(&image, 0.0, 0.0)?;
        Ok(())
    }

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.core.selection()
    }
}
