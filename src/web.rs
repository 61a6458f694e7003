//! `wasm_bindgen` surface for the host page.
//!
//! The page owns the DOM chrome (toolbar, material panel, file input) and
//! forwards events here. Everything else happens in Rust: the [`Editor`]
//! holds the engine and the material catalog, loads images asynchronously
//! and drives export.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::HtmlCanvasElement;

use crate::catalog::Catalog;
use crate::config::EditorConfig;
use crate::engine::Engine;
use crate::error::EditorError;
use crate::export;
use crate::hit::Point;
use crate::input::{InputEvent, Key};
use crate::loader::{self, BrowserFetcher};
use crate::sprite::SpriteImage;

/// Install the panic hook and route `log`/`tracing` output to the console.
fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        tracing::debug!("console logger already installed");
    }
}

/// The editor bound to one canvas element.
#[wasm_bindgen]
pub struct Editor {
    engine: Rc<RefCell<Engine>>,
    catalog: Catalog,
}

#[wasm_bindgen]
impl Editor {
    /// Bind to the canvas with id `canvas_id`. `config_json` may override any
    /// subset of [`EditorConfig`].
    ///
    /// # Errors
    ///
    /// Fails when the canvas is missing, the config is malformed, or the
    /// surface cannot be created.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<Editor, EditorError> {
        init_logging();

        let config = match config_json.as_deref() {
            Some(json) => EditorConfig::from_json(json)?,
            None => EditorConfig::default(),
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| EditorError::Js("no document".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| EditorError::Js(format!("no element with id {canvas_id}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EditorError::Js(format!("{canvas_id} is not a canvas")))?;

        tracing::info!(canvas_id, width = config.width, height = config.height, "editor created");
        let mut engine = Engine::new(canvas, config)?;
        engine.render()?;
        Ok(Self { engine: Rc::new(RefCell::new(engine)), catalog: Catalog::builtin() })
    }

    // --- Pointer and keyboard ---

    /// # Errors
    ///
    /// Returns `Err` if redrawing the canvas fails.
    pub fn pointer_down(&self, x: f64, y: f64) -> Result<(), EditorError> {
        self.dispatch(InputEvent::PointerDown(Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing the canvas fails.
    pub fn pointer_move(&self, x: f64, y: f64) -> Result<(), EditorError> {
        self.dispatch(InputEvent::PointerMove(Point::new(x, y)))
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing the canvas fails.
    pub fn pointer_up(&self) -> Result<(), EditorError> {
        self.dispatch(InputEvent::PointerUp)
    }

    /// Forward a `KeyboardEvent.key` value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if redrawing the canvas fails.
    pub fn key_down(&self, key: &str) -> Result<(), EditorError> {
        self.dispatch(InputEvent::KeyDown(Key::from(key)))
    }

    // --- Toolbar ---

    /// # Errors
    ///
    /// Returns `Err` if redrawing the canvas fails.
    pub fn rotate(&self) -> Result<(), EditorError> {
        self.dispatch(InputEvent::Rotate)
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing the canvas fails.
    pub fn clear(&self) -> Result<(), EditorError> {
        self.dispatch(InputEvent::Clear)
    }

    // --- Materials ---

    /// Category names for the material panel.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories().into_iter().map(str::to_owned).collect()
    }

    /// Image locators offered under `category`.
    #[must_use]
    pub fn materials(&self, category: &str) -> Vec<String> {
        self.catalog.materials(category).to_vec()
    }

    /// Notice for the material panel when `category` offers nothing.
    #[must_use]
    pub fn empty_message(&self, category: &str) -> Option<String> {
        self.catalog.empty_message(category).map(str::to_owned)
    }

    /// Replace the built-in catalog with a `{"category": ["locator", ...]}` object.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the JSON does not have that shape.
    pub fn set_catalog(&mut self, json: &str) -> Result<(), EditorError> {
        self.catalog = Catalog::from_json(json)?;
        tracing::info!(categories = self.catalog.len(), "catalog replaced");
        Ok(())
    }

    /// Load the image at `locator` (relative or `data:` URL) and place it.
    ///
    /// The returned promise resolves once the object is on the canvas and
    /// rejects if loading fails, in which case the scene is unchanged.
    pub fn add_material(&self, locator: String) -> js_sys::Promise {
        let engine = Rc::clone(&self.engine);
        future_to_promise(async move {
            let image = loader::load_image(&BrowserFetcher, &locator).await?;
            engine.borrow_mut().add_image(image)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Decode uploaded file bytes and place them as a new object.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the bytes are not a supported image.
    pub fn import_image(&self, bytes: &[u8]) -> Result<(), EditorError> {
        let image = match SpriteImage::decode(bytes) {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!(bytes = bytes.len(), error = %e, "uploaded image rejected");
                return Err(e);
            }
        };
        self.engine.borrow_mut().add_image(image)?;
        Ok(())
    }

    // --- Export ---

    /// PNG bytes of the current composite.
    ///
    /// # Errors
    ///
    /// Returns `Err` if encoding fails.
    pub fn export_png(&self) -> Result<Vec<u8>, EditorError> {
        export::snapshot_png(&self.engine.borrow().core)
    }

    /// Save the composite through the browser's download mechanism.
    ///
    /// # Errors
    ///
    /// Returns `Err` if encoding or a DOM call fails.
    pub fn download(&self) -> Result<(), EditorError> {
        let engine = self.engine.borrow();
        let bytes = export::snapshot_png(&engine.core)?;
        export::download_png(&bytes, &engine.core.config.export_file_name)
    }

    /// Hand the composite to the platform share sheet. The outcome is logged.
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the snapshot cannot be encoded.
    pub fn share(&self) -> Result<(), EditorError> {
        let (bytes, config) = {
            let engine = self.engine.borrow();
            (export::snapshot_png(&engine.core)?, engine.core.config.clone())
        };
        spawn_local(async move {
            match export::share_png(&bytes, &config).await {
                Ok(()) => {}
                Err(EditorError::ShareUnsupported) => tracing::info!("file sharing unsupported"),
                Err(e) => tracing::warn!(error = %e, "share failed"),
            }
        });
        Ok(())
    }

    /// Register `callback(kind, id)` for scene changes (`object-added`,
    /// `object-updated`, `object-deleted`, `selection-changed`). Pass
    /// `undefined` to unregister.
    pub fn set_on_change(&self, callback: Option<js_sys::Function>) {
        self.engine.borrow_mut().set_on_change(callback);
    }

    // --- Queries ---

    /// CSS cursor for the last pointer position.
    #[must_use]
    pub fn cursor(&self) -> String {
        self.engine.borrow().core.cursor.css().to_owned()
    }

    #[must_use]
    pub fn object_count(&self) -> usize {
        self.engine.borrow().core.scene.len()
    }

    /// Id of the selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<String> {
        self.engine.borrow().selection().map(|id| id.to_string())
    }
}

impl Editor {
    fn dispatch(&self, event: InputEvent) -> Result<(), EditorError> {
        self.engine.borrow_mut().dispatch(event)?;
        Ok(())
    }
}
