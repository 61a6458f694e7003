//! Sprite-compositing canvas engine for the avatar maker.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and also
//! builds natively so the whole editor can be exercised without a display.
//! It owns the scene of placed material images, turns raw pointer and key
//! events into scene mutations, hit-tests objects and their resize handles,
//! and renders the composite into a raster surface that can be exported as
//! PNG or shared. The host page is responsible only for the DOM chrome (tool
//! buttons, material panel, file input) and for forwarding events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Scene model: placed objects, paint order, selection |
//! | [`hit`] | Hit-testing against objects and their resize handles |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`render`] | Scene rendering onto a raster surface |
//! | [`sprite`] | Decoded, immutable material images |
//! | [`catalog`] | Material categories and their image locators |
//! | [`loader`] | Async image fetch + decode |
//! | [`export`] | PNG encoding, download and share |
//! | [`web`] | `wasm_bindgen` surface for the host page |
//! | [`config`] | Editor configuration |
//! | [`error`] | Error type for the collaborator boundary |
//! | [`consts`] | Shared numeric constants (minimum size, handle size, steps) |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod export;
pub mod hit;
pub mod input;
pub mod loader;
pub mod render;
pub mod sprite;
pub mod web;
