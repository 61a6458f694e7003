//! Shared numeric constants for the canvas crate.

// ── Geometry ────────────────────────────────────────────────────

/// Smallest width or height an object may be resized to, in scene units.
pub const MIN_SIZE: f64 = 20.0;

/// Side length of a resize handle square, in scene units.
pub const CONTROL_SIZE: f64 = 16.0;

// ── Placement defaults ──────────────────────────────────────────

/// Default left edge for a newly added object.
pub const DEFAULT_X: f64 = 150.0;

/// Default top edge for a newly added object.
pub const DEFAULT_Y: f64 = 150.0;

/// Default width for a newly added object.
pub const DEFAULT_WIDTH: f64 = 100.0;

/// Default height for a newly added object.
pub const DEFAULT_HEIGHT: f64 = 100.0;

// ── Commands ────────────────────────────────────────────────────

/// Degrees added per rotate command.
pub const ROTATE_STEP_DEG: f64 = 15.0;

/// Scene units moved per arrow-key press.
pub const NUDGE_STEP: f64 = 5.0;
