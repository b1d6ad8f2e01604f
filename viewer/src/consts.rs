//! Shared numeric constants for the viewer crate.

// ── Pan / zoom ──────────────────────────────────────────────────

/// Smallest allowed map scale. At this scale panning is disabled.
pub const MIN_SCALE: f64 = 1.0;

/// Largest allowed map scale.
pub const MAX_SCALE: f64 = 3.0;

/// Scale multiplier for a wheel step toward the user (zoom in).
pub const ZOOM_IN_FACTOR: f64 = 1.05;

/// Scale multiplier for a wheel step away from the user (zoom out).
pub const ZOOM_OUT_FACTOR: f64 = 0.95;

/// Fraction of the raw cursor delta applied while drag-panning.
pub const PAN_DAMPING: f64 = 0.8;

// ── Windows ─────────────────────────────────────────────────────

/// Windows never shrink narrower than this, in CSS pixels.
pub const MIN_WINDOW_WIDTH: f64 = 300.0;

/// Windows never shrink shorter than this, in CSS pixels.
pub const MIN_WINDOW_HEIGHT: f64 = 200.0;

/// Default width of a newly created window.
pub const DEFAULT_WINDOW_WIDTH: f64 = 800.0;

/// Default height of a newly created window.
pub const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;

/// Default left offset of a newly created window.
pub const DEFAULT_WINDOW_LEFT: f64 = 50.0;

/// Default top offset of a newly created window.
pub const DEFAULT_WINDOW_TOP: f64 = 50.0;

/// Z-index counter start. The first window receives `Z_INDEX_BASE + 1`.
pub const Z_INDEX_BASE: i64 = 1000;
