//! Window records: identity, geometry, flags, and resize handles.
//!
//! A [`WindowRecord`] is the manager's bookkeeping entry for one floating
//! window. The DOM element tree that displays it belongs to the host and is
//! keyed by the same [`WindowId`].

#[cfg(test)]
#[path = "window_test.rs"]
mod window_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_LEFT, DEFAULT_WINDOW_TOP, DEFAULT_WINDOW_WIDTH};
use crate::geom::WindowRect;

/// Unique window identifier. Allocated from a monotonic counter, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// Initial geometry for a new window. Absent fields take the preset defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl WindowOptions {
    /// Resolve against the preset defaults.
    #[must_use]
    pub fn rect(&self) -> WindowRect {
        WindowRect {
            left: self.left.unwrap_or(DEFAULT_WINDOW_LEFT),
            top: self.top.unwrap_or(DEFAULT_WINDOW_TOP),
            width: self.width.unwrap_or(DEFAULT_WINDOW_WIDTH),
            height: self.height.unwrap_or(DEFAULT_WINDOW_HEIGHT),
        }
    }

    /// Fill unset fields from `fallback`.
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
            left: self.left.or(fallback.left),
            top: self.top.or(fallback.top),
        }
    }
}

/// Compass position of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl ResizeHandle {
    /// All handles, in the order they are attached to a window.
    pub const ALL: [Self; 8] = [Self::N, Self::Ne, Self::E, Self::Se, Self::S, Self::Sw, Self::W, Self::Nw];

    /// Direction tag used in class names and `data-direction` (`"n"`, `"ne"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
        }
    }

    /// Parse a direction tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str() == tag)
    }

    /// Which window edges this handle moves.
    #[must_use]
    pub fn edges(self) -> Edges {
        let tag = self.as_str();
        Edges {
            north: tag.contains('n'),
            east: tag.contains('e'),
            south: tag.contains('s'),
            west: tag.contains('w'),
        }
    }
}

/// Set of window edges affected by a resize.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

/// Manager bookkeeping for one floating window.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: WindowId,
    /// Page displayed in the window's content frame.
    pub url: String,
    /// Header title derived from `url`.
    pub title: String,
    pub rect: WindowRect,
    pub z_index: i64,
    pub is_maximized: bool,
    pub is_minimized: bool,
    /// Pre-maximize geometry. Only set while maximized.
    pub original_bounds: Option<WindowRect>,
    pub is_dragging: bool,
    pub is_resizing: bool,
}

impl WindowRecord {
    #[must_use]
    pub fn new(id: WindowId, url: &str, rect: WindowRect, z_index: i64) -> Self {
        Self {
            id,
            url: url.to_string(),
            title: page_title(url).to_string(),
            rect,
            z_index,
            is_maximized: false,
            is_minimized: false,
            original_bounds: None,
            is_dragging: false,
            is_resizing: false,
        }
    }
}

/// Window title for a page URL: the last path segment, or `"Window"` when empty.
#[must_use]
pub fn page_title(url: &str) -> &str {
    match url.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "Window",
    }
}
