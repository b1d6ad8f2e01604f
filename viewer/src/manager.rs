//! Floating window manager core.
//!
//! `WindowManager` owns every [`WindowRecord`], the z-index and id counters,
//! the focused window, and the single in-flight pointer gesture. It never
//! touches the DOM: each mutating call returns the [`Action`]s the host must
//! apply to keep the page in sync.
//!
//! Gestures are explicit state. Starting a drag or resize emits
//! [`Action::GestureStarted`]; every way a gesture can finish (pointer-up, the
//! window closing or minimizing mid-gesture, another gesture replacing it)
//! emits exactly one matching [`Action::GestureEnded`]. Hosts that attach
//! document-level move/up listeners on start and release them on end can
//! therefore never leak a listener.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use crate::consts::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, Z_INDEX_BASE};
use crate::geom::{Point, Size, WindowRect};
use crate::window::{ResizeHandle, WindowId, WindowOptions, WindowRecord};

/// Actions returned from manager operations for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Geometry of a window changed.
    GeometryChanged { id: WindowId, rect: WindowRect },
    /// A window moved in the stacking order.
    ZIndexChanged { id: WindowId, z_index: i64 },
    /// A window should no longer be displayed.
    WindowHidden { id: WindowId },
    /// A window was dropped; its DOM subtree should be removed.
    WindowClosed { id: WindowId },
    /// A drag or resize began; the host should start tracking the pointer.
    GestureStarted { id: WindowId },
    /// The active gesture finished; the host should stop tracking the pointer.
    GestureEnded { id: WindowId },
}

/// The pointer gesture currently driving a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Moving a window by its header.
    Dragging {
        id: WindowId,
        /// Pointer position minus the window origin at pointer-down.
        offset: Point,
    },
    /// Resizing a window by one of its handles.
    Resizing {
        id: WindowId,
        handle: ResizeHandle,
        /// Pointer position at pointer-down.
        start_pointer: Point,
        /// Window geometry at pointer-down.
        start_rect: WindowRect,
    },
}

impl Gesture {
    #[must_use]
    pub fn window_id(&self) -> WindowId {
        match self {
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => *id,
        }
    }
}

/// Bookkeeping for all floating windows on the page.
#[derive(Debug, Clone)]
pub struct WindowManager {
    windows: Vec<WindowRecord>,
    z_index: i64,
    id_counter: u64,
    focused: Option<WindowId>,
    viewport: Size,
    gesture: Option<Gesture>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            z_index: Z_INDEX_BASE,
            id_counter: 0,
            focused: None,
            viewport: Size::default(),
            gesture: None,
        }
    }
}

impl WindowManager {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self { viewport, ..Self::default() }
    }

    // --- Queries ---

    /// Live windows in creation order.
    #[must_use]
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    #[must_use]
    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The most recently assigned z-index.
    #[must_use]
    pub fn top_z_index(&self) -> i64 {
        self.z_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    fn next_z_index(&mut self) -> i64 {
        self.z_index += 1;
        self.z_index
    }

    // --- Lifecycle ---

    /// Register a new window on top of the stack and focus it.
    pub fn create_window(&mut self, url: &str, options: WindowOptions) -> WindowId {
        self.id_counter += 1;
        let id = WindowId(self.id_counter);
        let z_index = self.next_z_index();
        self.windows.push(WindowRecord::new(id, url, options.rect(), z_index));
        self.focused = Some(id);
        id
    }

    /// Drop a window. Focus falls back to the most recently created survivor.
    pub fn close_window(&mut self, id: WindowId) -> Vec<Action> {
        let Some(pos) = self.windows.iter().position(|w| w.id == id) else {
            return Vec::new();
        };
        let mut actions = self.cancel_gesture_on(id);
        self.windows.remove(pos);
        actions.push(Action::WindowClosed { id });
        if self.focused == Some(id) {
            self.focused = self.windows.last().map(|w| w.id);
        }
        actions
    }

    /// Hide a window. It stays registered; there is no un-minimize.
    pub fn minimize_window(&mut self, id: WindowId) -> Vec<Action> {
        if self.window(id).is_none() {
            return Vec::new();
        }
        let mut actions = self.cancel_gesture_on(id);
        if let Some(w) = self.window_mut(id) {
            w.is_minimized = true;
            actions.push(Action::WindowHidden { id });
        }
        actions
    }

    /// Raise a window to the top and make it the focused window.
    pub fn focus_window(&mut self, id: WindowId) -> Vec<Action> {
        if self.window(id).is_none() {
            return Vec::new();
        }
        let z_index = self.next_z_index();
        if let Some(w) = self.window_mut(id) {
            w.z_index = z_index;
        }
        self.focused = Some(id);
        vec![Action::ZIndexChanged { id, z_index }]
    }

    // --- Maximize / restore ---

    pub fn toggle_maximize(&mut self, id: WindowId) -> Vec<Action> {
        match self.window(id) {
            Some(w) if w.is_maximized => self.restore_window(id),
            Some(_) => self.maximize_window(id),
            None => Vec::new(),
        }
    }

    /// Fill the viewport, remembering the current geometry once per cycle.
    pub fn maximize_window(&mut self, id: WindowId) -> Vec<Action> {
        let full = WindowRect::filling(self.viewport);
        let Some(w) = self.window_mut(id) else {
            return Vec::new();
        };
        if w.original_bounds.is_none() {
            w.original_bounds = Some(w.rect);
        }
        w.rect = full;
        w.is_maximized = true;
        vec![Action::GeometryChanged { id, rect: full }]
    }

    /// Return to the remembered geometry, if any, and clear the maximized flag.
    pub fn restore_window(&mut self, id: WindowId) -> Vec<Action> {
        let Some(w) = self.window_mut(id) else {
            return Vec::new();
        };
        w.is_maximized = false;
        match w.original_bounds.take() {
            Some(rect) => {
                w.rect = rect;
                vec![Action::GeometryChanged { id, rect }]
            }
            None => Vec::new(),
        }
    }

    /// Record a new viewport size and refit maximized windows to it.
    pub fn set_viewport(&mut self, viewport: Size) -> Vec<Action> {
        self.viewport = viewport;
        let full = WindowRect::filling(viewport);
        self.windows
            .iter_mut()
            .filter(|w| w.is_maximized)
            .map(|w| {
                w.rect = full;
                Action::GeometryChanged { id: w.id, rect: full }
            })
            .collect()
    }

    // --- Gestures ---

    /// Start moving a window by its header. Ignored while maximized.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> Vec<Action> {
        let Some(origin) = self.window(id).filter(|w| !w.is_maximized).map(|w| w.rect.origin()) else {
            return Vec::new();
        };
        let mut actions = self.end_gesture();
        actions.extend(self.focus_window(id));
        if let Some(w) = self.window_mut(id) {
            w.is_dragging = true;
        }
        let offset = Point::new(pointer.x - origin.x, pointer.y - origin.y);
        self.gesture = Some(Gesture::Dragging { id, offset });
        actions.push(Action::GestureStarted { id });
        actions
    }

    /// Start resizing a window from `handle`. Ignored while maximized.
    pub fn begin_resize(&mut self, id: WindowId, handle: ResizeHandle, pointer: Point) -> Vec<Action> {
        let Some(start_rect) = self.window(id).filter(|w| !w.is_maximized).map(|w| w.rect) else {
            return Vec::new();
        };
        let mut actions = self.end_gesture();
        actions.extend(self.focus_window(id));
        if let Some(w) = self.window_mut(id) {
            w.is_resizing = true;
        }
        self.gesture = Some(Gesture::Resizing { id, handle, start_pointer: pointer, start_rect });
        actions.push(Action::GestureStarted { id });
        actions
    }

    /// Advance the active gesture to `pointer`.
    pub fn pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        let Some(gesture) = self.gesture else {
            return Vec::new();
        };
        let id = gesture.window_id();
        let Some(w) = self.window_mut(id) else {
            return Vec::new();
        };
        w.rect = match gesture {
            Gesture::Dragging { offset, .. } => WindowRect {
                left: (pointer.x - offset.x).max(0.0),
                top: (pointer.y - offset.y).max(0.0),
                ..w.rect
            },
            Gesture::Resizing { handle, start_pointer, start_rect, .. } => {
                resized(start_rect, handle, pointer.x - start_pointer.x, pointer.y - start_pointer.y)
            }
        };
        vec![Action::GeometryChanged { id, rect: w.rect }]
    }

    /// Finish the active gesture, if any.
    pub fn pointer_up(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        let Some(gesture) = self.gesture.take() else {
            return Vec::new();
        };
        let id = gesture.window_id();
        if let Some(w) = self.window_mut(id) {
            w.is_dragging = false;
            w.is_resizing = false;
        }
        vec![Action::GestureEnded { id }]
    }

    fn cancel_gesture_on(&mut self, id: WindowId) -> Vec<Action> {
        if self.gesture.is_some_and(|g| g.window_id() == id) { self.end_gesture() } else { Vec::new() }
    }
}

/// Apply a resize delta from `handle` to `start`.
///
/// Width and height are floored at the window minimums; left/top keep
/// tracking the pointer even once the size is floored.
#[must_use]
pub fn resized(start: WindowRect, handle: ResizeHandle, dx: f64, dy: f64) -> WindowRect {
    let edges = handle.edges();
    let mut rect = start;
    if edges.east {
        rect.width = start.width + dx;
    }
    if edges.west {
        rect.width = start.width - dx;
        rect.left = start.left + dx;
    }
    if edges.south {
        rect.height = start.height + dy;
    }
    if edges.north {
        rect.height = start.height - dy;
        rect.top = start.top + dy;
    }
    rect.width = rect.width.max(MIN_WINDOW_WIDTH);
    rect.height = rect.height.max(MIN_WINDOW_HEIGHT);
    rect
}
