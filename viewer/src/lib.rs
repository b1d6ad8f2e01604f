//! Interaction core for the map site.
//!
//! This crate holds every piece of page behavior that can be expressed without
//! a browser: pan/zoom math for map images, the navigation-target scheme for
//! map buttons, and the floating window manager's bookkeeping. The `mapsite`
//! host crate measures the DOM, feeds events in, and applies the returned
//! [`manager::Action`]s and [`transform::Transform`]s back to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | Points, sizes, window rectangles, and pan-clamping bounds |
//! | [`transform`] | Scale-then-translate visual transform |
//! | [`pan_zoom`] | Per-container wheel-zoom / drag-pan state machine |
//! | [`nav`] | Map groups, button roles, and target page paths |
//! | [`window`] | Window records, options, and resize handles |
//! | [`manager`] | Floating window manager core and its host actions |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod consts;
pub mod geom;
pub mod manager;
pub mod nav;
pub mod pan_zoom;
pub mod transform;
pub mod window;
