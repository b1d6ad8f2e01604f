//! One way to "open this page", two implementations.
//!
//! Map buttons and the exported `openModal` call only [`PageOpener::open`].
//! [`select_opener`] decides once, at mount time, whether pages appear in
//! floating windows or in the simple modal overlay.

use std::rc::Rc;

use viewer::window::WindowOptions;
use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::modal::ModalStack;
use crate::windows::DomWindowManager;

/// Which implementation is serving page-open requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenerKind {
    Simple,
    Windowed,
}

/// Display a page somewhere the user can dismiss it.
pub trait PageOpener {
    fn open(&self, page_url: &str) -> Result<(), SiteError>;

    fn kind(&self) -> OpenerKind;

    /// Remove everything this opener put on the page.
    fn clear(&self);
}

impl PageOpener for ModalStack {
    fn open(&self, page_url: &str) -> Result<(), SiteError> {
        log::warn!("opening {page_url} in fallback modal");
        self.open_modal(page_url).map(|_| ())
    }

    fn kind(&self) -> OpenerKind {
        OpenerKind::Simple
    }

    fn clear(&self) {
        ModalStack::clear(self);
    }
}

impl PageOpener for DomWindowManager {
    fn open(&self, page_url: &str) -> Result<(), SiteError> {
        self.create_window(page_url, WindowOptions::default()).map(|_| ())
    }

    fn kind(&self) -> OpenerKind {
        OpenerKind::Windowed
    }

    fn clear(&self) {
        DomWindowManager::clear(self);
    }
}

/// Pick the richest opener the page supports.
///
/// Floating windows need the viewport size; if windows are disabled in the
/// configuration or the manager cannot start, pages fall back to the simple
/// modal and a warning is logged.
#[must_use]
pub fn select_opener(window: &Window, document: &Document, config: &SiteConfig) -> Rc<dyn PageOpener> {
    if config.windowed {
        match DomWindowManager::new(window, document.clone(), config.window) {
            Ok(manager) => return Rc::new(manager),
            Err(err) => log::warn!("window manager unavailable ({err}), using fallback modal"),
        }
    } else {
        log::warn!("floating windows disabled, using fallback modal");
    }
    Rc::new(ModalStack::new(document.clone()))
}
