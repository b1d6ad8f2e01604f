//! Simple modal overlay: one dismissible frame per call.
//!
//! This is the degraded path used when floating windows are disabled. Each
//! call stacks a new, independent overlay; overlays do not know about each
//! other and are dismissed one at a time.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlIFrameElement};

use crate::dom;
use crate::error::SiteError;
use crate::listener;

/// Element tree of one modal overlay.
pub struct ModalParts {
    pub overlay: HtmlElement,
    pub close: HtmlElement,
    pub frame: HtmlIFrameElement,
}

/// Build (but do not attach) the overlay markup for `page_url`.
///
/// ```text
/// .modal-overlay
///   .modal-window
///     .modal-header  > .modal-title (url) + .modal-close
///     .modal-content > iframe[src=url]
/// ```
pub fn build_modal(document: &Document, page_url: &str) -> Result<ModalParts, SiteError> {
    let overlay = dom::create(document, "div", "modal-overlay")?;
    let window = dom::create(document, "div", "modal-window")?;

    let header = dom::create(document, "div", "modal-header")?;
    let title = dom::create(document, "span", "modal-title")?;
    title.set_text_content(Some(page_url));
    let close = dom::create(document, "button", "modal-close")?;
    close.set_text_content(Some("×"));
    header.append_child(&title)?;
    header.append_child(&close)?;

    let content = dom::create(document, "div", "modal-content")?;
    let frame = embed_frame(document, page_url)?;
    content.append_child(&frame)?;

    window.append_child(&header)?;
    window.append_child(&content)?;
    overlay.append_child(&window)?;
    Ok(ModalParts { overlay, close, frame })
}

/// An `iframe` displaying `page_url`, shared by the modal and floating windows.
pub fn embed_frame(document: &Document, page_url: &str) -> Result<HtmlIFrameElement, SiteError> {
    let frame = document
        .create_element("iframe")?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|_| SiteError::UnexpectedNode("HtmlIFrameElement"))?;
    frame.set_src(page_url);
    frame.set_attribute("frameborder", "0")?;
    Ok(frame)
}

struct OpenModal {
    overlay: HtmlElement,
    listeners: Vec<EventListener>,
}

#[derive(Default)]
struct Modals {
    open: HashMap<u64, OpenModal>,
}

impl Modals {
    fn dismiss(&mut self, key: u64) {
        let Some(modal) = self.open.remove(&key) else {
            return;
        };
        modal.overlay.remove();
        listener::release(modal.listeners);
        log::debug!("modal {key} dismissed");
    }
}

/// Opens pages in stacked modal overlays.
pub struct ModalStack {
    document: Document,
    modals: Rc<RefCell<Modals>>,
    next_key: Cell<u64>,
}

impl ModalStack {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document, modals: Rc::default(), next_key: Cell::new(0) }
    }

    /// Number of overlays currently on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modals.borrow().open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Show `page_url` in a new overlay and return the overlay element.
    pub fn open_modal(&self, page_url: &str) -> Result<HtmlElement, SiteError> {
        let parts = build_modal(&self.document, page_url)?;
        let key = self.next_key.get() + 1;
        self.next_key.set(key);

        let weak = Rc::downgrade(&self.modals);
        let on_close = EventListener::new(&parts.close, "click", dismiss_handler(&weak, key));
        let backdrop = parts.overlay.clone();
        let on_backdrop = {
            let weak = weak.clone();
            EventListener::new(&parts.overlay, "click", move |ev: &Event| {
                // Only clicks on the backdrop itself, not bubbled from the window.
                let on_backdrop = ev
                    .target()
                    .is_some_and(|t| t.dyn_ref::<HtmlElement>().is_some_and(|el| *el == backdrop));
                if on_backdrop {
                    dismiss(&weak, key);
                }
            })
        };

        dom::body(&self.document)?.append_child(&parts.overlay)?;
        self.modals
            .borrow_mut()
            .open
            .insert(key, OpenModal { overlay: parts.overlay.clone(), listeners: vec![on_close, on_backdrop] });
        log::debug!("modal {key} opened for {page_url}");
        Ok(parts.overlay)
    }

    /// Remove every overlay and its listeners.
    pub fn clear(&self) {
        let keys: Vec<u64> = self.modals.borrow().open.keys().copied().collect();
        let mut modals = self.modals.borrow_mut();
        for key in keys {
            modals.dismiss(key);
        }
    }
}

fn dismiss(weak: &Weak<RefCell<Modals>>, key: u64) {
    if let Some(modals) = weak.upgrade() {
        modals.borrow_mut().dismiss(key);
    }
}

fn dismiss_handler(weak: &Weak<RefCell<Modals>>, key: u64) -> impl FnMut(&Event) + 'static {
    let weak = weak.clone();
    move |_: &Event| dismiss(&weak, key)
}
