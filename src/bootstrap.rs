//! Page start-up: logo, gallery, maps, and the page opener.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, ScrollBehavior, ScrollToOptions, WheelEvent, Window};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::SiteError;
use crate::listener;
use crate::maps::{self, MapView};
use crate::opener::{PageOpener, select_opener};

pub const LOGO_ID: &str = "logo";
pub const GALLERY_ID: &str = "gallery";

/// Everything wired onto the page by [`mount`].
pub struct Mounted {
    pub opener: Rc<dyn PageOpener>,
    pub maps: Vec<MapView>,
    pub listeners: Vec<EventListener>,
}

/// Run `ready` once the document has been parsed.
///
/// Runs immediately when parsing is already done, otherwise on
/// `DOMContentLoaded`.
pub fn when_ready<F>(document: &Document, ready: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() == "loading" {
        EventListener::once(document, "DOMContentLoaded", move |_: &Event| ready()).forget();
    } else {
        ready();
    }
}

/// Wire the page. Missing optional elements are logged and skipped.
pub fn mount(window: &Window, document: &Document, config: &SiteConfig) -> Result<Mounted, SiteError> {
    let mut listeners = Vec::new();
    if let Some(logo) = logo(window, document)? {
        listeners.push(logo);
    }
    if let Some(gallery) = gallery(document) {
        listeners.push(gallery);
    }

    let opener = select_opener(window, document, config);
    let maps = maps::attach_all(document, &opener, &config.nav_roles);
    log::info!("site mounted: {:?} opener, {} map(s)", opener.kind(), maps.len());
    Ok(Mounted { opener, maps, listeners })
}

/// Clicking the logo scrolls smoothly back to the top.
fn logo(window: &Window, document: &Document) -> Result<Option<EventListener>, SiteError> {
    let Some(logo) = document.get_element_by_id(LOGO_ID) else {
        log::error!("#{LOGO_ID} not found, scroll-to-top disabled");
        return Ok(None);
    };
    let logo = dom::as_html(logo)?;
    dom::set_style(&logo, "cursor", "pointer")?;

    let (win, doc) = (window.clone(), document.clone());
    Ok(Some(listener::active(&logo, "click", move |ev: &Event| {
        ev.prevent_default();
        scroll_to_top(&win, &doc);
    })))
}

fn scroll_to_top(window: &Window, document: &Document) {
    if let Some(body) = document.body() {
        body.set_scroll_top(0);
    }
    if let Some(root) = document.document_element() {
        root.set_scroll_top(0);
    }
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Vertical wheel movement over the gallery scrolls it horizontally.
fn gallery(document: &Document) -> Option<EventListener> {
    let Some(gallery) = document.get_element_by_id(GALLERY_ID) else {
        log::debug!("no #{GALLERY_ID} on this page");
        return None;
    };
    let target = gallery.clone();
    Some(listener::active(&gallery, "wheel", move |ev: &Event| {
        let Some(wheel) = ev.dyn_ref::<WheelEvent>() else {
            return;
        };
        // Sub-pixel deltas keep their native behavior.
        let Some(step) = gallery_step(wheel.delta_y()) else {
            return;
        };
        ev.prevent_default();
        target.set_scroll_left(target.scroll_left().saturating_add(step));
    }))
}

/// Horizontal scroll for a vertical wheel delta, or `None` when it rounds
/// to no movement.
#[must_use]
pub fn gallery_step(delta_y: f64) -> Option<i32> {
    Some(horizontal_step(delta_y)).filter(|&step| step != 0)
}

/// Whole-pixel horizontal scroll for a vertical wheel delta.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn horizontal_step(delta_y: f64) -> i32 {
    delta_y.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
