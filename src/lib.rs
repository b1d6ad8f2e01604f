//! # mapsite
//!
//! Browser runtime for the map showcase site. Compiled to WASM and loaded by
//! every page of the static site.
//!
//! The interaction logic (pan/zoom math, window stacking, navigation paths)
//! lives in the browser-free [`viewer`] crate. This crate owns the DOM side:
//!
//! | Module      | Purpose                                                 |
//! |-------------|---------------------------------------------------------|
//! | `bootstrap` | Logo scroll-to-top, gallery wheel, mount sequence       |
//! | `config`    | `#site-config` JSON block                               |
//! | `dom`       | Stateless `web_sys` helpers                             |
//! | `error`     | [`SiteError`](error::SiteError)                         |
//! | `listener`  | Non-passive listeners and deferred release              |
//! | `maps`      | Pan/zoom containers and navigation buttons              |
//! | `modal`     | Simple stacked modal overlay                            |
//! | `opener`    | `PageOpener` trait and capability check                 |
//! | `windows`   | Floating window manager host                            |
//!
//! The page wires itself on `DOMContentLoaded`. JavaScript that needs the
//! [`Site`] (to open pages or tear down before replacing content) claims it
//! once with [`mount`] and must keep the returned handle.

pub mod bootstrap;
pub mod config;
pub mod dom;
pub mod error;
pub mod listener;
pub mod maps;
pub mod modal;
pub mod opener;
pub mod windows;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::maps::MapView;
use crate::opener::{OpenerKind, PageOpener};

/// Who owns the page's [`Site`].
enum PageSlot {
    /// Not mounted yet.
    Waiting,
    /// Mounted on DOM ready and held here until JavaScript claims it.
    Parked(Site),
    /// Handed to JavaScript by [`mount`].
    Claimed,
}

thread_local! {
    static PAGE: RefCell<PageSlot> = const { RefCell::new(PageSlot::Waiting) };
}

/// Install the panic hook and mount the page once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Ok(document) = dom::document() {
        bootstrap::when_ready(&document, park_page);
    }
}

fn park_page() {
    PAGE.with(|slot| {
        let mut slot = slot.borrow_mut();
        if !matches!(*slot, PageSlot::Waiting) {
            return;
        }
        match mount_page() {
            Ok(site) => *slot = PageSlot::Parked(site),
            Err(err) => log::error!("page not mounted: {err}"),
        }
    });
}

/// Claim the page's [`Site`].
///
/// The page mounts itself on DOM ready; this hands that instance to
/// JavaScript, mounting first if that has not happened yet. Only one caller
/// gets it: later calls fail with [`SiteError::AlreadyMounted`].
#[wasm_bindgen]
pub fn mount() -> Result<Site, JsValue> {
    let slot = PAGE.with(|slot| std::mem::replace(&mut *slot.borrow_mut(), PageSlot::Claimed));
    match slot {
        PageSlot::Parked(site) => Ok(site),
        PageSlot::Claimed => Err(SiteError::AlreadyMounted.into()),
        PageSlot::Waiting => mount_page().map_err(|err| {
            PAGE.with(|slot| *slot.borrow_mut() = PageSlot::Waiting);
            err.into()
        }),
    }
}

/// Read configuration, start logging, and wire the current page.
fn mount_page() -> Result<Site, SiteError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let (config, config_err) = match SiteConfig::read(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    if console_log::init_with_level(config.level()).is_err() {
        log::debug!("logger already installed");
    }
    if let Some(err) = config_err {
        log::error!("{err}; using defaults");
    }

    Ok(bootstrap::mount(&window, &document, &config)?.into())
}

/// A mounted page. Dropping or tearing it down detaches every listener.
#[wasm_bindgen]
pub struct Site {
    opener: Rc<dyn PageOpener>,
    maps: Vec<MapView>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl Site {
    /// Open `page_url` with whichever opener the page selected.
    #[wasm_bindgen(js_name = openModal)]
    pub fn open_modal(&self, page_url: &str) -> Result<(), JsValue> {
        self.opener.open(page_url).map_err(JsValue::from)
    }

    /// `true` when pages open in floating windows.
    #[wasm_bindgen(getter)]
    pub fn windowed(&self) -> bool {
        self.opener.kind() == OpenerKind::Windowed
    }

    #[wasm_bindgen(getter, js_name = mapCount)]
    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    /// Close every window or modal and detach all page listeners.
    pub fn teardown(self) {
        self.opener.clear();
        let listeners = self.maps.iter().map(MapView::listener_count).sum::<usize>() + self.listeners.len();
        log::info!("site torn down, {listeners} listener(s) released");
    }
}

impl Site {
    #[must_use]
    pub fn opener(&self) -> &Rc<dyn PageOpener> {
        &self.opener
    }

    #[must_use]
    pub fn maps(&self) -> &[MapView] {
        &self.maps
    }
}

impl From<bootstrap::Mounted> for Site {
    fn from(mounted: bootstrap::Mounted) -> Self {
        Self { opener: mounted.opener, maps: mounted.maps, listeners: mounted.listeners }
    }
}

/// Wire the current page with an explicit configuration, skipping
/// `#site-config` and logger setup.
pub fn mount_with(config: &SiteConfig) -> Result<Site, SiteError> {
    let window = dom::window()?;
    let document = dom::document()?;
    Ok(bootstrap::mount(&window, &document, config)?.into())
}
