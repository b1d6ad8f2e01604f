//! Interactive map containers.
//!
//! Every `.map-image-container` with a `.map-image` child gets its own
//! [`PanZoom`] state and listeners. Drag tracking listens on the document so
//! a fast drag that leaves the container is not lost. Navigation buttons open
//! `page/grpNN/pageX.html` through the shared [`PageOpener`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use viewer::geom::Point;
use viewer::nav::{MapGroup, NavRoleMap, page_path};
use viewer::pan_zoom::PanZoom;
use viewer::transform::Transform;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, WheelEvent};

use crate::dom;
use crate::error::SiteError;
use crate::listener;
use crate::opener::PageOpener;

pub const CONTAINER_SELECTOR: &str = ".map-image-container";
pub const IMAGE_SELECTOR: &str = ".map-image";
pub const NAV_BUTTON_SELECTOR: &str = ".map-nav-btn";

/// Attribute carrying a navigation button's stable identifier.
pub const NAV_ID_ATTR: &str = "data-nav-id";

/// One wired map container. Dropping it detaches all of its listeners.
pub struct MapView {
    group: MapGroup,
    state: Rc<RefCell<PanZoom>>,
    listeners: Vec<EventListener>,
}

impl MapView {
    #[must_use]
    pub fn group(&self) -> MapGroup {
        self.group
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.borrow().scale()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Wire every map container in the document.
#[must_use]
pub fn attach_all(document: &Document, opener: &Rc<dyn PageOpener>, roles: &NavRoleMap) -> Vec<MapView> {
    let containers = match document.query_selector_all(CONTAINER_SELECTOR) {
        Ok(list) => dom::elements(&list),
        Err(err) => {
            log::error!("map container query failed: {err:?}");
            return Vec::new();
        }
    };
    let mut views = Vec::with_capacity(containers.len());
    for container in containers {
        match attach(document, &container, opener, roles) {
            Ok(Some(view)) => views.push(view),
            Ok(None) => {}
            Err(err) => log::error!("map container not wired: {err}"),
        }
    }
    log::info!("{} interactive map(s) ready", views.len());
    views
}

/// Group of a container, from the nearest numbered section around it.
#[must_use]
pub fn container_group(container: &Element) -> MapGroup {
    MapGroup::from_sections(|class| matches!(container.closest(&format!(".{class}")), Ok(Some(_))))
}

/// Stable identifier of a nav button: `data-nav-id`, else its `id`.
#[must_use]
pub fn button_id(button: &Element) -> Option<String> {
    button
        .get_attribute(NAV_ID_ATTR)
        .or_else(|| Some(button.id()))
        .filter(|id| !id.is_empty())
}

fn attach(
    document: &Document,
    container: &Element,
    opener: &Rc<dyn PageOpener>,
    roles: &NavRoleMap,
) -> Result<Option<MapView>, SiteError> {
    let Some(image) = container.query_selector(IMAGE_SELECTOR)? else {
        log::debug!("map container without {IMAGE_SELECTOR}, skipped");
        return Ok(None);
    };
    let image = dom::as_html(image)?;
    let container = dom::as_html(container.clone())?;
    let group = container_group(&container);

    let state = Rc::new(RefCell::new(PanZoom::new(dom::element_size(&container), dom::image_size(&image))));
    let mut listeners = nav_buttons(&container, group, opener, roles)?;

    listeners.push(listener::active(&container, "wheel", {
        let (state, container, image) = (state.clone(), container.clone(), image.clone());
        move |ev: &Event| {
            ev.prevent_default();
            let Some(wheel) = ev.dyn_ref::<WheelEvent>() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let cursor = Point::new(f64::from(wheel.client_x()) - rect.left(), f64::from(wheel.client_y()) - rect.top());
            let mut pz = state.borrow_mut();
            pz.set_geometry(dom::element_size(&container), dom::image_size(&image));
            if let Some(t) = pz.on_wheel(cursor, wheel.delta_y()) {
                paint(&image, &t);
            }
        }
    }));

    listeners.push(EventListener::new(&container, "mousedown", {
        let (state, container) = (state.clone(), container.clone());
        move |ev: &Event| {
            let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
                return;
            };
            state.borrow_mut().on_pointer_down(dom::client_point(mouse));
            set_cursor(&container, "grabbing");
        }
    }));

    listeners.push(EventListener::new(document, "mousemove", {
        let (state, container, image) = (state.clone(), container.clone(), image.clone());
        move |ev: &Event| {
            let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut pz = state.borrow_mut();
            if !pz.is_dragging() {
                return;
            }
            pz.set_geometry(dom::element_size(&container), dom::image_size(&image));
            if let Some(t) = pz.on_pointer_move(dom::client_point(mouse)) {
                paint(&image, &t);
            }
        }
    }));

    listeners.push(EventListener::new(document, "mouseup", {
        let (state, container) = (state.clone(), container.clone());
        move |_: &Event| {
            if state.borrow_mut().on_pointer_up() {
                set_cursor(&container, "grab");
            }
        }
    }));

    listeners.push(EventListener::new(&container, "dblclick", {
        let (state, image) = (state.clone(), image.clone());
        move |_: &Event| {
            let t = state.borrow_mut().on_double_click();
            paint(&image, &t);
        }
    }));

    log::debug!("map in group {group} wired with {} listener(s)", listeners.len());
    Ok(Some(MapView { group, state, listeners }))
}

fn nav_buttons(
    container: &HtmlElement,
    group: MapGroup,
    opener: &Rc<dyn PageOpener>,
    roles: &NavRoleMap,
) -> Result<Vec<EventListener>, SiteError> {
    let mut listeners = Vec::new();
    for button in dom::elements(&container.query_selector_all(NAV_BUTTON_SELECTOR)?) {
        let Some(id) = button_id(&button) else {
            log::warn!("nav button in group {group} has no {NAV_ID_ATTR} or id, ignored");
            continue;
        };
        let Some(role) = roles.role(&id) else {
            log::warn!("nav button {id:?} has no configured role, ignored");
            continue;
        };
        let path = page_path(group, role);
        let opener = Rc::clone(opener);
        listeners.push(listener::active(&button, "click", move |ev: &Event| {
            ev.stop_propagation();
            ev.prevent_default();
            log::info!("nav button {role} in group {group} opens {path}");
            if let Err(err) = opener.open(&path) {
                log::error!("failed to open {path}: {err}");
            }
        }));
    }
    Ok(listeners)
}

fn paint(image: &HtmlElement, transform: &Transform) {
    if let Err(err) = dom::apply_transform(image, transform) {
        log::error!("map transform not applied: {err}");
    }
}

fn set_cursor(container: &HtmlElement, cursor: &str) {
    if let Err(err) = dom::set_style(container, "cursor", cursor) {
        log::warn!("cursor not updated: {err}");
    }
}
