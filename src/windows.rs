//! DOM host for the floating window manager.
//!
//! [`viewer::manager::WindowManager`] decides what happens; this module builds
//! the window markup, forwards pointer events into the manager, and applies
//! the returned [`Action`]s to the page.
//!
//! Listener ownership:
//! - per-window listeners live in that window's [`DomWindow`] and are
//!   released when the manager reports [`Action::WindowClosed`];
//! - document-level `mousemove`/`mouseup` listeners exist only between
//!   [`Action::GestureStarted`] and [`Action::GestureEnded`];
//! - closures hold a `Weak` handle to the host so they never keep it alive.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use viewer::manager::{Action, WindowManager};
use viewer::window::{ResizeHandle, WindowId, WindowOptions, WindowRecord};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent, Window};

use crate::dom;
use crate::error::SiteError;
use crate::listener;
use crate::modal::embed_frame;

/// Markup and listeners for one live window.
struct DomWindow {
    overlay: HtmlElement,
    container: HtmlElement,
    listeners: Vec<EventListener>,
}

struct Host {
    core: WindowManager,
    document: Document,
    defaults: WindowOptions,
    windows: HashMap<WindowId, DomWindow>,
    gesture: Vec<EventListener>,
    viewport_listener: Option<EventListener>,
}

impl Host {
    fn apply(&mut self, weak: &Weak<RefCell<Host>>, actions: Vec<Action>) {
        for action in actions {
            if let Err(err) = self.apply_one(weak, &action) {
                log::error!("failed to apply {action:?}: {err}");
            }
        }
    }

    fn apply_one(&mut self, weak: &Weak<RefCell<Host>>, action: &Action) -> Result<(), SiteError> {
        match *action {
            Action::GeometryChanged { id, rect } => {
                if let Some(w) = self.windows.get(&id) {
                    dom::apply_rect(&w.container, rect)?;
                }
            }
            Action::ZIndexChanged { id, z_index } => {
                if let Some(w) = self.windows.get(&id) {
                    dom::set_style(&w.container, "z-index", &z_index.to_string())?;
                }
            }
            Action::WindowHidden { id } => {
                if let Some(w) = self.windows.get(&id) {
                    dom::set_style(&w.overlay, "display", "none")?;
                }
            }
            Action::WindowClosed { id } => {
                if let Some(w) = self.windows.remove(&id) {
                    w.overlay.remove();
                    listener::release(w.listeners);
                    log::debug!("{id} closed");
                }
            }
            Action::GestureStarted { id } => {
                listener::release(std::mem::take(&mut self.gesture));
                self.gesture = gesture_listeners(&self.document, weak);
                log::trace!("{id} gesture started");
            }
            Action::GestureEnded { id } => {
                listener::release(std::mem::take(&mut self.gesture));
                log::trace!("{id} gesture ended");
            }
        }
        Ok(())
    }
}

/// Run `op` against the manager core and apply whatever it returns.
fn dispatch<F>(weak: &Weak<RefCell<Host>>, op: F)
where
    F: FnOnce(&mut WindowManager) -> Vec<Action>,
{
    let Some(host) = weak.upgrade() else {
        return;
    };
    let mut host = host.borrow_mut();
    let actions = op(&mut host.core);
    host.apply(weak, actions);
}

/// Handler that forwards a mouse event's client position into the manager.
fn on_mouse<F>(weak: &Weak<RefCell<Host>>, op: F) -> impl FnMut(&Event) + 'static
where
    F: Fn(&mut WindowManager, viewer::geom::Point) -> Vec<Action> + 'static,
{
    let weak = weak.clone();
    move |ev: &Event| {
        let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
            return;
        };
        let pointer = dom::client_point(mouse);
        dispatch(&weak, |core| op(core, pointer));
    }
}

/// Handler that runs a manager operation for `id`, ignoring the event.
fn on_window<F>(weak: &Weak<RefCell<Host>>, id: WindowId, op: F) -> impl FnMut(&Event) + 'static
where
    F: Fn(&mut WindowManager, WindowId) -> Vec<Action> + 'static,
{
    let weak = weak.clone();
    move |_: &Event| dispatch(&weak, |core| op(core, id))
}

fn gesture_listeners(document: &Document, weak: &Weak<RefCell<Host>>) -> Vec<EventListener> {
    vec![
        EventListener::new(document, "mousemove", on_mouse(weak, |core, p| core.pointer_move(p))),
        EventListener::new(document, "mouseup", on_mouse(weak, |core, _| core.pointer_up())),
    ]
}

/// Window markup for `record`:
///
/// ```text
/// .window-overlay#window-N
///   .window-container
///     .window-header  > .window-title + .window-controls (_ □ ×)
///     .window-content > iframe
///     .resize-handle.resize-{n,ne,e,se,s,sw,w,nw}
/// ```
struct Markup {
    overlay: HtmlElement,
    container: HtmlElement,
    header: HtmlElement,
    minimize: HtmlElement,
    maximize: HtmlElement,
    close: HtmlElement,
    handles: Vec<(ResizeHandle, HtmlElement)>,
}

fn build_window(document: &Document, record: &WindowRecord) -> Result<Markup, SiteError> {
    let overlay = dom::create(document, "div", "window-overlay")?;
    overlay.set_id(&record.id.to_string());
    let container = dom::create(document, "div", "window-container")?;
    dom::apply_rect(&container, record.rect)?;
    dom::set_style(&container, "z-index", &record.z_index.to_string())?;

    let header = dom::create(document, "div", "window-header")?;
    let title = dom::create(document, "span", "window-title")?;
    title.set_text_content(Some(&record.title));
    let controls = dom::create(document, "div", "window-controls")?;
    let minimize = dom::create(document, "button", "window-minimize")?;
    minimize.set_text_content(Some("_"));
    let maximize = dom::create(document, "button", "window-maximize")?;
    maximize.set_text_content(Some("□"));
    let close = dom::create(document, "button", "window-close")?;
    close.set_text_content(Some("×"));
    controls.append_child(&minimize)?;
    controls.append_child(&maximize)?;
    controls.append_child(&close)?;
    header.append_child(&title)?;
    header.append_child(&controls)?;

    let content = dom::create(document, "div", "window-content")?;
    let frame = embed_frame(document, &record.url)?;
    content.append_child(&frame)?;

    container.append_child(&header)?;
    container.append_child(&content)?;

    let mut handles = Vec::with_capacity(ResizeHandle::ALL.len());
    for handle in ResizeHandle::ALL {
        let el = dom::create(document, "div", &format!("resize-handle resize-{}", handle.as_str()))?;
        el.set_attribute("data-direction", handle.as_str())?;
        container.append_child(&el)?;
        handles.push((handle, el));
    }

    overlay.append_child(&container)?;
    Ok(Markup { overlay, container, header, minimize, maximize, close, handles })
}

fn wire_window(markup: &Markup, id: WindowId, weak: &Weak<RefCell<Host>>) -> Vec<EventListener> {
    let mut listeners = vec![
        EventListener::new(&markup.minimize, "click", on_window(weak, id, WindowManager::minimize_window)),
        EventListener::new(&markup.maximize, "click", on_window(weak, id, WindowManager::toggle_maximize)),
        EventListener::new(&markup.close, "click", on_window(weak, id, WindowManager::close_window)),
        EventListener::new(&markup.header, "mousedown", on_mouse(weak, move |core, p| core.begin_drag(id, p))),
        EventListener::new(&markup.header, "dblclick", on_window(weak, id, WindowManager::toggle_maximize)),
        EventListener::new(&markup.overlay, "mousedown", on_window(weak, id, WindowManager::focus_window)),
    ];
    for (handle, el) in &markup.handles {
        let handle = *handle;
        listeners.push(EventListener::new(el, "mousedown", on_mouse(weak, move |core, p| core.begin_resize(id, handle, p))));
    }
    listeners
}

/// Build, wire, and attach the markup for a freshly registered window.
fn mount_window(host: &Host, id: WindowId, weak: &Weak<RefCell<Host>>) -> Result<DomWindow, SiteError> {
    let record = host.core.window(id).ok_or(SiteError::UnexpectedNode("window record"))?;
    let markup = build_window(&host.document, record)?;
    let listeners = wire_window(&markup, id, weak);
    dom::body(&host.document)?.append_child(&markup.overlay)?;
    Ok(DomWindow { overlay: markup.overlay, container: markup.container, listeners })
}

/// Floating windows backed by real DOM elements.
pub struct DomWindowManager {
    host: Rc<RefCell<Host>>,
}

impl DomWindowManager {
    /// Create a manager sized to the current viewport and track viewport resizes.
    pub fn new(window: &Window, document: Document, defaults: WindowOptions) -> Result<Self, SiteError> {
        let viewport = dom::viewport_size(window)?;
        let host = Rc::new(RefCell::new(Host {
            core: WindowManager::new(viewport),
            document,
            defaults,
            windows: HashMap::new(),
            gesture: Vec::new(),
            viewport_listener: None,
        }));

        let weak = Rc::downgrade(&host);
        let on_resize = {
            let win = window.clone();
            EventListener::new(window, "resize", move |_: &Event| match dom::viewport_size(&win) {
                Ok(size) => dispatch(&weak, |core| core.set_viewport(size)),
                Err(err) => log::warn!("viewport size unavailable: {err}"),
            })
        };
        host.borrow_mut().viewport_listener = Some(on_resize);
        Ok(Self { host })
    }

    /// Open `page_url` in a new focused window on top of the stack.
    pub fn create_window(&self, page_url: &str, options: WindowOptions) -> Result<WindowId, SiteError> {
        let weak = Rc::downgrade(&self.host);
        let mut host = self.host.borrow_mut();
        let options = options.or(host.defaults);
        let id = host.core.create_window(page_url, options);

        match mount_window(&host, id, &weak) {
            Ok(window) => {
                host.windows.insert(id, window);
            }
            Err(err) => {
                host.core.close_window(id);
                return Err(err);
            }
        }
        log::debug!("{id} opened for {page_url}");
        Ok(id)
    }

    pub fn close_window(&self, id: WindowId) {
        dispatch(&Rc::downgrade(&self.host), |core| core.close_window(id));
    }

    pub fn minimize_window(&self, id: WindowId) {
        dispatch(&Rc::downgrade(&self.host), |core| core.minimize_window(id));
    }

    pub fn toggle_maximize(&self, id: WindowId) {
        dispatch(&Rc::downgrade(&self.host), |core| core.toggle_maximize(id));
    }

    pub fn focus_window(&self, id: WindowId) {
        dispatch(&Rc::downgrade(&self.host), |core| core.focus_window(id));
    }

    #[must_use]
    pub fn focused(&self) -> Option<WindowId> {
        self.host.borrow().core.focused()
    }

    /// Whether document-level pointer listeners are attached for a drag or resize.
    #[must_use]
    pub fn tracking_pointer(&self) -> bool {
        !self.host.borrow().gesture.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.host.borrow().core.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close every window and drop all listeners.
    pub fn clear(&self) {
        let ids: Vec<WindowId> = self.host.borrow().core.windows().iter().map(|w| w.id).collect();
        for id in ids {
            self.close_window(id);
        }
        self.host.borrow_mut().viewport_listener = None;
    }
}
