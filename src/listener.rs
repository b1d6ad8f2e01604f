//! DOM event subscriptions.
//!
//! Every listener is a [`gloo_events::EventListener`]: store it to keep the
//! handler attached, drop it to detach. gloo registers listeners as passive,
//! so handlers that call `prevent_default` go through [`active`].
//!
//! A closure must not be freed while it is executing. Handlers that end their
//! own subscription (a `mouseup` that finishes a drag, a close button that
//! tears down its window) hand the listeners to [`release`], which drops them
//! once the current event has finished.

use gloo_events::{EventListener, EventListenerOptions};
use web_sys::{Event, EventTarget};

/// Subscribe a handler that may cancel the event's default action.
pub fn active<F>(target: &EventTarget, event: &'static str, handler: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(target, event, EventListenerOptions::enable_prevent_default(), handler)
}

/// Drop `listeners` after the current event.
pub fn release(listeners: Vec<EventListener>) {
    if listeners.is_empty() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        drop(listeners);
    });
}
