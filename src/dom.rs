//! Thin `web_sys` helpers shared by every component.
//!
//! Nothing here holds state. Fallible calls return [`SiteError`] so callers
//! can propagate with `?` and decide at the event-handler boundary whether a
//! failure is worth a log line.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use viewer::geom::{Point, Size, WindowRect};
use viewer::transform::Transform;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, MouseEvent, NodeList, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingGlobal("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::MissingGlobal("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, SiteError> {
    document.body().ok_or(SiteError::MissingGlobal("document.body"))
}

/// Create an `HtmlElement` of `tag` carrying `class`.
pub fn create(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, SiteError> {
    let el = document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::UnexpectedNode("HtmlElement"))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Every element in a `NodeList`, skipping non-element nodes.
#[must_use]
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn as_html(el: Element) -> Result<HtmlElement, SiteError> {
    el.dyn_into::<HtmlElement>().map_err(|_| SiteError::UnexpectedNode("HtmlElement"))
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), SiteError> {
    el.style().set_property(property, value)?;
    Ok(())
}

pub fn set_px(el: &HtmlElement, property: &str, value: f64) -> Result<(), SiteError> {
    set_style(el, property, &format!("{value}px"))
}

/// Write a window rectangle to an absolutely positioned element.
pub fn apply_rect(el: &HtmlElement, rect: WindowRect) -> Result<(), SiteError> {
    set_px(el, "left", rect.left)?;
    set_px(el, "top", rect.top)?;
    set_px(el, "width", rect.width)?;
    set_px(el, "height", rect.height)
}

/// Paint a pan/zoom transform onto a map image.
pub fn apply_transform(el: &HtmlElement, transform: &Transform) -> Result<(), SiteError> {
    set_style(el, "transform", &transform.to_css())
}

#[must_use]
pub fn client_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Rendered size of an element.
#[must_use]
pub fn element_size(el: &Element) -> Size {
    let rect = el.get_bounding_client_rect();
    Size::new(rect.width(), rect.height())
}

/// Pixel size of a map image: natural size when loaded, else the computed CSS size.
#[must_use]
pub fn image_size(image: &Element) -> Size {
    if let Some(img) = image.dyn_ref::<HtmlImageElement>() {
        if img.natural_width() > 0 && img.natural_height() > 0 {
            return Size::new(f64::from(img.natural_width()), f64::from(img.natural_height()));
        }
    }
    let Some(window) = web_sys::window() else {
        return Size::default();
    };
    let Ok(Some(style)) = window.get_computed_style(image) else {
        return Size::default();
    };
    let px = |property: &str| style.get_property_value(property).map_or(0.0, |v| parse_px(&v));
    Size::new(px("width"), px("height"))
}

/// Parse a CSS pixel length such as `"640px"` or `"12.5px"`. Anything else is 0.
#[must_use]
pub fn parse_px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").trim().parse().unwrap_or(0.0)
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<Size, SiteError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Size::new(width, height))
}
