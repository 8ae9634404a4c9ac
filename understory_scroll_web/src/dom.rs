// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};
use understory_scroll_geometry::{GeometrySample, LayoutSource};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Window};

use crate::coords::{document_offset, inset_scroll};

const LOG_TARGET: &str = "scroll_snooper";

fn root_element(window: &Window) -> Option<Element> {
    window.document()?.document_element()
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Size of the window's viewport.
///
/// Uses `innerWidth`/`innerHeight`, falling back per axis to the root
/// element's client size when the window reports zero or nothing.
pub fn viewport(window: &Window) -> Size {
    let root = root_element(window);
    let width = positive(window.inner_width().ok().and_then(|v| v.as_f64()))
        .or_else(|| root.as_ref().map(|e| f64::from(e.client_width())))
        .unwrap_or(0.0);
    let height = positive(window.inner_height().ok().and_then(|v| v.as_f64()))
        .or_else(|| root.as_ref().map(|e| f64::from(e.client_height())))
        .unwrap_or(0.0);
    Size::new(width, height)
}

fn page_offset(window: &Window) -> Vec2 {
    let x = window.scroll_x().unwrap_or(0.0);
    let y = window.scroll_y().unwrap_or(0.0);
    Vec2::new(x, y)
}

/// Document scroll offset of the window.
///
/// The root element's client border (`clientLeft`/`clientTop`) is subtracted
/// from `pageXOffset`/`pageYOffset`.
pub fn scroll_offset(window: &Window) -> Vec2 {
    let inset = root_element(window)
        .map(|e| Vec2::new(f64::from(e.client_left()), f64::from(e.client_top())))
        .unwrap_or(Vec2::ZERO);
    inset_scroll(page_offset(window), inset)
}

/// Offset of `element` from the document origin.
///
/// This is the bounding client rect plus the raw page offset, so unlike
/// [`scroll_offset`] it keeps the root element's client border.
/// Elements with no client rects (detached, or `display: none`) report the
/// origin.
pub fn element_offset(element: &Element) -> Vec2 {
    if element.get_client_rects().length() == 0 {
        return Vec2::ZERO;
    }
    let rect = element.get_bounding_client_rect();
    let page = element
        .owner_document()
        .and_then(|doc| doc.default_view())
        .map(|window| page_offset(&window))
        .unwrap_or(Vec2::ZERO);
    document_offset(Vec2::new(rect.x(), rect.y()), page)
}

/// A DOM element measured as a scroll target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementHandle {
    element: Element,
}

impl ElementHandle {
    /// Wraps `element`.
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// The wrapped element.
    pub fn element(&self) -> &Element {
        &self.element
    }

    fn size(&self) -> Size {
        match self.element.dyn_ref::<HtmlElement>() {
            Some(html) => Size::new(
                f64::from(html.offset_width()),
                f64::from(html.offset_height()),
            ),
            None => {
                let rect = self.element.get_bounding_client_rect();
                Size::new(rect.width(), rect.height())
            }
        }
    }
}

impl From<Element> for ElementHandle {
    fn from(element: Element) -> Self {
        Self::new(element)
    }
}

impl LayoutSource for ElementHandle {
    /// Document-space rectangle, or `None` once the element has left the document.
    fn layout_rect(&self) -> Option<Rect> {
        if !self.element.is_connected() {
            return None;
        }
        let origin = element_offset(&self.element).to_point();
        Some(Rect::from_origin_size(origin, self.size()))
    }
}

/// Resolves a script value to an element handle.
///
/// Accepts an `Element` directly, or an array-like wrapper (a jQuery object,
/// a `NodeList`, an `Array`) whose first item is an element.
pub fn to_element_handle(value: &JsValue) -> Option<ElementHandle> {
    if let Some(element) = value.dyn_ref::<Element>() {
        return Some(ElementHandle::new(element.clone()));
    }
    if value.is_object()
        && let Ok(first) = js_sys::Reflect::get(value, &JsValue::from(0))
        && let Ok(element) = first.dyn_into::<Element>()
    {
        return Some(ElementHandle::new(element));
    }
    log::debug!(target: LOG_TARGET, "value is neither an element nor an element wrapper");
    None
}

/// Measures the viewport, scroll offset and every target for one tick.
pub fn sample(window: &Window, targets: &[ElementHandle]) -> GeometrySample {
    GeometrySample::from_sources(viewport(window), scroll_offset(window), targets)
}

