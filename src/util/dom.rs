//! Element lookup and small DOM mutations.
//!
//! `required*` lookups fail with [`BindError`] so a behavior refuses to attach
//! when the page is missing a collaborator. `optional` lookups return `None`.
//! Mutation helpers run inside event callbacks, so they log instead of
//! returning errors.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::BindError;

/// The global window.
///
/// # Errors
///
/// Returns [`BindError::NoWindow`] outside a browser.
pub fn window() -> Result<Window, BindError> {
    web_sys::window().ok_or(BindError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// Returns [`BindError::NoDocument`] if the window has none.
pub fn document(window: &Window) -> Result<Document, BindError> {
    window.document().ok_or(BindError::NoDocument)
}

/// The document `<body>`.
///
/// # Errors
///
/// Returns [`BindError::NoBody`] before the body has been parsed.
pub fn body(document: &Document) -> Result<HtmlElement, BindError> {
    document.body().ok_or(BindError::NoBody)
}

/// First element matching `selector`, cast to `T`.
///
/// # Errors
///
/// Missing, invalid-selector, and wrong-type cases are all setup errors.
pub fn required<T: JsCast>(document: &Document, selector: &str) -> Result<T, BindError> {
    let element = document.query_selector(selector)?.ok_or_else(|| BindError::missing(selector))?;
    cast(element, selector)
}

/// Element with id `id`, cast to `T`.
///
/// # Errors
///
/// Returns [`BindError::MissingElement`] (as `#id`) or [`BindError::WrongElement`].
pub fn required_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, BindError> {
    let selector = format!("#{id}");
    let element = document.get_element_by_id(id).ok_or_else(|| BindError::missing(&selector))?;
    cast(element, &selector)
}

/// First element matching `selector`, if present and of type `T`.
pub fn optional<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    settle(document.query_selector(selector), selector)
}

/// First descendant of `scope` matching `selector`, if present and of type `T`.
pub fn optional_in<T: JsCast>(scope: &Element, selector: &str) -> Option<T> {
    settle(scope.query_selector(selector), selector)
}

/// Nearest ancestor of `element` (or itself) matching `selector`.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    settle(element.closest(selector), selector)
}

/// Element with id `id`, if present and of type `T`.
pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    settle(Ok(document.get_element_by_id(id)), &format!("#{id}"))
}

fn settle<T: JsCast>(lookup: Result<Option<Element>, JsValue>, selector: &str) -> Option<T> {
    match lookup {
        Ok(Some(element)) => {
            let found = downcast(element);
            if found.is_none() {
                log::debug!("optional element has the wrong type: {selector}");
            }
            found
        }
        Ok(None) => {
            log::debug!("optional element absent: {selector}");
            None
        }
        Err(err) => {
            log::warn!("lookup {selector} failed: {err:?}");
            None
        }
    }
}

fn downcast<T: JsCast>(value: impl JsCast) -> Option<T> {
    value.has_type::<T>().then(|| value.unchecked_into())
}

/// Every element matching `selector` that is a `T`, in document order.
///
/// # Errors
///
/// Returns [`BindError::Js`] for an invalid selector.
pub fn all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, BindError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(downcast::<T>)
        .collect())
}

fn cast<T: JsCast>(element: Element, selector: &str) -> Result<T, BindError> {
    element.dyn_into::<T>().map_err(|_| BindError::WrongElement {
        selector: selector.to_owned(),
        expected: std::any::type_name::<T>().rsplit("::").next().unwrap_or("element"),
    })
}

/// Add or remove a marker class.
pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("class {class} update failed: {err:?}");
    }
}

/// Set one inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("style {property} update failed: {err:?}");
    }
}

/// Current vertical scroll offset in CSS px.
#[must_use]
pub fn scroll_offset(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}
