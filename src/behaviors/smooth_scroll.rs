//! Smooth scrolling for in-page anchors.

use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::Page;
use crate::error::BindError;
use crate::state::nav::fragment_id;
use crate::util::dom;
use crate::util::listener::Listener;

pub struct SmoothScroll {
    _listeners: Vec<Listener>,
}

impl SmoothScroll {
    /// Intercept clicks on every `#fragment` anchor.
    ///
    /// # Errors
    ///
    /// Fails only if the anchor selector is invalid.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let anchors: Vec<Element> = dom::all(&page.document, &page.config.selectors.in_page_anchor)?;
        let listeners = anchors
            .iter()
            .map(|anchor| {
                let (anchor_el, document) = (anchor.clone(), page.document.clone());
                Listener::attach(anchor, "click", move |event| {
                    event.prevent_default();
                    if let Some(href) = anchor_el.get_attribute("href") {
                        scroll_to(&document, &href);
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { _listeners: listeners })
    }
}

/// Scroll the element named by `href` into view. Unknown targets are a no-op.
fn scroll_to(document: &Document, href: &str) {
    let Some(target) = fragment_id(href).and_then(|id| document.get_element_by_id(id)) else {
        log::debug!("no scroll target for {href}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
