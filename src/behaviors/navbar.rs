//! Navbar background and shadow driven by scroll position.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

use super::Page;
use crate::error::BindError;
use crate::state::scroll::{NavbarStyle, ScrollState};
use crate::util::dom;
use crate::util::listener::Listener;

pub struct Navbar {
    state: Rc<RefCell<ScrollState>>,
    _listener: Listener,
}

impl Navbar {
    /// # Errors
    ///
    /// Fails if the navbar element is missing.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let navbar: HtmlElement = dom::required(&page.document, &page.config.selectors.navbar)?;
        let state = Rc::new(RefCell::new(ScrollState::default()));
        let threshold = page.config.navbar_threshold;

        let listener = {
            let (state, window) = (Rc::clone(&state), page.window.clone());
            Listener::attach(&page.window, "scroll", move |_| {
                let style = state.borrow_mut().update(dom::scroll_offset(&window), threshold);
                apply(&navbar, style);
            })?
        };
        Ok(Self { state, _listener: listener })
    }

    /// Offset seen by the most recent scroll event.
    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.state.borrow().last_offset()
    }
}

fn apply(navbar: &HtmlElement, style: NavbarStyle) {
    dom::set_style(navbar, "background-color", style.background);
    dom::set_style(navbar, "box-shadow", style.box_shadow);
}
