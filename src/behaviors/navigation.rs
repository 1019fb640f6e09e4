//! Mobile menu toggle.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use super::Page;
use crate::consts::CLASS_ACTIVE;
use crate::error::BindError;
use crate::state::nav::NavMenuState;
use crate::util::dom;
use crate::util::listener::Listener;

pub struct Navigation {
    _listeners: Vec<Listener>,
}

impl Navigation {
    /// Bind the hamburger control and every nav link.
    ///
    /// # Errors
    ///
    /// Fails if the hamburger or the nav menu is missing.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let selectors = &page.config.selectors;
        let hamburger: Element = dom::required(&page.document, &selectors.hamburger)?;
        let menu: Element = dom::required(&page.document, &selectors.nav_menu)?;
        let links: Vec<Element> = dom::all(&page.document, &selectors.nav_link)?;
        let state = Rc::new(RefCell::new(NavMenuState::default()));

        let mut listeners = Vec::with_capacity(links.len() + 1);
        listeners.push({
            let (state, hamburger_el, menu) = (Rc::clone(&state), hamburger.clone(), menu.clone());
            Listener::attach(&hamburger, "click", move |_| {
                let open = state.borrow_mut().toggle();
                render(&hamburger_el, &menu, open);
            })?
        });

        for link in &links {
            let (state, hamburger, menu) = (Rc::clone(&state), hamburger.clone(), menu.clone());
            listeners.push(Listener::attach(link, "click", move |_| {
                state.borrow_mut().close();
                render(&hamburger, &menu, false);
            })?);
        }

        log::debug!("navigation bound to {} links", links.len());
        Ok(Self { _listeners: listeners })
    }
}

fn render(hamburger: &Element, menu: &Element, open: bool) {
    dom::set_class(hamburger, CLASS_ACTIVE, open);
    dom::set_class(menu, CLASS_ACTIVE, open);
}
