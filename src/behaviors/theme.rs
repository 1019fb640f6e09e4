//! Theme toggle wiring.
//!
//! The startup theme is applied immediately in `attach`; the toggle button is
//! optional, and without it the theme simply never changes.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement};

use super::Page;
use crate::consts::{CLASS_LIGHT_THEME, PREFERS_LIGHT_QUERY};
use crate::error::BindError;
use crate::state::theme::{Theme, ThemeState};
use crate::util::dom;
use crate::util::listener::Listener;
use crate::util::storage::{LocalStore, prefers_color_scheme};

pub struct ThemeManager {
    state: Rc<RefCell<ThemeState<LocalStore>>>,
    _listener: Option<Listener>,
}

impl ThemeManager {
    /// # Errors
    ///
    /// Fails if the document has no body to carry the theme class.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let body = dom::body(&page.document)?;
        let button: Option<Element> = dom::optional(&page.document, &page.config.selectors.theme_toggle);

        let store = LocalStore::new(&page.window, &page.config.theme_storage_key);
        let state = ThemeState::load(store, prefers_color_scheme(&page.window, PREFERS_LIGHT_QUERY));
        log::info!("initial theme: {}", state.current());
        apply(&body, button.as_ref(), state.current());
        let state = Rc::new(RefCell::new(state));

        let listener = match &button {
            Some(el) => {
                let (state, button) = (Rc::clone(&state), el.clone());
                Some(Listener::attach(el, "click", move |_| {
                    let next = state.borrow_mut().toggle();
                    log::debug!("theme toggled to {next}");
                    apply(&body, Some(&button), next);
                })?)
            }
            None => None,
        };
        Ok(Self { state, _listener: listener })
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.state.borrow().current()
    }
}

fn apply(body: &HtmlElement, button: Option<&Element>, theme: Theme) {
    dom::set_class(body, CLASS_LIGHT_THEME, theme == Theme::Light);
    if let Some(button) = button {
        button.set_inner_html(theme.icon_html());
    }
}
