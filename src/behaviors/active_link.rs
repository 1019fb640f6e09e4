//! Highlights the nav link for the section currently in view.

use web_sys::{Element, HtmlElement, Window};

use super::Page;
use crate::consts::CLASS_ACTIVE;
use crate::error::BindError;
use crate::state::nav::link_targets;
use crate::state::scroll::{SectionMark, active_section};
use crate::util::dom;
use crate::util::listener::Listener;

pub struct ActiveLink {
    _listener: Listener,
}

impl ActiveLink {
    /// # Errors
    ///
    /// Fails only if a configured selector is invalid.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let sections: Vec<HtmlElement> = dom::all(&page.document, &page.config.selectors.section)?;
        let links: Vec<Element> = dom::all(&page.document, &page.config.selectors.nav_link)?;
        let look_ahead = page.config.active_link_look_ahead;

        let window = page.window.clone();
        let listener = Listener::attach(&page.window, "scroll", move |_| {
            highlight(&window, &sections, &links, look_ahead);
        })?;
        Ok(Self { _listener: listener })
    }
}

fn highlight(window: &Window, sections: &[HtmlElement], links: &[Element], look_ahead: f64) {
    let marks = sections
        .iter()
        .map(|section| SectionMark { id: Some(section.id()), top: f64::from(section.offset_top()) })
        .collect::<Vec<_>>();
    let current = active_section(dom::scroll_offset(window), &marks, look_ahead);
    for link in links {
        let href = link.get_attribute("href");
        dom::set_class(link, CLASS_ACTIVE, link_targets(href.as_deref(), current));
    }
}
