//! Eased hover transition on portfolio cards.

use web_sys::HtmlElement;

use super::Page;
use crate::consts::CARD_HOVER_TRANSITION;
use crate::error::BindError;
use crate::util::dom;
use crate::util::listener::Listener;

pub struct Cards {
    _listeners: Vec<Listener>,
}

impl Cards {
    /// # Errors
    ///
    /// Fails only if the card selector is invalid.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let cards: Vec<HtmlElement> = dom::all(&page.document, &page.config.selectors.hover_cards)?;
        let listeners = cards
            .iter()
            .map(|card| {
                let card_el = card.clone();
                Listener::attach(card, "mouseenter", move |_| {
                    dom::set_style(&card_el, "transition", CARD_HOVER_TRANSITION);
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { _listeners: listeners })
    }
}
