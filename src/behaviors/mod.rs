//! Page behaviors, one module per unit.
//!
//! Each behavior resolves its elements once in `attach`, failing with
//! [`BindError`] if a required one is absent, and returns a value owning its
//! listeners, observers, and timers. Dropping the value detaches it.

pub mod active_link;
pub mod cards;
pub mod certificate_modal;
pub mod hero;
pub mod navbar;
pub mod navigation;
pub mod smooth_scroll;
pub mod theme;
pub mod visibility;

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::error::BindError;
use crate::util::dom;

/// Handles every behavior binds against.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<PageConfig>,
}

impl Page {
    /// The current browser page.
    ///
    /// # Errors
    ///
    /// Fails outside a browser or before a document exists.
    pub fn current(config: PageConfig) -> Result<Self, BindError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        Ok(Self { window, document, config: Rc::new(config) })
    }
}
