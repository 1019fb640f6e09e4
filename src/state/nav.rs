//! Mobile menu state and in-page link helpers.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub open: bool,
}

impl NavMenuState {
    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Element id referenced by an in-page `href`, if any.
///
/// `"#about"` yields `Some("about")`; a bare `"#"` or an external URL yields `None`.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a nav link `href` points at the section `current`.
#[must_use]
pub fn link_targets(href: Option<&str>, current: Option<&str>) -> bool {
    match (href.and_then(fragment_id), current) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}
