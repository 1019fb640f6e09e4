//! Scroll-derived state: navbar look and the active section.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{NAVBAR_BG_SCROLLED, NAVBAR_BG_TOP, NAVBAR_SHADOW_SCROLLED, NAVBAR_SHADOW_TOP};

/// Inline style values applied to the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub const TOP: Self = Self { background: NAVBAR_BG_TOP, box_shadow: NAVBAR_SHADOW_TOP };
    pub const SCROLLED: Self = Self { background: NAVBAR_BG_SCROLLED, box_shadow: NAVBAR_SHADOW_SCROLLED };

    /// Style for a given scroll offset. Strictly past `threshold` is "scrolled".
    #[must_use]
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold { Self::SCROLLED } else { Self::TOP }
    }
}

/// Last observed scroll offset, owned by the navbar behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    last_offset: f64,
}

impl ScrollState {
    /// Record a new offset and return the style to apply.
    pub fn update(&mut self, offset: f64, threshold: f64) -> NavbarStyle {
        self.last_offset = offset;
        NavbarStyle::for_offset(offset, threshold)
    }

    #[must_use]
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

/// A page section as seen by the active-link tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMark {
    pub id: Option<String>,
    /// Top edge in document coordinates (`offsetTop`).
    pub top: f64,
}

/// Id of the section the reader is currently in.
///
/// Walks sections in document order and keeps the last one whose activation
/// line (`top - look_ahead`) the viewport has reached. If that section has no
/// id, nothing is current.
#[must_use]
pub fn active_section(offset: f64, sections: &[SectionMark], look_ahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| offset >= section.top - look_ahead)
        .and_then(|section| section.id.as_deref())
        .filter(|id| !id.is_empty())
}
