//! Page configuration: selectors, thresholds, and timings.
//!
//! DESIGN
//! ======
//! Every knob defaults to the values the stock portfolio markup expects, so a
//! page without configuration works unchanged. A page may override any subset
//! by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="portfolio-config">
//!   { "navbarThreshold": 80, "typewriter": true }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;

/// Behavior configuration shared by every unit.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub selectors: Selectors,
    pub navbar_threshold: f64,
    pub active_link_look_ahead: f64,
    pub section_observer: ObserverSpec,
    pub skill_observer: ObserverSpec,
    pub skill_fill_delay_ms: u32,
    pub modal_clear_delay_ms: u32,
    pub theme_storage_key: String,
    pub parallax_factor: f64,
    /// Re-type the hero name on load. Off unless the page opts in.
    pub typewriter: bool,
    pub typewriter_start_ms: u32,
    pub typewriter_step_ms: u32,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            navbar_threshold: NAVBAR_SCROLL_THRESHOLD_PX,
            active_link_look_ahead: ACTIVE_LINK_LOOK_AHEAD_PX,
            section_observer: ObserverSpec { threshold: SECTION_THRESHOLD, root_margin: SECTION_ROOT_MARGIN.to_owned() },
            skill_observer: ObserverSpec { threshold: SKILL_THRESHOLD, root_margin: String::new() },
            skill_fill_delay_ms: SKILL_FILL_DELAY_MS,
            modal_clear_delay_ms: MODAL_CLEAR_DELAY_MS,
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            parallax_factor: PARALLAX_FACTOR,
            typewriter: false,
            typewriter_start_ms: TYPEWRITER_START_MS,
            typewriter_step_ms: TYPEWRITER_STEP_MS,
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }
}

/// Options for one viewport-intersection watcher.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverSpec {
    pub threshold: f64,
    #[serde(default)]
    pub root_margin: String,
}

/// CSS selectors (and element ids) the behaviors bind to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub in_page_anchor: String,
    pub navbar: String,
    pub section: String,
    pub skill_bar: String,
    pub hero_name: String,
    pub home: String,
    pub theme_toggle: String,
    pub hover_cards: String,
    pub clickable_cert: String,
    pub cert_card: String,
    pub cert_heading: String,
    pub cert_url_attr: String,
    pub close_modal: String,
    pub modal_id: String,
    pub frame_id: String,
    pub title_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            hamburger: ".hamburger".to_owned(),
            nav_menu: ".nav-menu".to_owned(),
            nav_link: ".nav-link".to_owned(),
            in_page_anchor: r##"a[href^="#"]"##.to_owned(),
            navbar: ".navbar".to_owned(),
            section: "section".to_owned(),
            skill_bar: ".skill-progress".to_owned(),
            hero_name: ".hero-name".to_owned(),
            home: ".home".to_owned(),
            theme_toggle: ".theme-toggle".to_owned(),
            hover_cards: ".cert-card, .project-card, .contact-card".to_owned(),
            clickable_cert: ".clickable-cert".to_owned(),
            cert_card: ".cert-card".to_owned(),
            cert_heading: "h3".to_owned(),
            cert_url_attr: "data-certificate".to_owned(),
            close_modal: ".close-modal".to_owned(),
            modal_id: "certificateModal".to_owned(),
            frame_id: "certificateFrame".to_owned(),
            title_id: "certificateTitle".to_owned(),
        }
    }
}
