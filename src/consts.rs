//! Shared constants for the page behaviors.

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset (CSS px) past which the navbar switches to its scrolled look.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How far ahead of a section's top edge it already counts as "current".
pub const ACTIVE_LINK_LOOK_AHEAD_PX: f64 = 200.0;

/// Parallax speed of the home section relative to the scroll offset.
pub const PARALLAX_FACTOR: f64 = 0.5;

// ── Navbar styling ──────────────────────────────────────────────

pub const NAVBAR_BG_SCROLLED: &str = "rgba(10, 10, 10, 0.98)";
pub const NAVBAR_BG_TOP: &str = "rgba(10, 10, 10, 0.95)";
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 2px 20px rgba(0, 0, 0, 0.3)";
pub const NAVBAR_SHADOW_TOP: &str = "none";

// ── Observers ───────────────────────────────────────────────────

pub const SECTION_THRESHOLD: f64 = 0.1;
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_THRESHOLD: f64 = 0.5;

// ── Timers (ms) ─────────────────────────────────────────────────

/// Delay between collapsing a skill bar and restoring its target width.
pub const SKILL_FILL_DELAY_MS: u32 = 100;

/// Delay between hiding the certificate modal and blanking its frame.
pub const MODAL_CLEAR_DELAY_MS: u32 = 300;

pub const TYPEWRITER_START_MS: u32 = 500;
pub const TYPEWRITER_STEP_MS: u32 = 100;

// ── Marker classes ──────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_FADE_IN: &str = "fade-in";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_LIGHT_THEME: &str = "light-theme";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "vb_theme";
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";
pub const ICON_SUN: &str = r#"<i class="fas fa-sun"></i>"#;
pub const ICON_MOON: &str = r#"<i class="fas fa-moon"></i>"#;

// ── Certificates ────────────────────────────────────────────────

pub const DEFAULT_CERTIFICATE_TITLE: &str = "Certificate";
pub const CARD_HOVER_TRANSITION: &str = "all 0.3s ease";

/// Id of the optional inline JSON block that overrides [`crate::config::PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";
