#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_stock_markup() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.navbar_threshold, 50.0);
    assert_eq!(cfg.active_link_look_ahead, 200.0);
    assert_eq!(cfg.skill_fill_delay_ms, 100);
    assert_eq!(cfg.modal_clear_delay_ms, 300);
    assert_eq!(cfg.theme_storage_key, "vb_theme");
    assert!(!cfg.typewriter);
    assert_eq!(cfg.selectors.hamburger, ".hamburger");
    assert_eq!(cfg.selectors.modal_id, "certificateModal");
}

#[test]
fn default_observers() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.section_observer.threshold, 0.1);
    assert_eq!(cfg.section_observer.root_margin, "0px 0px -50px 0px");
    assert_eq!(cfg.skill_observer.threshold, 0.5);
    assert!(cfg.skill_observer.root_margin.is_empty());
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let cfg = PageConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(cfg, PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = PageConfig::from_json(r##"{ "navbarThreshold": 80, "typewriter": true, "selectors": { "navbar": "#top" } }"##)
        .expect("partial override should parse");
    assert_eq!(cfg.navbar_threshold, 80.0);
    assert!(cfg.typewriter);
    assert_eq!(cfg.selectors.navbar, "#top");
    assert_eq!(cfg.selectors.nav_menu, ".nav-menu");
    assert_eq!(cfg.modal_clear_delay_ms, 300);
}

#[test]
fn observer_override_without_margin() {
    let cfg = PageConfig::from_json(r#"{ "skillObserver": { "threshold": 0.75 } }"#).expect("observer override should parse");
    assert_eq!(cfg.skill_observer.threshold, 0.75);
    assert!(cfg.skill_observer.root_margin.is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(PageConfig::from_json("{ navbarThreshold: ").is_err());
    assert!(PageConfig::from_json(r#"{ "navbarThreshold": "high" }"#).is_err());
}

// =============================================================
// Log level
// =============================================================

#[test]
fn log_level_parses_known_names() {
    let cfg = PageConfig { log_level: "debug".to_owned(), ..PageConfig::default() };
    assert_eq!(cfg.log_level(), log::Level::Debug);
    let cfg = PageConfig { log_level: " WARN ".to_owned(), ..PageConfig::default() };
    assert_eq!(cfg.log_level(), log::Level::Warn);
}

#[test]
fn log_level_falls_back_to_info() {
    let cfg = PageConfig { log_level: "chatty".to_owned(), ..PageConfig::default() };
    assert_eq!(cfg.log_level(), log::Level::Info);
}
