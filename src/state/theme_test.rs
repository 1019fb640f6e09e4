use super::*;

fn stored(value: &str) -> MemoryStore {
    MemoryStore { value: Some(value.to_owned()) }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_only_exact_literals() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Light"), None);
    assert_eq!(Theme::parse(" dark"), None);
    assert_eq!(Theme::parse("true"), None);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn icons_are_sun_for_light_and_moon_for_dark() {
    assert!(Theme::Light.icon_html().contains("fa-sun"));
    assert!(Theme::Dark.icon_html().contains("fa-moon"));
}

#[test]
fn display_matches_persisted_literal() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn saved_preference_wins_over_system_signal() {
    assert_eq!(Theme::resolve_initial(Some("dark"), true), Theme::Dark);
    assert_eq!(Theme::resolve_initial(Some("light"), false), Theme::Light);
}

#[test]
fn system_light_signal_used_without_saved_value() {
    assert_eq!(Theme::resolve_initial(None, true), Theme::Light);
}

#[test]
fn defaults_to_dark_without_saved_value_or_signal() {
    assert_eq!(Theme::resolve_initial(None, false), Theme::Dark);
}

#[test]
fn invalid_saved_value_falls_through() {
    assert_eq!(Theme::resolve_initial(Some("sepia"), true), Theme::Light);
    assert_eq!(Theme::resolve_initial(Some(""), false), Theme::Dark);
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn load_reads_store() {
    let state = ThemeState::load(stored("light"), false);
    assert_eq!(state.current(), Theme::Light);
}

#[test]
fn load_does_not_write_store() {
    let state = ThemeState::load(MemoryStore::default(), true);
    assert_eq!(state.current(), Theme::Light);
    assert_eq!(state.store().value, None);
}

#[test]
fn toggle_persists_new_value() {
    let mut state = ThemeState::load(MemoryStore::default(), false);
    assert_eq!(state.toggle(), Theme::Light);
    assert_eq!(state.store().value.as_deref(), Some("light"));
}

#[test]
fn toggle_twice_round_trips_value_and_icon() {
    let mut state = ThemeState::load(stored("dark"), false);
    let icon = state.current().icon_html();
    state.toggle();
    assert_ne!(state.current().icon_html(), icon);
    state.toggle();
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(state.store().value.as_deref(), Some("dark"));
    assert_eq!(state.current().icon_html(), icon);
}
