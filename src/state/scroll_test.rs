#![allow(clippy::float_cmp)]

use super::*;

fn mark(id: &str, top: f64) -> SectionMark {
    SectionMark { id: Some(id.to_owned()), top }
}

fn page() -> Vec<SectionMark> {
    vec![mark("home", 0.0), mark("about", 800.0), mark("skills", 1600.0), mark("contact", 2400.0)]
}

// =============================================================
// NavbarStyle
// =============================================================

#[test]
fn navbar_is_transparent_at_or_below_threshold() {
    for offset in [0.0, 10.0, 49.9, 50.0] {
        let style = NavbarStyle::for_offset(offset, 50.0);
        assert_eq!(style, NavbarStyle::TOP, "offset {offset}");
        assert_eq!(style.box_shadow, "none");
        assert_eq!(style.background, "rgba(10, 10, 10, 0.95)");
    }
}

#[test]
fn navbar_is_opaque_past_threshold() {
    for offset in [50.1, 51.0, 5000.0] {
        let style = NavbarStyle::for_offset(offset, 50.0);
        assert_eq!(style, NavbarStyle::SCROLLED, "offset {offset}");
        assert_eq!(style.background, "rgba(10, 10, 10, 0.98)");
        assert_ne!(style.box_shadow, "none");
    }
}

#[test]
fn scroll_state_records_last_offset() {
    let mut state = ScrollState::default();
    assert_eq!(state.last_offset(), 0.0);
    assert_eq!(state.update(120.0, 50.0), NavbarStyle::SCROLLED);
    assert_eq!(state.last_offset(), 120.0);
    assert_eq!(state.update(20.0, 50.0), NavbarStyle::TOP);
    assert_eq!(state.last_offset(), 20.0);
}

// =============================================================
// active_section
// =============================================================

#[test]
fn first_section_is_active_at_top() {
    assert_eq!(active_section(0.0, &page(), 200.0), Some("home"));
}

#[test]
fn look_ahead_activates_section_early() {
    let sections = page();
    assert_eq!(active_section(599.0, &sections, 200.0), Some("home"));
    assert_eq!(active_section(600.0, &sections, 200.0), Some("about"));
    assert_eq!(active_section(2250.0, &sections, 200.0), Some("contact"));
}

#[test]
fn nothing_active_before_first_section() {
    let sections = vec![mark("about", 900.0), mark("contact", 1800.0)];
    assert_eq!(active_section(0.0, &sections, 200.0), None);
    assert_eq!(active_section(699.0, &sections, 200.0), None);
    assert_eq!(active_section(700.0, &sections, 200.0), Some("about"));
}

#[test]
fn last_reached_section_without_id_clears_current() {
    let sections = vec![mark("home", 0.0), SectionMark { id: Some(String::new()), top: 500.0 }];
    assert_eq!(active_section(1000.0, &sections, 200.0), None);

    let sections = vec![mark("home", 0.0), SectionMark { id: None, top: 500.0 }];
    assert_eq!(active_section(1000.0, &sections, 200.0), None);
}

#[test]
fn earlier_section_without_id_does_not_matter() {
    let sections = vec![SectionMark { id: None, top: 0.0 }, mark("about", 500.0)];
    assert_eq!(active_section(100.0, &sections, 200.0), None);
    assert_eq!(active_section(300.0, &sections, 200.0), Some("about"));
}

#[test]
fn at_most_one_section_is_active_at_any_offset() {
    let sections = page();
    let links = ["#home", "#about", "#skills", "#contact"];
    let mut offset = 0.0;
    while offset < 3000.0 {
        let current = active_section(offset, &sections, 200.0);
        let active = links
            .into_iter()
            .filter(|href| crate::state::nav::link_targets(Some(*href), current))
            .count();
        assert_eq!(active, 1, "offset {offset}");
        offset += 37.0;
    }
}

#[test]
fn empty_page_has_no_active_section() {
    assert_eq!(active_section(500.0, &[], 200.0), None);
}
