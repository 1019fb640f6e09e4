use super::*;

// =============================================================
// target_width
// =============================================================

#[test]
fn data_attribute_number_is_percent() {
    assert_eq!(target_width(Some("85"), ""), Some("85%".to_owned()));
    assert_eq!(target_width(Some(" 62.5 "), "10%"), Some("62.5%".to_owned()));
}

#[test]
fn data_attribute_with_unit_is_kept() {
    assert_eq!(target_width(Some("240px"), "10%"), Some("240px".to_owned()));
    assert_eq!(target_width(Some("90%"), ""), Some("90%".to_owned()));
}

#[test]
fn falls_back_to_inline_width() {
    assert_eq!(target_width(None, "75%"), Some("75%".to_owned()));
    assert_eq!(target_width(Some("  "), "75%"), Some("75%".to_owned()));
}

#[test]
fn no_width_anywhere_is_none() {
    assert_eq!(target_width(None, ""), None);
    assert_eq!(target_width(Some(""), "   "), None);
}

// =============================================================
// SkillBarTracker
// =============================================================

#[test]
fn each_bar_fires_once() {
    let mut tracker = SkillBarTracker::default();
    assert!(tracker.claim(0));
    assert!(!tracker.claim(0));
    assert!(!tracker.claim(0));
    assert!(tracker.has_fired(0));
}

#[test]
fn bars_are_tracked_independently() {
    let mut tracker = SkillBarTracker::default();
    assert!(tracker.claim(2));
    assert!(!tracker.has_fired(1));
    assert!(tracker.claim(1));
    assert_eq!(tracker.fired_count(), 2);
}

#[test]
fn repeated_reentry_does_not_refire() {
    let mut tracker = SkillBarTracker::default();
    let fired = (0..10).filter(|_| tracker.claim(3)).count();
    assert_eq!(fired, 1);
}

// =============================================================
// Pending fills
// =============================================================

#[test]
fn finish_fill_hands_back_width_once() {
    let mut tracker = SkillBarTracker::default();
    tracker.claim(0);
    tracker.begin_fill(0, "85%".to_owned());
    assert_eq!(tracker.finish_fill(0), Some("85%".to_owned()));
    assert_eq!(tracker.finish_fill(0), None);
    assert!(tracker.drain_unfinished().is_empty());
}

#[test]
fn teardown_before_timer_recovers_zeroed_widths() {
    let mut tracker = SkillBarTracker::default();
    tracker.begin_fill(3, "60%".to_owned());
    tracker.begin_fill(1, "90%".to_owned());
    tracker.begin_fill(2, "40%".to_owned());
    assert_eq!(tracker.finish_fill(2), Some("40%".to_owned()));

    let unfinished = tracker.drain_unfinished();
    assert_eq!(unfinished, vec![(1, "90%".to_owned()), (3, "60%".to_owned())]);
    assert!(tracker.drain_unfinished().is_empty());
}

#[test]
fn restored_width_is_read_back_as_target() {
    // What a remount sees after teardown put the width back.
    let mut tracker = SkillBarTracker::default();
    tracker.begin_fill(0, target_width(Some("70"), "").unwrap_or_default());
    let (_, restored) = tracker.drain_unfinished().remove(0);
    assert_eq!(target_width(None, &restored), Some("70%".to_owned()));
}
