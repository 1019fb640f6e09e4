//! Skill-bar fill bookkeeping.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use std::collections::{HashMap, HashSet};

/// Attribute carrying a bar's target width, e.g. `data-width="85"` or `"85%"`.
pub const WIDTH_ATTR: &str = "data-width";

/// Width a skill bar should fill to.
///
/// The explicit `data-width` attribute wins; a bare number is read as a
/// percentage. Without it, the inline `style.width` the markup shipped with is
/// used. Returns `None` when neither is present.
#[must_use]
pub fn target_width(data_width: Option<&str>, inline_width: &str) -> Option<String> {
    if let Some(raw) = data_width.map(str::trim).filter(|w| !w.is_empty()) {
        if raw.parse::<f64>().is_ok() {
            return Some(format!("{raw}%"));
        }
        return Some(raw.to_owned());
    }
    let inline = inline_width.trim();
    (!inline.is_empty()).then(|| inline.to_owned())
}

/// Remembers which bars have already animated, and the target width of any
/// bar whose fill has been scheduled but has not landed yet.
#[derive(Clone, Debug, Default)]
pub struct SkillBarTracker {
    fired: HashSet<usize>,
    pending: HashMap<usize, String>,
}

impl SkillBarTracker {
    /// Claim the fill animation for bar `index`. Only the first claim succeeds.
    pub fn claim(&mut self, index: usize) -> bool {
        self.fired.insert(index)
    }

    #[must_use]
    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.contains(&index)
    }

    #[must_use]
    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }

    /// Record that bar `index` was zeroed and will fill to `width`.
    pub fn begin_fill(&mut self, index: usize, width: String) {
        self.pending.insert(index, width);
    }

    /// The width to apply when the fill timer for `index` fires.
    pub fn finish_fill(&mut self, index: usize) -> Option<String> {
        self.pending.remove(&index)
    }

    /// Bars still sitting at zero, with the width they should be put back to.
    pub fn drain_unfinished(&mut self) -> Vec<(usize, String)> {
        let mut unfinished: Vec<_> = self.pending.drain().collect();
        unfinished.sort_unstable_by_key(|(index, _)| *index);
        unfinished
    }
}
