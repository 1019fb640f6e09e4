//! Fade-in reveal for sections and one-shot skill-bar fills.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement, Node};

use super::Page;
use crate::consts::{CLASS_FADE_IN, CLASS_VISIBLE};
use crate::error::BindError;
use crate::state::skills::{SkillBarTracker, WIDTH_ATTR, target_width};
use crate::util::dom;
use crate::util::listener::Observer;
use crate::util::schedule::TimerSlots;

pub struct Visibility {
    _sections: Observer,
    _skills: Observer,
    bars: Rc<Vec<HtmlElement>>,
    tracker: Rc<RefCell<SkillBarTracker>>,
    fills: Rc<RefCell<TimerSlots<usize>>>,
}

impl Visibility {
    /// Observe every section and skill bar.
    ///
    /// # Errors
    ///
    /// Fails if an observer cannot be created from the configured options.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let config = &page.config;

        let sections: Vec<Element> = dom::all(&page.document, &config.selectors.section)?;
        let section_observer = Observer::new(&config.section_observer, |target, _| {
            dom::set_class(&target, CLASS_VISIBLE, true);
        })?;
        for section in &sections {
            dom::set_class(section, CLASS_FADE_IN, true);
            section_observer.observe(section);
        }

        let bars: Rc<Vec<HtmlElement>> = Rc::new(dom::all(&page.document, &config.selectors.skill_bar)?);
        let tracker = Rc::new(RefCell::new(SkillBarTracker::default()));
        let fills: Rc<RefCell<TimerSlots<usize>>> = Rc::default();
        let skill_observer = {
            let (bars, tracker, fills) = (Rc::clone(&bars), Rc::clone(&tracker), Rc::clone(&fills));
            let delay = config.skill_fill_delay_ms;
            Observer::new(&config.skill_observer, move |target, observer| {
                observer.unobserve(&target);
                let target_node: &Node = &target;
                let Some(index) = bars.iter().position(|bar| bar.is_same_node(Some(target_node))) else {
                    return;
                };
                if !tracker.borrow_mut().claim(index) {
                    return;
                }
                let bar = bars[index].clone();
                let inline = bar.style().get_property_value("width").unwrap_or_default();
                let Some(width) = target_width(bar.get_attribute(WIDTH_ATTR).as_deref(), &inline) else {
                    log::warn!("skill bar {index} has no target width; set {WIDTH_ATTR}");
                    return;
                };
                dom::set_style(&bar, "width", "0");
                tracker.borrow_mut().begin_fill(index, width);
                let tracker = Rc::clone(&tracker);
                let timer = Timeout::new(delay, move || {
                    let width = tracker.borrow_mut().finish_fill(index);
                    if let Some(width) = width {
                        dom::set_style(&bar, "width", &width);
                    }
                });
                fills.borrow_mut().replace(index, timer);
            })?
        };
        for bar in bars.iter() {
            skill_observer.observe(bar);
        }

        log::debug!("observing {} sections and {} skill bars", sections.len(), bars.len());
        Ok(Self { _sections: section_observer, _skills: skill_observer, bars, tracker, fills })
    }

    /// Number of skill bars that have animated so far.
    #[must_use]
    pub fn filled_bars(&self) -> usize {
        self.tracker.borrow().fired_count()
    }
}

impl Drop for Visibility {
    fn drop(&mut self) {
        // Bars zeroed for a fill that never ran get their width back, so a
        // remount reads the real target instead of "0".
        self.fills.borrow_mut().cancel_all();
        let unfinished = self.tracker.borrow_mut().drain_unfinished();
        for (index, width) in unfinished {
            if let Some(bar) = self.bars.get(index) {
                dom::set_style(bar, "width", &width);
            }
        }
    }
}
