//! Home-section parallax and the optional hero-name typewriter.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Element, HtmlElement};

use super::Page;
use crate::error::BindError;
use crate::state::hero::{Parallax, Tick, Typewriter};
use crate::util::dom;
use crate::util::listener::Listener;

type Slot<T> = Rc<RefCell<Option<T>>>;

pub struct Hero {
    _parallax: Option<Listener>,
    _start: Option<Timeout>,
    ticker: Slot<Interval>,
    finisher: Slot<Timeout>,
}

impl Hero {
    /// Both effects are optional; absent elements just skip them.
    ///
    /// # Errors
    ///
    /// Fails only if the scroll listener cannot be registered.
    pub fn attach(page: &Page) -> Result<Self, BindError> {
        let config = &page.config;

        let parallax = match dom::optional::<HtmlElement>(&page.document, &config.selectors.home) {
            Some(home) => {
                let (window, factor) = (page.window.clone(), config.parallax_factor);
                Some(Listener::attach(&page.window, "scroll", move |_| {
                    let height = window.inner_height().map_or(0.0, |h| h.as_f64().unwrap_or(0.0));
                    if let Some(p) = Parallax::at(dom::scroll_offset(&window), height, factor) {
                        dom::set_style(&home, "transform", &p.transform());
                        dom::set_style(&home, "opacity", &p.opacity.to_string());
                    }
                })?)
            }
            None => None,
        };

        let ticker: Slot<Interval> = Rc::default();
        let finisher: Slot<Timeout> = Rc::default();
        let start = dom::optional::<Element>(&page.document, &config.selectors.hero_name)
            .filter(|_| config.typewriter)
            .map(|name| {
                let text = name.text_content().unwrap_or_default();
                name.set_text_content(Some(""));
                let (ticker, finisher, step_ms) = (Rc::clone(&ticker), Rc::clone(&finisher), config.typewriter_step_ms);
                Timeout::new(config.typewriter_start_ms, move || {
                    let mut writer = Typewriter::new(&text);
                    let stop = Rc::clone(&ticker);
                    let interval = Interval::new(step_ms, move || match writer.tick() {
                        Tick::Show(visible) => name.set_text_content(Some(&visible)),
                        // The interval cannot drop itself mid-callback; hand it to a zero-delay timeout.
                        Tick::Finished => {
                            let stop = Rc::clone(&stop);
                            *finisher.borrow_mut() = Some(Timeout::new(0, move || {
                                stop.borrow_mut().take();
                                log::debug!("typewriter finished");
                            }));
                        }
                        Tick::Idle => {}
                    });
                    *ticker.borrow_mut() = Some(interval);
                })
            });

        Ok(Self { _parallax: parallax, _start: start, ticker, finisher })
    }
}

impl Drop for Hero {
    fn drop(&mut self) {
        // The interval closure holds both slots; emptying them breaks the cycle.
        self.ticker.borrow_mut().take();
        self.finisher.borrow_mut().take();
    }
}
