//! Hero section effects: parallax and the typewriter reveal.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

/// Fraction of opacity lost by the time the home section scrolls a full
/// viewport height.
const PARALLAX_FADE: f64 = 0.5;

/// Transform and opacity for the home section at a scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub translate_y: f64,
    pub opacity: f64,
}

impl Parallax {
    /// `None` once the home section has scrolled out of the first viewport.
    #[must_use]
    pub fn at(offset: f64, viewport_height: f64, factor: f64) -> Option<Self> {
        if viewport_height <= 0.0 || offset >= viewport_height {
            return None;
        }
        Some(Self {
            translate_y: offset * factor,
            opacity: 1.0 - (offset / viewport_height) * PARALLAX_FADE,
        })
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// What the typewriter timer should do on one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Show this prefix.
    Show(String),
    /// Text is complete; stop the timer. Reported exactly once.
    Finished,
    /// Already finished and reported.
    Idle,
}

/// Types out a string one character per tick.
#[derive(Clone, Debug, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
    reported_done: bool,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0, reported_done: false }
    }

    /// Advance by one character.
    pub fn tick(&mut self) -> Tick {
        if !self.is_done() {
            self.typed += 1;
            return Tick::Show(self.chars[..self.typed].iter().collect());
        }
        if std::mem::replace(&mut self.reported_done, true) {
            Tick::Idle
        } else {
            Tick::Finished
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }
}
