//! # portfolio
//!
//! WebAssembly behavior layer for a static personal-portfolio page. Compiled
//! as a `cdylib`, it binds to markup the page already ships (navbar, sections,
//! skill bars, certificate cards) and adds the interactive parts: mobile menu,
//! smooth anchor scrolling, scroll-reactive navbar, fade-in and skill-bar
//! animations, active-link highlighting, persisted light/dark theme, and a
//! certificate viewer modal.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | WASM entry point and the [`app::Portfolio`] owner of all behaviors |
//! | [`behaviors`] | One DOM binding per page behavior |
//! | [`state`] | Browser-independent decisions (theme, scroll, modal, skill bars) |
//! | [`util`] | Element lookup, owned listeners/observers, timers, storage |
//! | [`config`] | Selectors, thresholds, and timings, overridable from the page |
//! | [`error`] | [`error::BindError`] raised while attaching |
//! | [`consts`] | Default thresholds, delays, class names |

pub mod app;
pub mod behaviors;
pub mod config;
pub mod consts;
pub mod error;
pub mod state;
pub mod util;
