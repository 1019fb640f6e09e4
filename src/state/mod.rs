//! Browser-independent state for the page behaviors.
//!
//! DESIGN
//! ======
//! Every decision a behavior makes (which link is active, which theme to
//! start in, whether a key closes the modal) lives here as plain data and
//! functions, so it can be tested without a DOM. The `behaviors` modules only
//! read inputs from the page and write these results back.

pub mod hero;
pub mod modal;
pub mod nav;
pub mod scroll;
pub mod skills;
pub mod theme;
