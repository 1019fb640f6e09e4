//! Browser glue shared across behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate web-sys plumbing (element lookup, listener and
//! observer ownership, timers, storage) so each behavior reads as a short
//! list of bindings.

pub mod dom;
pub mod listener;
pub mod schedule;
pub mod storage;
