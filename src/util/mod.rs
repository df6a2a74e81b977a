//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! navigation policy) from page and component logic to improve reuse and
//! testability.

pub mod guard;
pub mod session;
pub mod time;
