//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `tasks`, `users`, `ui`) so individual
//! components can depend on small focused models. Each slice is provided as
//! an `RwSignal` context from `app.rs`; derivations over the slices are plain
//! functions so they stay testable off-browser.

pub mod auth;
pub mod tasks;
pub mod ui;
pub mod users;
