//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and interaction surfaces while reading
//! shared state from Leptos context providers. Session writes stay in
//! `crate::net::auth_client`; task and user list writes happen through the
//! callbacks the pages pass down.

pub mod action_cards;
pub mod activity_section;
pub mod add_task_modal;
pub mod header;
pub mod loading_screen;
pub mod route_guard;
pub mod stats_cards;
pub mod task_detail_modal;
pub mod tasks_table;
pub mod team_members;
