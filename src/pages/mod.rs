//! Page-level route components.

pub mod dashboard;
pub mod login;
pub mod register;
pub mod users;
