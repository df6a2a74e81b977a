//! Team directory state and role filtering helpers.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::net::types::{Role, User};

/// Shared user list state, loaded from `GET /users`.
#[derive(Clone, Debug, Default)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
}

/// Users matching the directory filter; `None` keeps everyone.
pub fn filter_by_role(users: &[User], filter: Option<Role>) -> Vec<User> {
    match filter {
        None => users.to_vec(),
        Some(role) => users.iter().filter(|u| u.role == role).cloned().collect(),
    }
}

pub fn count_role(users: &[User], role: Role) -> usize {
    users.iter().filter(|u| u.role == role).count()
}

/// Who the viewer may assign tasks to: managers assign anyone, staff assign
/// students, students assign nobody.
pub fn assignable_users(users: &[User], viewer: Role) -> Vec<User> {
    match viewer {
        Role::Manager => users.to_vec(),
        Role::Staff => users
            .iter()
            .filter(|u| u.role == Role::Student)
            .cloned()
            .collect(),
        Role::Student => Vec::new(),
    }
}

/// Uppercase first letter for the avatar placeholder.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}
