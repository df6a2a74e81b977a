use super::*;

fn user(id: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        name: format!("User {id}"),
        email: format!("{id}@velomax.dev"),
        role,
        created_at: None,
    }
}

fn team() -> Vec<User> {
    vec![
        user("m1", Role::Manager),
        user("s1", Role::Staff),
        user("s2", Role::Staff),
        user("st1", Role::Student),
    ]
}

#[test]
fn users_state_defaults_empty() {
    let state = UsersState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn role_filter_keeps_matching_users_only() {
    let all = filter_by_role(&team(), None);
    assert_eq!(all.len(), 4);

    let staff = filter_by_role(&team(), Some(Role::Staff));
    assert_eq!(staff.len(), 2);
    assert!(staff.iter().all(|u| u.role == Role::Staff));
}

#[test]
fn role_counts_match_the_list() {
    let users = team();
    assert_eq!(count_role(&users, Role::Manager), 1);
    assert_eq!(count_role(&users, Role::Staff), 2);
    assert_eq!(count_role(&users, Role::Student), 1);
}

// =============================================================
// Assignment rules
// =============================================================

#[test]
fn managers_assign_anyone() {
    assert_eq!(assignable_users(&team(), Role::Manager).len(), 4);
}

#[test]
fn staff_assign_students_only() {
    let options = assignable_users(&team(), Role::Staff);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].id, "st1");
}

#[test]
fn students_assign_nobody() {
    assert!(assignable_users(&team(), Role::Student).is_empty());
}

#[test]
fn avatar_initial_uppercases_the_first_letter() {
    assert_eq!(avatar_initial("dana"), "D");
    assert_eq!(avatar_initial("Ăna"), "Ă");
    assert_eq!(avatar_initial(""), "");
}
