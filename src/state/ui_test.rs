use super::*;

#[test]
fn ui_state_starts_on_the_overview_tab() {
    let state = UiState::default();
    assert_eq!(state.active_tab, HeaderTab::Dashboard);
}

#[test]
fn only_team_tabs_require_a_manager() {
    assert!(!HeaderTab::Dashboard.requires_manager());
    assert!(!HeaderTab::Tasks.requires_manager());
    assert!(HeaderTab::Staff.requires_manager());
    assert!(HeaderTab::Students.requires_manager());
}
