#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the dashboard's tab navigation.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: HeaderTab,
}

/// Tabs available in the dashboard header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderTab {
    #[default]
    Dashboard,
    Tasks,
    Staff,
    Students,
}

impl HeaderTab {
    pub const ALL: [HeaderTab; 4] = [
        HeaderTab::Dashboard,
        HeaderTab::Tasks,
        HeaderTab::Staff,
        HeaderTab::Students,
    ];

    /// Team tabs are only offered to managers.
    pub fn requires_manager(self) -> bool {
        matches!(self, HeaderTab::Staff | HeaderTab::Students)
    }

    pub fn label(self) -> &'static str {
        match self {
            HeaderTab::Dashboard => "Dashboard",
            HeaderTab::Tasks => "Tasks",
            HeaderTab::Staff => "Staff",
            HeaderTab::Students => "Students",
        }
    }
}
