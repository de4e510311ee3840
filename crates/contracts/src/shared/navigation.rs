use serde::{Deserialize, Serialize};

/// Collapsible groups of the sidebar text panel
pub const GROUP_DASHBOARD: &str = "dashboard";
pub const GROUP_MY_REPORTS: &str = "my-reports";

/// Item highlighted when the page opens
pub const DEFAULT_ACTIVE_ITEM: &str = "new-report";

/// Expanded groups and the active menu item of the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarState {
    pub expanded: Vec<String>,
    pub active: String,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            expanded: vec![
                GROUP_DASHBOARD.to_string(),
                GROUP_MY_REPORTS.to_string(),
            ],
            active: DEFAULT_ACTIVE_ITEM.to_string(),
        }
    }
}

impl SidebarState {
    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded.iter().any(|g| g == group)
    }

    /// Collapse an expanded group or expand a collapsed one
    pub fn toggle_group(&mut self, group: &str) {
        if let Some(pos) = self.expanded.iter().position(|g| g == group) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(group.to_string());
        }
    }

    pub fn is_active(&self, item: &str) -> bool {
        self.active == item
    }

    pub fn activate(&mut self, item: &str) {
        self.active = item.to_string();
    }
}
