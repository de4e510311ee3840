use serde::{Deserialize, Serialize};

use crate::enums::{ReferrerSort, Timeframe};

/// Interactive state of the dashboard page.
///
/// Owned by the view layer; every change replaces a single field.
/// Only `query`, `sort` and `timeframe` feed the derivation, the menu
/// flags are pure view state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub query: String,
    pub sort: ReferrerSort,
    pub timeframe: Timeframe,
    pub timeframe_menu_open: bool,
    pub sort_menu_open: bool,
}

impl DashboardState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Picking a timeframe also closes its menu
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
        self.timeframe_menu_open = false;
    }

    pub fn select_sort(&mut self, sort: ReferrerSort) {
        self.sort = sort;
    }

    pub fn toggle_timeframe_menu(&mut self) {
        self.timeframe_menu_open = !self.timeframe_menu_open;
    }

    pub fn toggle_sort_menu(&mut self) {
        self.sort_menu_open = !self.sort_menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert_eq!(state.query, "");
        assert_eq!(state.sort, ReferrerSort::AmountDesc);
        assert_eq!(state.timeframe, Timeframe::ThisQuarter);
        assert!(!state.timeframe_menu_open);
        assert!(!state.sort_menu_open);
    }

    #[test]
    fn test_select_timeframe_closes_menu() {
        let mut state = DashboardState::default();
        state.toggle_timeframe_menu();
        assert!(state.timeframe_menu_open);

        state.select_timeframe(Timeframe::YearToDate);
        assert_eq!(state.timeframe, Timeframe::YearToDate);
        assert!(!state.timeframe_menu_open);
    }

    #[test]
    fn test_any_timeframe_reachable_in_one_step() {
        for from in Timeframe::all() {
            for to in Timeframe::all() {
                let mut state = DashboardState::default();
                state.select_timeframe(from);
                state.select_timeframe(to);
                assert_eq!(state.timeframe, to);
            }
        }
    }

    #[test]
    fn test_select_sort_leaves_menu_as_is() {
        let mut state = DashboardState::default();
        state.toggle_sort_menu();
        state.select_sort(ReferrerSort::Name);
        assert_eq!(state.sort, ReferrerSort::Name);
        assert!(state.sort_menu_open);

        state.toggle_sort_menu();
        assert!(!state.sort_menu_open);
        assert!(!state.timeframe_menu_open);
    }
}
