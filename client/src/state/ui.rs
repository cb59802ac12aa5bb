//! Local UI chrome state (theme, dashboard sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of session and plant state so
//! layout controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme toggle and the collapsible dashboard sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
}

impl UiState {
    /// Close transient menus, e.g. after navigating.
    pub fn close_menus(&mut self) {
        self.sidebar_open = false;
        self.mobile_menu_open = false;
    }
}
