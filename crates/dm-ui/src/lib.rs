//! User interface components for the data manager
//!
//! This crate provides the egui-based window chrome (menu bar, toolbar,
//! status bar), the four tabs of the central dock area and the dialogs.
//! It owns no application state: everything is read from and written to the
//! [`dm_core::Session`] passed in each frame.

pub mod dialogs;
pub mod shell;
pub mod tabs;
pub mod theme;

/// Re-export commonly used types
pub use dialogs::{show_dialogs, DialogKind};
pub use shell::{central_panel, menu_bar, status_bar, tool_bar, ShellAction};
pub use tabs::{Tab, TabState};
pub use theme::apply_theme;

use egui_dock::DockState;

/// UI state that persists across frames
pub struct UiState {
    /// Dock state for the central tabs
    pub dock_state: DockState<Tab>,

    /// Widget scratch state of the tabs
    pub tabs: TabState,

    /// Dialog currently open, if any
    pub dialog: Option<DialogKind>,

    /// Message box currently shown
    pub notice: Option<dm_core::Notice>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dock_state: DockState::new(Tab::ALL.to_vec()),
            tabs: TabState::default(),
            dialog: None,
            notice: None,
        }
    }
}

impl UiState {
    /// Put the tabs back in their initial arrangement
    pub fn reset_layout(&mut self) {
        self.dock_state = DockState::new(Tab::ALL.to_vec());
    }
}

// Common icon definitions
pub mod icons {
    pub const NEW: &str = "🗋";
    pub const OPEN: &str = "📂";
    pub const SAVE: &str = "💾";
    pub const SEARCH: &str = "🔍";
    pub const SETTINGS: &str = "⚙";
    pub const TABLE: &str = "📋";
    pub const TREE: &str = "🗀";
    pub const CONTROLS: &str = "🎚";
    pub const LOG: &str = "📄";
}
