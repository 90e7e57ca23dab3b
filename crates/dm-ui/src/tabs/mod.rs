//! The four tabs of the central dock area

mod controls;
mod data;
mod hierarchy;
mod logs;

use egui::{Ui, WidgetText};
use egui_dock::TabViewer;

use dm_core::{LogFilter, Session};

use crate::icons;
use crate::shell::ShellAction;

/// Identifies a tab of the dock area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Data,
    Hierarchy,
    Controls,
    Logs,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Data, Tab::Hierarchy, Tab::Controls, Tab::Logs];

    pub fn title(self) -> String {
        match self {
            Tab::Data => format!("{} Données", icons::TABLE),
            Tab::Hierarchy => format!("{} Hiérarchie", icons::TREE),
            Tab::Controls => format!("{} Contrôles", icons::CONTROLS),
            Tab::Logs => format!("{} Logs", icons::LOG),
        }
    }
}

/// Widget scratch state that is not part of the session
#[derive(Debug, Clone, Default)]
pub struct TabState {
    /// Level filter of the log viewer
    pub log_filter: LogFilter,

    /// Column picked in the edit row of the data tab
    pub edit_column: usize,

    /// Replacement text typed in the edit row
    pub edit_text: String,

    /// Row the table should scroll to on the next frame
    pub scroll_to_row: Option<usize>,
}

/// Tab viewer for egui_dock
pub(crate) struct TabViewerImpl<'a> {
    pub session: &'a mut Session,
    pub state: &'a mut TabState,
    pub actions: &'a mut Vec<ShellAction>,
}

impl<'a> TabViewer for TabViewerImpl<'a> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        match tab {
            Tab::Data => data::show(ui, self.session, self.state),
            Tab::Hierarchy => hierarchy::show(ui, self.session),
            Tab::Controls => controls::show(ui, self.session),
            Tab::Logs => logs::show(ui, self.session, self.state, self.actions),
        }
    }
}
