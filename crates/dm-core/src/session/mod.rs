//! Session-scoped state for one application window
//!
//! The [`Session`] owns the grid, the tree, the log and every value the
//! controls display. The UI receives it by `&mut` each frame and calls the
//! `on_*` methods in response to input; it never keeps state of its own
//! beyond widget-local scratch.

use std::collections::VecDeque;
use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info, warn};

use crate::events::{run_search, SearchHandler};
use crate::grid::{Grid, GridError, GridView};
use crate::hierarchy::{Hierarchy, NodePath};
use crate::log::{LogBuffer, LogLevel};
use crate::progress::{ProgressAnimation, ProgressTick};
use crate::sample;
use crate::search::{RowSearchIndex, SearchResult};

pub const INITIAL_STATUS: &str = "Prêt";

pub const TREE_PLACEHOLDER: &str = "Sélectionnez un élément dans l'arbre pour voir ses détails...";

pub const VOLUME_RANGE: std::ops::RangeInclusive<i32> = 0..=100;
pub const INTEGER_RANGE: std::ops::RangeInclusive<i32> = 0..=1000;
pub const DECIMAL_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// A message box the UI should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Values held by the widgets of the controls tab
#[derive(Debug, Clone)]
pub struct ControlValues {
    pub integer: i32,
    pub decimal: f64,
    pub volume: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub date_time: NaiveDateTime,
    pub list_items: Vec<String>,
    pub list_selected: Option<usize>,
    pub combo_text: String,
}

impl Default for ControlValues {
    fn default() -> Self {
        let now = Local::now().naive_local();
        Self {
            integer: 50,
            decimal: 25.75,
            volume: 75,
            date: now.date(),
            time: now.time(),
            date_time: now,
            list_items: sample::list_options(),
            list_selected: Some(0),
            combo_text: sample::COMBO_OPTIONS[0].to_string(),
        }
    }
}

/// All state of one data manager window
pub struct Session {
    pub grid: Grid,
    pub index: RowSearchIndex,
    pub tree: Hierarchy,
    pub log: LogBuffer,
    pub progress: ProgressAnimation,
    pub controls: ControlValues,

    /// Text of the search box
    pub search_text: String,

    /// Text of the toolbar quick search
    pub quick_search_text: String,

    pub selected_row: Option<usize>,
    pub selected_node: Option<NodePath>,
    pub category: String,
    pub status: String,

    notices: VecDeque<Notice>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session populated with the startup sample data
    pub fn new() -> Self {
        let mut session = Self::with_data(sample::sample_grid(), sample::sample_tree());
        for line in sample::STARTUP_LOG {
            session.log.append_tagged(line);
        }
        session
    }

    /// Session over the given data with an empty log
    pub fn with_data(grid: Grid, tree: Hierarchy) -> Self {
        Self {
            grid,
            index: RowSearchIndex::new(),
            tree,
            log: LogBuffer::new(),
            progress: ProgressAnimation::new(),
            controls: ControlValues::default(),
            search_text: String::new(),
            quick_search_text: String::new(),
            selected_row: None,
            selected_node: None,
            category: sample::CATEGORIES[0].to_string(),
            status: INITIAL_STATUS.to_string(),
            notices: VecDeque::new(),
        }
    }

    /// Search with the current contents of the search box
    pub fn search(&mut self) -> SearchResult {
        let query = self.search_text.clone();
        self.on_search_requested(&query)
    }

    /// Search with the toolbar quick search text
    pub fn quick_search(&mut self) -> SearchResult {
        let query = self.quick_search_text.clone();
        self.on_search_requested(&query)
    }

    pub fn on_category_changed(&mut self, category: &str) {
        if self.category == category {
            return;
        }
        self.category = category.to_string();
        self.log
            .append(LogLevel::Info, format!("Catégorie changée: {category}"));
        self.status = format!("Catégorie: {category}");
    }

    pub fn on_volume_changed(&mut self, volume: i32) {
        let volume = volume.clamp(*VOLUME_RANGE.start(), *VOLUME_RANGE.end());
        self.controls.volume = volume;
        self.status = format!("Volume: {volume}%");
    }

    /// "Nouveau": announce and start the progress animation
    pub fn new_file(&mut self) {
        info!("new file requested");
        self.notices
            .push_back(Notice::new("Nouveau", "Création d'un nouveau fichier..."));
        self.progress.start();
    }

    pub fn file_opened(&mut self, path: &Path) {
        info!(path = %path.display(), "file opened");
        self.log
            .append(LogLevel::Info, format!("Fichier ouvert: {}", path.display()));
    }

    pub fn file_saved(&mut self, path: &Path) {
        info!(path = %path.display(), "file saved");
        self.log
            .append(LogLevel::Info, format!("Fichier sauvegardé: {}", path.display()));
    }

    pub fn log_saved(&mut self, path: &Path) {
        self.log
            .append(LogLevel::Info, format!("Log sauvegardé: {}", path.display()));
    }

    /// Advance the progress animation by one timer interval
    pub fn tick_progress(&mut self) -> ProgressTick {
        let tick = self.progress.tick();
        if tick == ProgressTick::Completed {
            debug!("progress animation completed");
            self.notices
                .push_back(Notice::new("Terminé", "Opération terminée avec succès!"));
        }
        tick
    }

    /// Append a new row after the last one and select it
    pub fn add_row(&mut self) -> Result<usize, GridError> {
        let id = self.next_id();
        let row = vec![
            id.to_string(),
            format!("Élément {}", self.grid.row_count() + 1),
            "Type A".to_string(),
            Local::now().format("%Y-%m-%d").to_string(),
            "Actif".to_string(),
            "0.00".to_string(),
        ];
        let result = self.grid.push_row(row);
        match &result {
            Ok(row) => {
                self.selected_row = Some(*row);
                self.log.append(LogLevel::Info, format!("Ligne ajoutée: {id}"));
            }
            Err(err) => self.report_grid_error("Ajout impossible", err),
        }
        result
    }

    /// Overwrite one cell of the selected row
    pub fn edit_selected(&mut self, column: usize, text: &str) -> Result<(), GridError> {
        let Some(row) = self.require_selection("Modification") else {
            return Ok(());
        };
        match self.grid.set_cell(row, column, text) {
            Ok(_) => {
                self.log
                    .append(LogLevel::Info, format!("Ligne {} modifiée", row + 1));
                Ok(())
            }
            Err(err) => {
                self.report_grid_error("Modification impossible", &err);
                Err(err)
            }
        }
    }

    /// Remove the selected row and clear the selection
    pub fn delete_selected(&mut self) -> Result<(), GridError> {
        let Some(row) = self.require_selection("Suppression") else {
            return Ok(());
        };
        match self.grid.remove_row(row) {
            Ok(_) => {
                self.selected_row = None;
                self.log
                    .append(LogLevel::Info, format!("Ligne {} supprimée", row + 1));
                Ok(())
            }
            Err(err) => {
                self.report_grid_error("Suppression impossible", &err);
                Err(err)
            }
        }
    }

    pub fn select_tree_node(&mut self, path: NodePath) {
        if self.tree.node(&path).is_some() {
            self.selected_node = Some(path);
        }
    }

    /// Text of the details panel next to the tree
    pub fn tree_details(&self) -> String {
        self.selected_node
            .as_deref()
            .and_then(|path| self.tree.details(path))
            .unwrap_or_else(|| TREE_PLACEHOLDER.to_string())
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Next message box to show, oldest first
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    fn next_id(&self) -> u64 {
        (0..self.grid.row_count())
            .filter_map(|row| self.grid.cell(row, 0)?.parse::<u64>().ok())
            .max()
            .map_or(1000, |id| id + 1)
    }

    fn require_selection(&mut self, action: &str) -> Option<usize> {
        let row = self.selected_row.filter(|&row| row < self.grid.row_count());
        if row.is_none() {
            self.log.append(
                LogLevel::Warning,
                format!("{action}: aucune ligne sélectionnée"),
            );
        }
        row
    }

    fn report_grid_error(&mut self, context: &str, err: &GridError) {
        warn!(%err, context, "grid mutation rejected");
        self.log.append(LogLevel::Error, format!("{context}: {err}"));
    }
}

impl SearchHandler for Session {
    fn on_search_requested(&mut self, query: &str) -> SearchResult {
        let result = run_search(
            &self.index,
            &self.grid,
            query,
            &mut self.selected_row,
            &mut self.log,
        );
        match result {
            SearchResult::Found(_) => {
                let hits = self.index.search_all(&self.grid, query).len();
                self.status = format!("{hits} résultat(s) pour \"{query}\"");
            }
            SearchResult::NotFound if !query.is_empty() => {
                self.status = format!("Aucun résultat pour: {query}");
            }
            SearchResult::NotFound => {}
        }
        result
    }

    fn on_row_selected(&mut self, row: usize) {
        if row < self.grid.row_count() {
            self.selected_row = Some(row);
        } else {
            warn!(row, rows = self.grid.row_count(), "selection out of range ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogFilter;

    #[test]
    fn test_startup_state() {
        let session = Session::new();
        assert_eq!(session.grid.row_count(), 10);
        assert_eq!(session.log.len(), 3);
        assert_eq!(session.status, "Prêt");
        assert_eq!(session.category, "Tous");
        assert_eq!(
            session.log.to_text(LogFilter::Only(LogLevel::Warning)),
            "[ATTENTION] Configuration par défaut utilisée"
        );
    }

    #[test]
    fn test_search_selects_row() {
        let mut session = Session::new();
        session.search_text = "type a".to_string();
        assert_eq!(session.search(), SearchResult::Found(1));
        assert_eq!(session.selected_row, Some(1));
        assert_eq!(session.status, "5 résultat(s) pour \"type a\"");
    }

    #[test]
    fn test_miss_replaces_hit_status() {
        let mut session = Session::new();
        session.on_search_requested("type a");
        assert_eq!(session.on_search_requested("zzz"), SearchResult::NotFound);
        assert_eq!(session.selected_row, Some(1));
        assert_eq!(session.status, "Aucun résultat pour: zzz");
    }

    #[test]
    fn test_empty_search_is_noop() {
        let mut session = Session::new();
        session.on_row_selected(4);
        let before = session.log.len();

        assert_eq!(session.on_search_requested(""), SearchResult::NotFound);
        assert_eq!(session.selected_row, Some(4));
        assert_eq!(session.log.len(), before);
        assert_eq!(session.status, "Prêt");
    }

    #[test]
    fn test_row_selection_bounds() {
        let mut session = Session::new();
        session.on_row_selected(10);
        assert_eq!(session.selected_row, None);
        session.on_row_selected(9);
        assert_eq!(session.selected_row, Some(9));
    }

    #[test]
    fn test_category_and_volume() {
        let mut session = Session::new();
        session.on_category_changed("Clients");
        assert_eq!(session.status, "Catégorie: Clients");
        assert_eq!(session.log.last().unwrap().text, "Catégorie changée: Clients");

        session.on_volume_changed(150);
        assert_eq!(session.controls.volume, 100);
        assert_eq!(session.status, "Volume: 100%");
    }

    #[test]
    fn test_add_edit_delete() {
        let mut session = Session::new();

        let row = session.add_row().unwrap();
        assert_eq!(row, 10);
        assert_eq!(session.grid.cell(10, 0), Some("1010"));
        assert_eq!(session.selected_row, Some(10));

        session.edit_selected(1, "Renommé").unwrap();
        assert_eq!(session.grid.cell(10, 1), Some("Renommé"));
        assert!(session.edit_selected(6, "x").is_err());
        assert_eq!(session.log.last().unwrap().level, LogLevel::Error);

        session.delete_selected().unwrap();
        assert_eq!(session.grid.row_count(), 10);
        assert_eq!(session.selected_row, None);
    }

    #[test]
    fn test_delete_without_selection_warns() {
        let mut session = Session::new();
        session.delete_selected().unwrap();
        assert_eq!(session.grid.row_count(), 10);
        assert_eq!(session.log.last().unwrap().level, LogLevel::Warning);
    }

    #[test]
    fn test_new_file_runs_progress() {
        let mut session = Session::new();
        session.new_file();
        assert_eq!(session.take_notice().unwrap().title, "Nouveau");

        let mut ticks = 0;
        while session.tick_progress() != ProgressTick::Completed {
            ticks += 1;
        }
        assert_eq!(ticks, 50);
        assert_eq!(session.take_notice().unwrap().title, "Terminé");
        assert!(session.take_notice().is_none());
    }

    #[test]
    fn test_file_paths_are_logged() {
        let mut session = Session::new();
        session.file_opened(Path::new("/tmp/a.txt"));
        assert_eq!(session.log.last().unwrap().text, "Fichier ouvert: /tmp/a.txt");
        session.file_saved(Path::new("/tmp/b.dat"));
        assert_eq!(session.log.last().unwrap().text, "Fichier sauvegardé: /tmp/b.dat");
    }

    #[test]
    fn test_tree_details() {
        let mut session = Session::new();
        assert_eq!(session.tree_details(), TREE_PLACEHOLDER);

        session.select_tree_node(vec![0, 9]);
        assert_eq!(session.selected_node, None);

        session.select_tree_node(vec![0, 1, 2]);
        assert!(session.tree_details().contains("Valeur: 16.5"));
    }
}
