//! Boundary between the core logic and whatever UI hosts it
//!
//! The UI layer never touches the grid search directly. It calls a
//! [`SearchHandler`], and the effects of a search flow back out through a
//! [`SelectionSink`] and a [`LogSink`].

use tracing::debug;

use crate::grid::GridView;
use crate::log::{LogBuffer, LogLevel};
use crate::search::{RowSearchIndex, SearchResult};

/// Something that can mark a table row as selected
pub trait SelectionSink {
    fn select_row(&mut self, row: usize);
}

/// Something that can receive human-readable status lines
pub trait LogSink {
    fn append(&mut self, level: LogLevel, line: String);
}

/// Capability interface the UI uses to drive the data tab
pub trait SearchHandler {
    /// Run a search with the text of the search box
    fn on_search_requested(&mut self, query: &str) -> SearchResult;

    /// The user clicked a row
    fn on_row_selected(&mut self, row: usize);
}

impl LogSink for LogBuffer {
    fn append(&mut self, level: LogLevel, line: String) {
        LogBuffer::append(self, level, line);
    }
}

impl SelectionSink for Option<usize> {
    fn select_row(&mut self, row: usize) {
        *self = Some(row);
    }
}

/// Search `grid` and apply the outcome to the sinks.
///
/// An empty query does nothing at all. Otherwise the query is logged, a hit
/// selects the row and logs its one-based number, and a miss leaves the
/// selection untouched.
pub fn run_search<G: GridView + ?Sized>(
    index: &RowSearchIndex,
    grid: &G,
    query: &str,
    selection: &mut dyn SelectionSink,
    log: &mut dyn LogSink,
) -> SearchResult {
    if query.is_empty() {
        return SearchResult::NotFound;
    }

    log.append(LogLevel::Info, format!("Recherche: {query}"));
    let result = index.search(grid, query);
    debug!(query, ?result, "row search");

    match result {
        SearchResult::Found(row) => {
            selection.select_row(row);
            log.append(LogLevel::Info, format!("Trouvé dans ligne {}", row + 1));
        }
        SearchResult::NotFound => {
            log.append(LogLevel::Info, format!("Aucun résultat pour: {query}"));
        }
    }
    result
}

/// Adapter turning a closure into a [`SelectionSink`]
pub struct FnSelectionSink<F>(pub F);

impl<F: FnMut(usize)> SelectionSink for FnSelectionSink<F> {
    fn select_row(&mut self, row: usize) {
        (self.0)(row);
    }
}

/// Adapter turning a closure into a [`LogSink`]
pub struct FnLogSink<F>(pub F);

impl<F: FnMut(LogLevel, String)> LogSink for FnLogSink<F> {
    fn append(&mut self, level: LogLevel, line: String) {
        (self.0)(level, line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_grid;

    #[test]
    fn test_found_selects_and_logs() {
        let grid = sample_grid();
        let mut selected: Option<usize> = None;
        let mut lines: Vec<String> = Vec::new();

        let result = run_search(
            &RowSearchIndex::new(),
            &grid,
            "Élément 10",
            &mut selected,
            &mut FnLogSink(|_: LogLevel, line: String| lines.push(line)),
        );

        assert_eq!(result, SearchResult::Found(9));
        assert_eq!(selected, Some(9));
        assert_eq!(lines, ["Recherche: Élément 10", "Trouvé dans ligne 10"]);
    }

    #[test]
    fn test_miss_keeps_selection() {
        let grid = sample_grid();
        let mut selected = Some(3);
        let mut log = LogBuffer::new();

        let result = run_search(&RowSearchIndex::new(), &grid, "zzz", &mut selected, &mut log);

        assert_eq!(result, SearchResult::NotFound);
        assert_eq!(selected, Some(3));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().unwrap().text, "Aucun résultat pour: zzz");
    }

    #[test]
    fn test_empty_query_is_silent() {
        let grid = sample_grid();
        let mut calls = 0;
        let mut log = LogBuffer::new();

        let result = run_search(
            &RowSearchIndex::new(),
            &grid,
            "",
            &mut FnSelectionSink(|_: usize| calls += 1),
            &mut log,
        );

        assert_eq!(result, SearchResult::NotFound);
        assert_eq!(calls, 0);
        assert!(log.is_empty());
    }
}
