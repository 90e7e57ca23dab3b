//! Row search over a [`GridView`]
//!
//! The search is a plain linear scan in row-major order with no cached
//! index. It recomputes over whatever the grid holds at call time.

use crate::grid::GridView;

/// Outcome of a row search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// First matching row (zero-based)
    Found(usize),
    NotFound,
}

impl SearchResult {
    pub fn row(self) -> Option<usize> {
        match self {
            SearchResult::Found(row) => Some(row),
            SearchResult::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, SearchResult::Found(_))
    }
}

/// Case-insensitive substring search over grid cells.
///
/// Stateless: calling [`RowSearchIndex::search`] twice on the same grid and
/// query always yields the same result.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowSearchIndex;

impl RowSearchIndex {
    pub fn new() -> Self {
        Self
    }

    /// Find the first row containing a cell that matches `query`.
    ///
    /// An empty query performs no scan and returns [`SearchResult::NotFound`].
    pub fn search<G: GridView + ?Sized>(&self, grid: &G, query: &str) -> SearchResult {
        if query.is_empty() {
            return SearchResult::NotFound;
        }

        let needle = fold_case(query);
        (0..grid.row_count())
            .find(|&row| row_matches(grid, row, &needle))
            .map_or(SearchResult::NotFound, SearchResult::Found)
    }

    /// Every matching row in ascending order, same rules as [`Self::search`]
    pub fn search_all<G: GridView + ?Sized>(&self, grid: &G, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = fold_case(query);
        (0..grid.row_count())
            .filter(|&row| row_matches(grid, row, &needle))
            .collect()
    }
}

fn row_matches<G: GridView + ?Sized>(grid: &G, row: usize, needle: &str) -> bool {
    (0..grid.column_count()).any(|column| {
        grid.cell(row, column)
            .is_some_and(|text| fold_case(text).contains(needle))
    })
}

/// Lowercase mapping used on both sides of the comparison.
///
/// Folds one character at a time so a letter maps the same way wherever it
/// sits in the text (`Σ` is always `σ`, never the word-final `ς`).
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::sample;

    fn ascii_sample() -> Grid {
        let rows = (0..10)
            .map(|i| {
                vec![
                    (1000 + i).to_string(),
                    format!("Element {}", i + 1),
                    if i % 2 == 1 { "Type A" } else { "Type B" }.to_string(),
                ]
            })
            .collect();
        Grid::from_rows(["ID", "Nom", "Type"], rows).unwrap()
    }

    #[test]
    fn test_finds_last_row() {
        let grid = ascii_sample();
        assert_eq!(RowSearchIndex::new().search(&grid, "Element 10"), SearchResult::Found(9));
    }

    #[test]
    fn test_first_match_wins() {
        // "Element 1" is also a prefix of "Element 10"; row 0 comes first
        let grid = ascii_sample();
        assert_eq!(RowSearchIndex::new().search(&grid, "element 1"), SearchResult::Found(0));
    }

    #[test]
    fn test_empty_query() {
        let grid = ascii_sample();
        assert_eq!(RowSearchIndex::new().search(&grid, ""), SearchResult::NotFound);
        assert!(RowSearchIndex::new().search_all(&grid, "").is_empty());
    }

    #[test]
    fn test_no_match() {
        let grid = ascii_sample();
        assert_eq!(RowSearchIndex::new().search(&grid, "zzz"), SearchResult::NotFound);
    }

    #[test]
    fn test_match_in_different_columns() {
        let grid = Grid::from_rows(
            ["a", "b"],
            vec![
                vec!["x".into(), "y".into()],
                vec!["nothing".into(), "Type A".into()],
                vec!["Type A".into(), "z".into()],
            ],
        )
        .unwrap();
        assert_eq!(RowSearchIndex::new().search(&grid, "type a"), SearchResult::Found(1));
        assert_eq!(RowSearchIndex::new().search_all(&grid, "TYPE A"), vec![1, 2]);
    }

    #[test]
    fn test_accented_sample() {
        let grid = sample::sample_grid();
        let index = RowSearchIndex::new();
        assert_eq!(index.search(&grid, "élément 10"), SearchResult::Found(9));
        assert_eq!(index.search(&grid, "ÉLÉMENT 3"), SearchResult::Found(2));
        assert_eq!(index.search(&grid, "1005"), SearchResult::Found(5));
        assert_eq!(index.search(&grid, "inactif"), SearchResult::Found(0));
    }

    #[test]
    fn test_result_helpers() {
        assert_eq!(SearchResult::Found(4).row(), Some(4));
        assert!(SearchResult::Found(0).is_found());
        assert_eq!(SearchResult::NotFound.row(), None);
    }

    #[test]
    fn test_fold_is_position_independent() {
        let grid = Grid::from_rows(["Nom"], vec![vec!["ΟΔΟΣ".to_string()]]).unwrap();
        let index = RowSearchIndex::new();
        for query in ["Σ", "οσ", "ΟΣ", "ΟΔΟΣ"] {
            assert_eq!(index.search(&grid, query), SearchResult::Found(0), "{query}");
        }
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
    }
}
