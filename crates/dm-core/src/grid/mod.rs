//! Tabular dataset backing the data tab
//!
//! A [`Grid`] is a list of rows of text cells with a fixed column count
//! taken from its headers. Every mutation checks the row width, so a ragged
//! grid cannot be built through this API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by grid mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("row has {found} cells, expected {expected}")]
    RowWidth { expected: usize, found: usize },

    #[error("row {index} out of range (rows: {len})")]
    RowOutOfRange { index: usize, len: usize },

    #[error("column {index} out of range (columns: {len})")]
    ColumnOutOfRange { index: usize, len: usize },
}

/// Read-only access to a rectangular table of text cells.
///
/// The search engine only ever sees a grid through this trait, so any table
/// model that can hand out cell text by coordinate can be searched.
pub trait GridView {
    /// Number of rows
    fn row_count(&self) -> usize;

    /// Number of columns (identical for every row)
    fn column_count(&self) -> usize;

    /// Text of the cell at `(row, column)`, `None` when out of range
    fn cell(&self, row: usize, column: usize) -> Option<&str>;
}

/// In-memory grid of text cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create an empty grid with the given column headers
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a grid from headers and rows, rejecting the first row of the wrong width
    pub fn from_rows<I, S>(headers: I, rows: Vec<Vec<String>>) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::new(headers);
        for row in rows {
            grid.push_row(row)?;
        }
        Ok(grid)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row at the end
    pub fn push_row(&mut self, row: Vec<String>) -> Result<usize, GridError> {
        self.check_width(&row)?;
        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    /// Insert a row before `index`; `index == row_count()` appends
    pub fn insert_row(&mut self, index: usize, row: Vec<String>) -> Result<(), GridError> {
        if index > self.rows.len() {
            return Err(GridError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        self.check_width(&row)?;
        self.rows.insert(index, row);
        Ok(())
    }

    /// Replace the text of one cell, returning the previous text
    pub fn set_cell(
        &mut self,
        row: usize,
        column: usize,
        text: impl Into<String>,
    ) -> Result<String, GridError> {
        let columns = self.headers.len();
        let len = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(GridError::RowOutOfRange { index: row, len })?;
        let cell = cells.get_mut(column).ok_or(GridError::ColumnOutOfRange {
            index: column,
            len: columns,
        })?;
        Ok(std::mem::replace(cell, text.into()))
    }

    /// Remove a row and return its cells
    pub fn remove_row(&mut self, index: usize) -> Result<Vec<String>, GridError> {
        if index >= self.rows.len() {
            return Err(GridError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    fn check_width(&self, row: &[String]) -> Result<(), GridError> {
        if row.len() != self.headers.len() {
            return Err(GridError::RowWidth {
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        Ok(())
    }
}

impl GridView for Grid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.headers.len()
    }

    fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_push_row_checks_width() {
        let mut grid = Grid::new(["a", "b"]);
        assert_eq!(grid.push_row(row(&["1", "2"])), Ok(0));
        assert_eq!(
            grid.push_row(row(&["1"])),
            Err(GridError::RowWidth { expected: 2, found: 1 })
        );
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Grid::from_rows(["a", "b"], vec![row(&["1", "2"]), row(&["1", "2", "3"])]);
        assert_eq!(result, Err(GridError::RowWidth { expected: 2, found: 3 }));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut grid = Grid::from_rows(["a"], vec![row(&["x"]), row(&["z"])]).unwrap();
        grid.insert_row(1, row(&["y"])).unwrap();
        assert_eq!(grid.cell(1, 0), Some("y"));

        assert!(matches!(
            grid.insert_row(5, row(&["w"])),
            Err(GridError::RowOutOfRange { index: 5, len: 3 })
        ));

        assert_eq!(grid.remove_row(0).unwrap(), row(&["x"]));
        assert_eq!(grid.row_count(), 2);
        assert!(grid.remove_row(2).is_err());
    }

    #[test]
    fn test_set_cell() {
        let mut grid = Grid::from_rows(["a", "b"], vec![row(&["1", "2"])]).unwrap();
        assert_eq!(grid.set_cell(0, 1, "two").unwrap(), "2");
        assert_eq!(grid.cell(0, 1), Some("two"));
        assert_eq!(
            grid.set_cell(0, 2, "x"),
            Err(GridError::ColumnOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            grid.set_cell(3, 0, "x"),
            Err(GridError::RowOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_view_out_of_range() {
        let grid = Grid::new(["a"]);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.cell(0, 0), None);
    }
}
