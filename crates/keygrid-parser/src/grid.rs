//! Bounds-checked character grid for a single diagram block.

use crate::connectivity::is_grid_char;

/// Character returned for every read outside the grid.
pub const BLANK: char = ' ';

/// The normalized rows of one diagram block.
///
/// Rows may have different lengths. Reads outside the stored characters
/// return [`BLANK`], which is never a grid character, so neighbour look-ups
/// at the edges need no special casing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from already normalized rows.
    pub fn from_rows(rows: impl IntoIterator<Item = Vec<char>>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Appends a row below the existing ones.
    pub fn push_row(&mut self, row: Vec<char>) {
        self.rows.push(row);
    }

    /// Drops every row, keeping the allocation for the next block.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the character at column `x` of row `y`, or [`BLANK`] if out of range.
    pub fn at(&self, x: usize, y: usize) -> char {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(BLANK)
    }

    /// Returns `true` if the character at `(x, y)` is a grid character.
    pub fn is_grid(&self, x: usize, y: usize) -> bool {
        is_grid_char(self.at(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: &[&str]) -> Grid {
        Grid::from_rows(lines.iter().map(|line| line.chars().collect()))
    }

    #[test]
    fn test_dimensions_of_ragged_rows() {
        let grid = grid(&["┌─┐", "│", "└─────┘"]);
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.at(0, 0), BLANK);
    }

    #[test]
    fn test_at_reads_stored_characters() {
        let grid = grid(&["┌─┐", "│x│"]);
        assert_eq!(grid.at(0, 0), '┌');
        assert_eq!(grid.at(1, 1), 'x');
        assert!(grid.is_grid(2, 1));
        assert!(!grid.is_grid(1, 1));
    }

    #[test]
    fn test_out_of_range_reads_are_blank() {
        let grid = grid(&["┌─┐", "│"]);
        assert_eq!(grid.at(3, 0), BLANK);
        assert_eq!(grid.at(1, 1), BLANK);
        assert_eq!(grid.at(0, 2), BLANK);
        assert_eq!(grid.at(usize::MAX, usize::MAX), BLANK);
        assert!(!grid.is_grid(5, 5));
    }

    #[test]
    fn test_clear_keeps_grid_reusable() {
        let mut grid = grid(&["┌┐"]);
        grid.clear();
        assert!(grid.is_empty());
        grid.push_row(vec!['│']);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.at(0, 0), '│');
    }
}
