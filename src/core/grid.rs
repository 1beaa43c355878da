//! Character Grid
//!
//! A 2D buffer of single characters, stored row-major. Every cell always
//! holds a character; the grid is never partially initialized.

use serde::{Deserialize, Serialize};

use super::rect::Point;

/// A row of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row, left to right
    pub cells: Vec<char>,
}

impl Row {
    pub fn new(cols: usize, fill: char) -> Self {
        Self {
            cells: vec![fill; cols],
        }
    }

    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// The row's characters concatenated with no separator
    pub fn text(&self) -> String {
        self.cells.iter().collect()
    }
}

/// The character grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Row>,
    cols: usize,
    num_rows: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize, fill: char) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new(cols, fill)).collect(),
            cols,
            num_rows: rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.num_rows
    }

    /// Whether `(x, y)` lies in `[0, cols) x [0, rows)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.contains_col(x) && self.contains_row(y)
    }

    pub fn contains_col(&self, x: i32) -> bool {
        usize::try_from(x).map_or(false, |x| x < self.cols)
    }

    pub fn contains_row(&self, y: i32) -> bool {
        usize::try_from(y).map_or(false, |y| y < self.num_rows)
    }

    /// Get the character at a cell
    pub fn cell(&self, x: i32, y: i32) -> Option<char> {
        let (col, row) = self.index(x, y)?;
        Some(self.rows[row].cells[col])
    }

    /// Write a cell. Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, ch: char) -> bool {
        match self.index(x, y) {
            Some((col, row)) => {
                self.rows[row].cells[col] = ch;
                true
            }
            None => false,
        }
    }

    /// Exchange two cells. Returns false when either is out of bounds.
    pub fn swap(&mut self, a: Point, b: Point) -> bool {
        let (Some((ac, ar)), Some((bc, br))) = (self.index(a.x, a.y), self.index(b.x, b.y)) else {
            return false;
        };
        if ar == br {
            self.rows[ar].cells.swap(ac, bc);
        } else {
            let tmp = self.rows[ar].cells[ac];
            self.rows[ar].cells[ac] = self.rows[br].cells[bc];
            self.rows[br].cells[bc] = tmp;
        }
        true
    }

    /// Get a reference to a row
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Set every cell to `ch`
    pub fn fill(&mut self, ch: char) {
        for row in &mut self.rows {
            row.fill(ch);
        }
    }

    /// Each row as a string, top to bottom
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(Row::text).collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < self.cols)?;
        let row = usize::try_from(y).ok().filter(|&r| r < self.num_rows)?;
        Some((col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(80, 24, '.');
        assert_eq!(grid.cols(), 80);
        assert_eq!(grid.rows(), 24);
        assert!(grid.iter_rows().all(|r| r.cells.iter().all(|&c| c == '.')));
    }

    #[test]
    fn test_grid_cell_access() {
        let mut grid = Grid::new(80, 24, ' ');

        assert!(grid.set(10, 5, 'A'));
        assert_eq!(grid.cell(10, 5), Some('A'));
    }

    #[test]
    fn test_grid_out_of_bounds() {
        let mut grid = Grid::new(4, 3, ' ');

        assert_eq!(grid.cell(4, 0), None);
        assert_eq!(grid.cell(0, 3), None);
        assert_eq!(grid.cell(-1, 0), None);
        assert!(!grid.set(0, -1, 'X'));
        assert!(!grid.set(4, 2, 'X'));
        assert_eq!(grid.lines(), vec!["    "; 3]);
    }

    #[test]
    fn test_grid_swap() {
        let mut grid = Grid::new(3, 2, ' ');
        grid.set(0, 0, 'A');
        grid.set(2, 0, 'B');
        grid.set(1, 1, 'C');

        // Same row
        assert!(grid.swap(Point::new(0, 0), Point::new(2, 0)));
        assert_eq!(grid.lines(), vec!["B A", " C "]);

        // Across rows
        assert!(grid.swap(Point::new(0, 0), Point::new(1, 1)));
        assert_eq!(grid.lines(), vec!["C A", " B "]);

        assert!(!grid.swap(Point::new(0, 0), Point::new(3, 0)));
    }

    #[test]
    fn test_row_text() {
        let mut row = Row::new(5, '-');
        row.cells[2] = '+';
        assert_eq!(row.text(), "--+--");

        row.fill('=');
        assert_eq!(row.text(), "=====");
    }
}
