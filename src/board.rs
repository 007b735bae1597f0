/// A zero-indexed `(row, column)` position, row 0 being the top row.
pub type Coord = (usize, usize);

/// The grid of a single game.
///
/// Cells are stored row-major, top row first, so the last row is where a
/// dropped piece settles first. A cell holds `None` while empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board<P> {
    cells: Vec<Option<P>>,
    heights: Vec<usize>, // pieces stacked in each column
    rows: usize,
    columns: usize,
}

impl<P> Board<P> {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            cells: std::iter::repeat_with(|| None).take(rows * columns).collect(),
            heights: vec![0; columns],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The occupant of a cell, or `None` when it is empty or off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<&P> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells[row * self.columns + column].as_ref()
    }

    /// Signed lookup for line walks that may step off any edge.
    pub(crate) fn get_signed(&self, row: isize, column: isize) -> Option<&P> {
        if row < 0 || column < 0 {
            return None;
        }
        self.get(row as usize, column as usize)
    }

    /// Number of pieces in a zero-indexed column.
    pub fn height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.height(column) >= self.rows
    }

    /// Rows top to bottom, each as a slice of cells left to right.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Option<P>]> {
        self.cells.chunks(self.columns.max(1))
    }

    /// Drops a piece into a zero-indexed column and returns where it landed.
    ///
    /// Returns `None` if the column is full or off the board; the grid is left
    /// untouched in that case.
    pub(crate) fn drop_piece(&mut self, column: usize, piece: P) -> Option<Coord> {
        if column >= self.columns || self.is_column_full(column) {
            return None;
        }
        let row = self.rows - 1 - self.heights[column];
        debug_assert!(self.cells[row * self.columns + column].is_none());
        self.cells[row * self.columns + column] = Some(piece);
        self.heights[column] += 1;
        Some((row, column))
    }
}
