use crate::error::IllegalMove;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Blue,
}

/// The 6×7 grid. Row 0 is the top, row 5 the bottom; discs settle at the
/// lowest empty row of their column. Stored flat in row-major order so rows
/// are never handed out as independently mutable slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; ROWS * COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; ROWS * COLS],
        }
    }

    fn idx(row: usize, col: usize) -> usize {
        debug_assert!(row < ROWS && col < COLS);
        row * COLS + col
    }

    /// Get the cell at a specific position (row 0 is the top).
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::idx(row, col)]
    }

    /// Check if a column has no room left. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[Self::idx(0, col)] != Cell::Empty
    }

    /// Drop a disc in a column, returning the row where it landed.
    pub fn drop_disc(&mut self, col: usize, cell: Cell) -> Result<usize, IllegalMove> {
        if col >= COLS {
            return Err(IllegalMove::ColumnOutOfRange(col));
        }
        if self.is_column_full(col) {
            return Err(IllegalMove::ColumnFull(col));
        }

        // Lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.get(row, col) == Cell::Empty {
                self.cells[Self::idx(row, col)] = cell;
                return Ok(row);
            }
        }

        unreachable!("column {col} reported non-full but had no empty cell");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether the disc just placed at (row, col) completed a run of
    /// four. Only the four lines through that cell are scanned, so the cost
    /// is constant per move regardless of game length.
    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        // Each axis is scanned symmetrically outward from the landed disc,
        // so detection does not depend on which end of a run landed last.
        const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        AXES.iter()
            .any(|&(dr, dc)| self.run_length(row, col, dr, dc, cell) >= 4)
    }

    /// Length of the same-colored run through (row, col) along (dr, dc),
    /// counting both directions plus the cell itself.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        1 + self.count_toward(row, col, dr, dc, cell) + self.count_toward(row, col, -dr, -dc, cell)
    }

    fn count_toward(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.get(r as usize, c as usize) == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
