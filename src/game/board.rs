use super::player::Player;
use crate::error::{BoardError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTER_COL: usize = COLS / 2;
pub const WINDOW_LEN: usize = 4;

/// Row/column step vectors for horizontal, vertical and both diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Taken(Player),
}

/// Four consecutive cells along one line.
pub type Window = [Cell; WINDOW_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from a 0/1/2 grid, row 0 at the top.
    ///
    /// The grid must already satisfy gravity: no piece may sit above an
    /// empty cell.
    pub fn from_grid(grid: [[u8; COLS]; ROWS]) -> Result<Self, BoardError> {
        let mut board = Board::new();
        for (row, values) in grid.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] = match value {
                    0 => Cell::Empty,
                    1 => Cell::Taken(Player::One),
                    2 => Cell::Taken(Player::Two),
                    _ => return Err(BoardError::InvalidCell { row, col, value }),
                };
            }
        }

        for row in 0..ROWS - 1 {
            for col in 0..COLS {
                if board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped into `col` would land on, if any
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// `col` is zero-based; errors report the one-based column.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col + 1));
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col + 1))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Copy of this board with `player`'s piece dropped into `col`,
    /// or `None` when the column cannot take it. `self` is untouched.
    pub fn simulate_drop(&self, col: usize, player: Player) -> Option<Board> {
        let mut next = *self;
        next.drop_piece(col, player).ok().map(|_| next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Zero-based columns that can still take a piece
    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Number of `player`'s pieces in a column
    pub fn pieces_in_column(&self, col: usize, player: Player) -> usize {
        (0..ROWS)
            .filter(|&row| self.cells[row][col] == player.to_cell())
            .count()
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Every 4-cell window along rows, columns and both diagonals.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        DIRECTIONS.into_iter().flat_map(move |(dr, dc)| {
            (0..ROWS).flat_map(move |row| {
                (0..COLS).filter_map(move |col| self.window(row, col, dr, dc))
            })
        })
    }

    /// The window starting at (row, col) stepping by (dr, dc), if it fits.
    fn window(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Window> {
        let span = (WINDOW_LEN - 1) as isize;
        let end_row = row as isize + span * dr;
        let end_col = col as isize + span * dc;
        if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
            return None;
        }

        let mut window = [Cell::Empty; WINDOW_LEN];
        for (i, cell) in window.iter_mut().enumerate() {
            let r = (row as isize + i as isize * dr) as usize;
            let c = (col as isize + i as isize * dc) as usize;
            *cell = self.cells[r][c];
        }
        Some(window)
    }

    /// Whether `player` owns every cell of some window
    pub fn has_four(&self, player: Player) -> bool {
        let cell = player.to_cell();
        self.windows().any(|window| window.iter().all(|&c| c == cell))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Taken(Player::One));

        // Drop second piece in same column
        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Taken(Player::Two));
    }

    #[test]
    fn test_drops_fill_bottom_up_without_gaps() {
        let mut board = Board::new();
        for expected_row in (0..ROWS).rev() {
            assert_eq!(board.drop_piece(2, Player::One), Ok(expected_row));
            for row in expected_row..ROWS {
                assert_ne!(board.get(row, 2), Cell::Empty);
            }
            for row in 0..expected_row {
                assert_eq!(board.get(row, 2), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Player::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(
            board.drop_piece(0, Player::Two),
            Err(MoveError::ColumnFull(1))
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(MoveError::InvalidColumn(8))
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.open_columns().count(), 0);
    }

    #[test]
    fn test_copy_is_isolated() {
        let mut original = Board::new();
        original.drop_piece(1, Player::One).unwrap();

        let mut copy = original;
        copy.drop_piece(1, Player::Two).unwrap();
        copy.drop_piece(5, Player::Two).unwrap();

        assert_eq!(original.get(4, 1), Cell::Empty);
        assert_eq!(original.get(5, 5), Cell::Empty);
        assert_eq!(original.count(Cell::Empty), ROWS * COLS - 1);
    }

    #[test]
    fn test_simulate_drop_leaves_original_untouched() {
        let board = Board::new();
        let next = board.simulate_drop(4, Player::Two).unwrap();
        assert_eq!(next.get(5, 4), Cell::Taken(Player::Two));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_simulate_drop_on_full_column() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop_piece(6, Player::Two).unwrap();
        }
        assert!(board.simulate_drop(6, Player::One).is_none());
    }

    #[test]
    fn test_window_count() {
        // 24 horizontal + 21 vertical + 12 + 12 diagonal
        assert_eq!(Board::new().windows().count(), 69);
    }

    #[test]
    fn test_from_grid_rejects_floating_piece() {
        let mut grid = [[0u8; COLS]; ROWS];
        grid[3][2] = 1;
        assert_eq!(
            Board::from_grid(grid),
            Err(BoardError::FloatingPiece { row: 3, col: 2 })
        );
    }

    #[test]
    fn test_from_grid_rejects_unknown_value() {
        let mut grid = [[0u8; COLS]; ROWS];
        grid[5][0] = 3;
        assert_eq!(
            Board::from_grid(grid),
            Err(BoardError::InvalidCell { row: 5, col: 0, value: 3 })
        );
    }

    #[test]
    fn test_from_grid_matches_drops() {
        let mut grid = [[0u8; COLS]; ROWS];
        grid[5][3] = 1;
        grid[4][3] = 2;
        let mut dropped = Board::new();
        dropped.drop_piece(3, Player::One).unwrap();
        dropped.drop_piece(3, Player::Two).unwrap();
        assert_eq!(Board::from_grid(grid).unwrap(), dropped);
    }

    #[test]
    fn test_horizontal_four() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(board.has_four(Player::One));
        assert!(!board.has_four(Player::Two));
    }

    #[test]
    fn test_vertical_four() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Player::Two).unwrap();
        }
        assert!(board.has_four(Player::Two));
    }

    #[test]
    fn test_diagonal_up_four() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Player::One).unwrap();

        board.drop_piece(1, Player::Two).unwrap();
        board.drop_piece(1, Player::One).unwrap();

        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        assert!(!board.has_four(Player::One));
        board.drop_piece(3, Player::One).unwrap();

        assert!(board.has_four(Player::One));
    }

    #[test]
    fn test_diagonal_down_four() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::One).unwrap();

        board.drop_piece(5, Player::Two).unwrap();
        board.drop_piece(5, Player::One).unwrap();

        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::One).unwrap();

        assert!(board.has_four(Player::One));
    }

    #[test]
    fn test_no_four_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(!board.has_four(Player::One));
    }
}
