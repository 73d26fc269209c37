use super::board::{Board, Cell};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Win(player) => Some(player),
            _ => None,
        }
    }
}

/// Classify a board: Player One's line is checked before Player Two's,
/// and a draw needs every cell filled.
pub fn evaluate(board: &Board) -> GameResult {
    for player in [Player::One, Player::Two] {
        if board.has_four(player) {
            return GameResult::Win(player);
        }
    }

    if board.count(Cell::Empty) > 0 {
        GameResult::InProgress
    } else {
        GameResult::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    /// Full board with no four-in-a-row anywhere.
    const DRAWN_GRID: [[u8; COLS]; ROWS] = [
        [1, 1, 2, 1, 1, 2, 1],
        [2, 2, 1, 2, 2, 1, 2],
        [1, 1, 2, 1, 1, 2, 1],
        [2, 2, 1, 2, 2, 1, 2],
        [1, 1, 2, 1, 1, 2, 1],
        [2, 2, 1, 2, 2, 1, 2],
    ];

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameResult::InProgress);
    }

    #[test]
    fn horizontal_run_completed_in_fourth_column_wins() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert_eq!(evaluate(&board), GameResult::InProgress);

        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(evaluate(&board), GameResult::Win(Player::One));
    }

    #[test]
    fn vertical_win_for_player_two() {
        let mut board = Board::new();
        board.drop_piece(0, Player::One).unwrap();
        for _ in 0..4 {
            board.drop_piece(0, Player::Two).unwrap();
        }
        assert_eq!(evaluate(&board), GameResult::Win(Player::Two));
    }

    #[test]
    fn win_found_from_either_end_of_the_line() {
        // Same diagonal built from its low-left end and its high-left end.
        let rising = Board::from_grid([
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 2, 0, 0, 0],
            [0, 0, 2, 1, 0, 0, 0],
            [0, 2, 1, 1, 0, 0, 0],
            [2, 1, 1, 1, 0, 0, 0],
        ])
        .unwrap();
        let mirrored = Board::from_grid([
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 2, 0, 0, 0],
            [0, 0, 0, 1, 2, 0, 0],
            [0, 0, 0, 1, 1, 2, 0],
            [0, 0, 0, 1, 1, 1, 2],
        ])
        .unwrap();
        assert_eq!(evaluate(&rising), GameResult::Win(Player::Two));
        assert_eq!(evaluate(&mirrored), GameResult::Win(Player::Two));
    }

    #[test]
    fn player_one_checked_first() {
        let board = Board::from_grid([
            [0, 0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0],
            [1, 0, 0, 0, 0, 0, 2],
            [1, 0, 0, 0, 0, 0, 2],
            [1, 0, 0, 0, 0, 0, 2],
            [1, 0, 0, 0, 0, 0, 2],
        ])
        .unwrap();
        assert_eq!(evaluate(&board), GameResult::Win(Player::One));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = Board::from_grid(DRAWN_GRID).unwrap();
        assert!(board.is_full());
        assert_eq!(evaluate(&board), GameResult::Draw);
    }

    #[test]
    fn result_helpers() {
        assert!(GameResult::Draw.is_terminal());
        assert!(!GameResult::InProgress.is_terminal());
        assert_eq!(GameResult::Win(Player::Two).winner(), Some(Player::Two));
        assert_eq!(GameResult::Draw.winner(), None);
    }
}
