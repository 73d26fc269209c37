use log::debug;

use crate::error::MoveError;
use crate::game::{evaluate, Board, Cell, Player, Window, CENTER_COL, COLS};

use super::mover::Mover;
use super::random::RandomMover;
use super::tactical::winning_column;

/// Point values used by the hard tier's positional score.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Three own pieces and one empty cell in a window
    pub own_three: i32,
    /// Two own pieces and two empty cells
    pub own_two: i32,
    /// Three opponent pieces and one empty cell
    pub opponent_three: i32,
    /// Two opponent pieces and two empty cells
    pub opponent_two: i32,
    /// Bonus per own piece in the center column
    pub center_piece: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            own_three: 500,
            own_two: 90,
            opponent_three: -9000,
            opponent_two: -200,
            center_piece: 95,
        }
    }
}

/// Score a single 4-cell window from `player`'s side.
pub fn score_window(window: &Window, player: Player, weights: &HeuristicWeights) -> i32 {
    let own = window.iter().filter(|&&c| c == player.to_cell()).count();
    let opp = window.iter().filter(|&&c| c == player.other().to_cell()).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    let mut score = 0;
    if own == 3 && empty == 1 {
        score += weights.own_three;
    } else if own == 2 && empty == 2 {
        score += weights.own_two;
    }

    if opp == 3 && empty == 1 {
        score += weights.opponent_three;
    } else if opp == 2 && empty == 2 {
        score += weights.opponent_two;
    }

    score
}

/// Positional score of a whole board for `player`: every window plus the
/// center column bonus.
pub fn column_score(board: &Board, player: Player, weights: &HeuristicWeights) -> i32 {
    let center = board.pieces_in_column(CENTER_COL, player) as i32 * weights.center_piece;
    let windows: i32 = board
        .windows()
        .map(|window| score_window(&window, player, weights))
        .sum();
    center + windows
}

/// How a single candidate column looks to the hard tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    /// The column cannot take a piece
    Full,
    /// Dropping here ends the game (win or draw)
    Terminal,
    /// Some opponent reply wins immediately
    Vetoed { score: i32 },
    Scored { score: i32 },
}

/// Assess dropping `player`'s piece into zero-based `col`.
pub fn assess_column(
    board: &Board,
    col: usize,
    player: Player,
    weights: &HeuristicWeights,
) -> Assessment {
    let Some(next) = board.simulate_drop(col, player) else {
        return Assessment::Full;
    };

    if evaluate(&next).is_terminal() {
        return Assessment::Terminal;
    }

    let score = column_score(&next, player, weights);
    if winning_column(&next, player.other()).is_some() {
        Assessment::Vetoed { score }
    } else {
        Assessment::Scored { score }
    }
}

/// Hard tier: one-ply positional scoring with a veto on columns that hand
/// the opponent an immediate win.
///
/// This is deliberately shallow: it looks at the candidate and one reply,
/// nothing deeper.
pub struct HeuristicMover {
    weights: HeuristicWeights,
    fallback: RandomMover,
}

impl HeuristicMover {
    pub fn new() -> Self {
        Self::with_weights(HeuristicWeights::default(), RandomMover::new())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_weights(HeuristicWeights::default(), RandomMover::seeded(seed))
    }

    pub fn with_weights(weights: HeuristicWeights, fallback: RandomMover) -> Self {
        HeuristicMover { weights, fallback }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }

    /// Pick a zero-based column without touching the board.
    /// `None` means every open column was vetoed.
    pub fn best_column(&self, board: &Board, player: Player) -> Option<usize> {
        let mut best: Option<(usize, i32)> = None;

        for col in 0..COLS {
            match assess_column(board, col, player, &self.weights) {
                Assessment::Full => {}
                Assessment::Terminal => return Some(col),
                Assessment::Vetoed { score } => {
                    debug!("{}: column {} vetoed (score {})", player.name(), col + 1, score);
                }
                Assessment::Scored { score } => {
                    debug!("{}: column {} scores {}", player.name(), col + 1, score);
                    if best.map_or(true, |(_, best_score)| score > best_score) {
                        best = Some((col, score));
                    }
                }
            }
        }

        best.map(|(col, _)| col)
    }
}

impl Default for HeuristicMover {
    fn default() -> Self {
        Self::new()
    }
}

impl Mover for HeuristicMover {
    fn choose_move(&mut self, board: &mut Board, player: Player) -> Result<usize, MoveError> {
        if board.is_full() {
            return Err(MoveError::NoOpenColumn);
        }

        match self.best_column(board, player) {
            Some(col) => {
                board.drop_piece(col, player)?;
                Ok(col + 1)
            }
            None => {
                debug!("{}: every column is vetoed, playing random", player.name());
                self.fallback.choose_move(board, player)
            }
        }
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
