//! Full-depth minimax over every empty cell.
//!
//! No pruning and no move ordering beyond row-major order. The search places
//! a piece, recurses, and clears the cell again, so the board it was handed
//! is unchanged when it returns.

use serde::{Deserialize, Serialize};

use super::evaluate::{evaluate, Score};
use crate::game::{game_over, Board, Cell, Move, Player};

/// Outcome of a search. `row` and `col` are `-1` for a scored leaf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub row: i32,
    pub col: i32,
    pub score: Score,
}

impl SearchResult {
    /// A scored position with no move attached.
    pub fn leaf(score: Score) -> Self {
        SearchResult {
            row: -1,
            col: -1,
            score,
        }
    }

    /// The move this result points at, if any.
    pub fn best_move(&self) -> Option<Move> {
        if self.row < 0 || self.col < 0 {
            return None;
        }
        Some(Move::new(self.row as usize, self.col as usize))
    }
}

/// Search `depth` plies ahead with `player` to move.
///
/// The machine maximizes and the human minimizes. Among equally scored moves
/// the first in row-major order is kept.
pub fn minimax(board: &mut Board, depth: usize, player: Player) -> SearchResult {
    if depth == 0 || game_over(board) {
        return SearchResult::leaf(evaluate(board));
    }

    let mut best = match player {
        Player::Machine => SearchResult::leaf(f64::NEG_INFINITY),
        Player::Human => SearchResult::leaf(f64::INFINITY),
    };

    let moves: Vec<Move> = board.empty_cells().collect();
    for mv in moves {
        board.put(mv, player.to_cell());
        let mut result = minimax(board, depth - 1, player.other());
        board.put(mv, Cell::Empty);

        result.row = mv.row as i32;
        result.col = mv.col as i32;

        let improves = match player {
            Player::Machine => result.score > best.score,
            Player::Human => result.score < best.score,
        };
        if improves {
            best = result;
        }
    }

    best
}
