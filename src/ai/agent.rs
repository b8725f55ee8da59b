use std::time::Instant;

use tracing::{debug, instrument};

use super::evaluate::evaluate;
use super::minimax::{minimax, SearchResult};
use super::random::RandomAgent;
use crate::game::{GameState, Move};

/// Universal interface for anything that picks moves.
pub trait Agent {
    /// Pick a move for the player to move, or `None` if the game is over.
    fn select_move(&mut self, state: &GameState) -> Option<Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Exhaustive minimax player.
///
/// On a completely empty board a full search is out of reach, so the agent
/// opens on a uniformly random cell instead. Everywhere else it searches to
/// the end of the game, or to `max_depth` plies when a cap is configured.
pub struct MinimaxAgent {
    max_depth: Option<usize>,
    opening: RandomAgent,
    last_result: Option<SearchResult>,
}

impl MinimaxAgent {
    pub fn new(max_depth: Option<usize>) -> Self {
        MinimaxAgent {
            max_depth,
            opening: RandomAgent::new(),
            last_result: None,
        }
    }

    /// Deterministic opening choice for reproducible games.
    pub fn with_seed(max_depth: Option<usize>, seed: u64) -> Self {
        MinimaxAgent {
            max_depth,
            opening: RandomAgent::with_seed(seed),
            last_result: None,
        }
    }

    /// Result of the most recent [`search`](Self::search).
    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }

    /// Plies the search will look ahead on a board with `empty` open cells.
    pub fn depth_for(&self, empty: usize) -> usize {
        match self.max_depth {
            Some(cap) => empty.min(cap),
            None => empty,
        }
    }

    /// Search for the player to move. Returns `None` on a finished game.
    #[instrument(skip(self, state), fields(player = ?state.current_player()))]
    pub fn search(&mut self, state: &GameState) -> Option<SearchResult> {
        if state.is_terminal() {
            return None;
        }

        let board = state.board();
        let result = if board.is_empty() {
            let mv = self.opening.select_move(state)?;
            debug!(%mv, "opening on a random cell");
            SearchResult {
                row: mv.row as i32,
                col: mv.col as i32,
                score: evaluate(board),
            }
        } else {
            let depth = self.depth_for(board.empty_count());
            let started = Instant::now();
            let mut scratch = board.clone();
            let result = minimax(&mut scratch, depth, state.current_player());
            let elapsed_ms = started.elapsed().as_millis() as u64;
            debug!(
                depth,
                row = result.row,
                col = result.col,
                score = result.score,
                elapsed_ms,
                "search finished"
            );
            result
        };

        self.last_result = Some(result);
        Some(result)
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, state: &GameState) -> Option<Move> {
        self.search(state)?.best_move()
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
