use super::{win, Board, Move, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on an empty standard board
    pub fn initial(first: Player) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Resume from an arbitrary board. The board may already be decided.
    pub fn from_board(board: Board, first: Player) -> Self {
        let outcome = Self::outcome_of(&board);
        GameState {
            board,
            current_player: first,
            outcome,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves in row-major order; none once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, mv: Move) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(mv)?;
        Ok(next)
    }

    /// Apply a move for the current player in place.
    pub fn apply_move_mut(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.set(mv.row, mv.col, self.current_player)?;

        if win::wins(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }

    fn outcome_of(board: &Board) -> Option<GameOutcome> {
        match win::winner(board) {
            Some(player) => Some(GameOutcome::Winner(player)),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}
