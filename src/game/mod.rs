//! Core game logic: board, players, win detection, the game state machine,
//! and parsing of board files and typed moves.

mod board;
pub mod parse;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, Move, SIZE, WIN_CONDITION};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{game_over, winner, wins};
