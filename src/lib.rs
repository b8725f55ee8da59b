//! # Five in a Row
//!
//! Generalized tic-tac-toe on a 10x10 board where five in a row wins, played
//! against a machine that searches the full game tree with minimax.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, win detection, game state machine, text parsing
//! - [`ai`]: Evaluator, minimax search, agents
//! - [`ui`]: Line-based console game and a ratatui full-screen view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//!
//! Full-depth search grows factorially with the number of empty cells, so
//! positions far from the end of the game take impractically long unless
//! `search.max_depth` is set.

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
