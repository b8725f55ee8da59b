use crate::ai::Agent;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, Move, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{info, warn};

use super::Symbols;

pub struct App {
    initial: GameState,
    game_state: GameState,
    agent: Box<dyn Agent>,
    symbols: Symbols,
    cursor: Move,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(initial: GameState, agent: Box<dyn Agent>, symbols: Symbols) -> Self {
        let center = initial.board().size() / 2;
        App {
            game_state: initial.clone(),
            initial,
            agent,
            symbols,
            cursor: Move::new(center, center),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            if self.machine_to_move() {
                self.machine_turn();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    fn machine_to_move(&self) -> bool {
        !self.game_state.is_terminal() && self.game_state.current_player() == Player::Machine
    }

    /// Let the agent move. Blocks for the length of the search.
    pub fn machine_turn(&mut self) {
        let Some(mv) = self.agent.select_move(&self.game_state) else {
            return;
        };
        match self.game_state.apply_move_mut(mv) {
            Ok(()) => self.announce_outcome(),
            Err(e) => {
                warn!(%mv, error = %e, "agent produced an illegal move");
                self.message = Some(format!("Machine move failed: {e}"));
            }
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let last = self.game_state.board().size() - 1;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.cursor.col = self.cursor.col.saturating_sub(1),
            KeyCode::Right => self.cursor.col = (self.cursor.col + 1).min(last),
            KeyCode::Up => self.cursor.row = self.cursor.row.saturating_sub(1),
            KeyCode::Down => self.cursor.row = (self.cursor.row + 1).min(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = self.initial.clone();
                self.message = Some("New game started!".to_string());
                info!("game restarted");
            }
            _ => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Place the human's piece under the cursor
    fn place_piece(&mut self) {
        if self.game_state.current_player() != Player::Human && !self.game_state.is_terminal() {
            return;
        }

        match self.game_state.apply_move_mut(self.cursor) {
            Ok(()) => self.announce_outcome(),
            Err(MoveError::InvalidMove { .. }) => {
                self.message = Some("Cell is taken!".to_string());
            }
            Err(MoveError::OutOfRange { .. }) => {
                self.message = Some("Cursor is off the board!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            info!(?outcome, "game finished");
            self.message = Some(match outcome {
                GameOutcome::Winner(Player::Human) => "You win!".to_string(),
                GameOutcome::Winner(Player::Machine) => "You lose!".to_string(),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.cursor,
            &self.symbols,
            &self.message,
        );
    }
}
