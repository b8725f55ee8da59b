//! Line-based game: setup dialog, numbered move entry, text board.
//!
//! End of input at any prompt ends the session with a farewell message. The
//! binary prints the same farewell from its Ctrl-C handler.

use std::io::{self, BufRead, ErrorKind, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::{info, warn};

use super::Symbols;
use crate::ai::Agent;
use crate::config::UiConfig;
use crate::game::parse::{board_from_rows, parse_move_number, parse_row};
use crate::game::{Board, GameOutcome, GameState, Player};

const FAREWELL: &str = "Goodbye";

/// Everything the setup dialog decides.
#[derive(Debug, Clone)]
pub struct Setup {
    pub board: Board,
    pub symbols: Symbols,
    pub first: Player,
}

/// Answers already known before the dialog starts, e.g. from the command line.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub board: Option<Board>,
    pub symbols: Option<Symbols>,
    pub first: Option<Player>,
}

/// Write the message shown when the player leaves.
pub fn write_farewell<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{FAREWELL}")?;
    output.flush()
}

/// Draw the board as a bordered text grid.
pub fn render_board(board: &Board, symbols: &Symbols) -> String {
    let line = "-".repeat(board.size() * 4 + 1);
    let mut out = format!("\n{line}\n");
    for row in board.rows() {
        for &cell in row {
            out.push_str(&format!("| {} ", symbols.cell(cell)));
        }
        out.push_str(&format!("|\n{line}\n"));
    }
    out
}

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    move_delay: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, ui: &UiConfig) -> Self {
        Console {
            input,
            output,
            clear_screen: ui.clear_screen,
            move_delay: Duration::from_millis(ui.move_delay_ms),
        }
    }

    /// Run the setup dialog. `Ok(None)` means the player left.
    pub fn setup(
        &mut self,
        size: usize,
        win_length: usize,
        preset: Preset,
    ) -> io::Result<Option<Setup>> {
        self.clear()?;

        let board = match preset.board {
            Some(board) => board,
            None => {
                let Some(board) = self.read_board(size, win_length)? else {
                    return self.farewell();
                };
                board
            }
        };

        let symbols = match preset.symbols {
            Some(symbols) => symbols,
            None => {
                let Some(symbols) = self.read_symbols()? else {
                    return self.farewell();
                };
                symbols
            }
        };

        self.clear()?;
        let first = match preset.first {
            Some(first) => first,
            None => {
                let Some(first) = self.read_first()? else {
                    return self.farewell();
                };
                first
            }
        };

        Ok(Some(Setup {
            board,
            symbols,
            first,
        }))
    }

    /// Play until the game ends. `Ok(None)` means the player left early.
    pub fn play(
        &mut self,
        mut state: GameState,
        symbols: Symbols,
        agent: &mut dyn Agent,
    ) -> io::Result<Option<GameOutcome>> {
        info!(first = ?state.current_player(), agent = agent.name(), "game started");

        while !state.is_terminal() {
            let proceed = match state.current_player() {
                Player::Human => self.human_turn(&mut state, &symbols)?,
                Player::Machine => self.machine_turn(&mut state, &symbols, agent)?,
            };
            if !proceed {
                self.farewell::<()>()?;
                return Ok(None);
            }
        }

        let outcome = state.outcome();
        self.clear()?;
        match outcome {
            Some(GameOutcome::Winner(Player::Human)) => {
                writeln!(self.output, "Human turn [{}]", symbols.human)?;
                write!(self.output, "{}", render_board(state.board(), &symbols))?;
                writeln!(self.output, "YOU WIN!")?;
            }
            Some(GameOutcome::Winner(Player::Machine)) => {
                writeln!(self.output, "Computer turn [{}]", symbols.machine)?;
                write!(self.output, "{}", render_board(state.board(), &symbols))?;
                writeln!(self.output, "YOU LOSE!")?;
            }
            _ => {
                write!(self.output, "{}", render_board(state.board(), &symbols))?;
                writeln!(self.output, "DRAW!")?;
            }
        }
        info!(?outcome, "game finished");
        Ok(outcome)
    }

    fn human_turn(&mut self, state: &mut GameState, symbols: &Symbols) -> io::Result<bool> {
        self.clear()?;
        writeln!(self.output, "Human turn [{}]", symbols.human)?;
        write!(self.output, "{}", render_board(state.board(), symbols))?;

        let size = state.board().size();
        let prompt = format!("Use numpad (1..{}): ", size * size);
        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(false);
            };
            let mv = match parse_move_number(&line, size) {
                Ok(mv) => mv,
                Err(e) => {
                    warn!(input = %line.trim(), error = %e, "rejected move input");
                    writeln!(self.output, "Bad choice")?;
                    continue;
                }
            };
            // parse_move_number keeps mv on the board, so only occupancy fails here
            match state.apply_move_mut(mv) {
                Ok(()) => return Ok(true),
                Err(e) => {
                    warn!(%mv, error = %e, "rejected move");
                    writeln!(self.output, "Bad move")?;
                }
            }
        }
    }

    fn machine_turn(
        &mut self,
        state: &mut GameState,
        symbols: &Symbols,
        agent: &mut dyn Agent,
    ) -> io::Result<bool> {
        self.clear()?;
        writeln!(self.output, "Computer turn [{}]", symbols.machine)?;
        write!(self.output, "{}", render_board(state.board(), symbols))?;
        self.output.flush()?;

        let Some(mv) = agent.select_move(state) else {
            return Err(io::Error::other(format!("{} found no move", agent.name())));
        };
        state
            .apply_move_mut(mv)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        if !self.move_delay.is_zero() {
            thread::sleep(self.move_delay);
        }
        Ok(true)
    }

    fn read_board(&mut self, size: usize, win_length: usize) -> io::Result<Option<Board>> {
        writeln!(
            self.output,
            "Enter the initial board ({size}x{size} grid). Use 0 for empty, -1 for the human and 1 for the machine."
        )?;
        writeln!(
            self.output,
            "Press Enter on the first row to start from an empty board."
        )?;

        let mut rows = Vec::with_capacity(size);
        while rows.len() < size {
            let prompt = format!("Row {} (comma-separated values): ", rows.len() + 1);
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };
            if rows.is_empty() && line.trim().is_empty() {
                return Ok(Some(Board::with_rules(size, win_length)));
            }
            match parse_row(&line, size) {
                Ok(row) => rows.push(row),
                Err(e) => writeln!(self.output, "Bad row: {e}")?,
            }
        }

        board_from_rows(rows, size, win_length)
            .map(Some)
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
    }

    fn read_symbols(&mut self) -> io::Result<Option<Symbols>> {
        loop {
            writeln!(self.output)?;
            let Some(line) = self.ask("Choose X or O\nChosen: ")? else {
                return Ok(None);
            };
            let mut chars = line.trim().chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(symbols) = Symbols::for_human(c) {
                    return Ok(Some(symbols));
                }
            }
            writeln!(self.output, "Bad choice")?;
        }
    }

    fn read_first(&mut self) -> io::Result<Option<Player>> {
        loop {
            let Some(line) = self.ask("First to start?[y/n]: ")? else {
                return Ok(None);
            };
            match line.trim().to_ascii_uppercase().as_str() {
                "Y" => return Ok(Some(Player::Human)),
                "N" => return Ok(Some(Player::Machine)),
                _ => writeln!(self.output, "Bad choice")?,
            }
        }
    }

    /// Print a prompt and read one line. `None` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    fn farewell<T>(&mut self) -> io::Result<Option<T>> {
        write_farewell(&mut self.output)?;
        info!("player left");
        Ok(None)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
