//! Front ends: the line-based console game and a full-screen ratatui view.
//! Both drive a [`GameState`](crate::game::GameState) and a machine
//! [`Agent`](crate::ai::Agent).

mod app;
pub mod board_widget;
pub mod console;
mod game_view;

pub use app::App;
pub use console::Console;

use crate::game::{Cell, Player};

/// Display characters chosen during setup. The machine gets whichever
/// symbol the human did not pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    pub human: char,
    pub machine: char,
}

impl Symbols {
    /// Symbols for a human playing `choice` (`X` or `O`, any case).
    pub fn for_human(choice: char) -> Option<Self> {
        match choice.to_ascii_uppercase() {
            'X' => Some(Symbols {
                human: 'X',
                machine: 'O',
            }),
            'O' => Some(Symbols {
                human: 'O',
                machine: 'X',
            }),
            _ => None,
        }
    }

    pub fn of(&self, player: Player) -> char {
        match player {
            Player::Human => self.human,
            Player::Machine => self.machine,
        }
    }

    pub fn cell(&self, cell: Cell) -> char {
        match cell.owner() {
            Some(player) => self.of(player),
            None => ' ',
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Symbols {
            human: 'X',
            machine: 'O',
        }
    }
}
