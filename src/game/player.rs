use serde::{Deserialize, Serialize};

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Machine => Cell::Machine,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Machine => "Machine",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Machine);
        assert_eq!(Player::Machine.other(), Player::Human);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Human.to_cell(), Cell::Human);
        assert_eq!(Player::Machine.to_cell(), Cell::Machine);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Human.name(), "Human");
        assert_eq!(Player::Machine.name(), "Machine");
    }
}
