//! Win detection: sliding windows of the board's win length in the four
//! line directions.

use super::{Board, Player};

/// True if `player` owns every cell of some horizontal, vertical or diagonal
/// window of `board.win_length()` cells. Longer runs match too.
pub fn wins(board: &Board, player: Player) -> bool {
    let n = board.size();
    let k = board.win_length();
    let cell = player.to_cell();
    let span = n - k + 1;

    // Horizontal
    for row in 0..n {
        for col in 0..span {
            if (0..k).all(|i| board.get(row, col + i) == cell) {
                return true;
            }
        }
    }

    // Vertical
    for col in 0..n {
        for row in 0..span {
            if (0..k).all(|i| board.get(row + i, col) == cell) {
                return true;
            }
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..span {
        for col in 0..span {
            if (0..k).all(|i| board.get(row + i, col + i) == cell) {
                return true;
            }
        }
    }

    // Diagonal (bottom-left to top-right)
    for row in k - 1..n {
        for col in 0..span {
            if (0..k).all(|i| board.get(row - i, col + i) == cell) {
                return true;
            }
        }
    }

    false
}

/// Either player has a winning run.
pub fn game_over(board: &Board) -> bool {
    wins(board, Player::Human) || wins(board, Player::Machine)
}

/// The player with a winning run. Machine is checked first.
pub fn winner(board: &Board) -> Option<Player> {
    if wins(board, Player::Machine) {
        Some(Player::Machine)
    } else if wins(board, Player::Human) {
        Some(Player::Human)
    } else {
        None
    }
}
