use crate::game::{wins, Board, Player};

/// Position score from the machine's point of view.
pub type Score = f64;

pub const WIN: Score = 1.0;
pub const DRAW: Score = 0.0;
pub const LOSS: Score = -1.0;

/// Score a position: `WIN` if the machine has a line, else `LOSS` if the
/// human has one, else `DRAW`. The machine is checked first.
pub fn evaluate(board: &Board) -> Score {
    if wins(board, Player::Machine) {
        WIN
    } else if wins(board, Player::Human) {
        LOSS
    } else {
        DRAW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(board: &mut Board, row: usize, len: usize, player: Player) {
        for col in 0..len {
            board.set(row, col, player).unwrap();
        }
    }

    #[test]
    fn empty_board_is_draw() {
        assert_eq!(evaluate(&Board::new()), DRAW);
    }

    #[test]
    fn machine_line_scores_win() {
        let mut board = Board::new();
        fill_row(&mut board, 7, 5, Player::Machine);
        assert_eq!(evaluate(&board), WIN);
    }

    #[test]
    fn human_line_scores_loss() {
        let mut board = Board::new();
        fill_row(&mut board, 0, 5, Player::Human);
        fill_row(&mut board, 1, 4, Player::Machine);
        assert_eq!(evaluate(&board), LOSS);
    }

    #[test]
    fn double_win_goes_to_machine() {
        let mut board = Board::new();
        fill_row(&mut board, 2, 5, Player::Human);
        fill_row(&mut board, 5, 5, Player::Machine);
        assert_eq!(evaluate(&board), WIN);
    }
}
