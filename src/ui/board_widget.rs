use crate::game::{Board, Cell, Move};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::Symbols;

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Human => Style::default().fg(Color::Cyan),
        Cell::Machine => Style::default().fg(Color::Red),
    }
}

/// Board lines with column numbers, row numbers and an optional highlighted
/// cursor cell.
pub fn board_lines(board: &Board, symbols: &Symbols, cursor: Option<Move>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.size() + 1);

    let mut header = vec![Span::raw("    ")];
    for col in 0..board.size() {
        header.push(Span::raw(format!("{:^3}", col + 1)));
    }
    lines.push(Line::from(header));

    for (row, cells) in board.rows().enumerate() {
        let mut spans = vec![Span::raw(format!("{:>3} ", row + 1))];
        for (col, &cell) in cells.iter().enumerate() {
            let symbol = match cell {
                Cell::Empty => '.',
                _ => symbols.cell(cell),
            };
            let mut style = cell_style(cell);
            if cursor == Some(Move::new(row, col)) {
                style = style
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {symbol} "), style));
        }
        lines.push(Line::from(spans));
    }

    lines
}
