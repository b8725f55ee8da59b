use crate::game::{GameOutcome, GameState, Move, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;
use super::Symbols;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: Move,
    symbols: &Symbols,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(game_state.board().size() as u16 + 3), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, symbols, chunks[0]);
    render_board(frame, game_state, cursor, symbols, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, symbols: &Symbols, area: Rect) {
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(Player::Human)) => ("You win!".to_string(), Color::Green),
        Some(GameOutcome::Winner(Player::Machine)) => ("You lose!".to_string(), Color::Red),
        Some(GameOutcome::Draw) => ("Draw!".to_string(), Color::Yellow),
        None => match game_state.current_player() {
            Player::Human => (format!("Your turn [{}]", symbols.human), Color::Cyan),
            Player::Machine => (
                format!("Computer thinking [{}]", symbols.machine),
                Color::Red,
            ),
        },
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Five in a Row"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    game_state: &GameState,
    cursor: Move,
    symbols: &Symbols,
    area: Rect,
) {
    let cursor = (!game_state.is_terminal()).then_some(cursor);
    let lines = board_widget::board_lines(game_state.board(), symbols, cursor);
    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Arrows: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
