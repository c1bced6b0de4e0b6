use crate::game::{GameEngine, Outcome, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::EvalDisplay;

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    evaluation: &Option<EvalDisplay>,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Evaluation
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    super::board_widget::render_board(frame, engine.board(), selected_column, chunks[1]);
    render_evaluation(frame, evaluation, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Blue => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: ratatui::layout::Rect) {
    let (status, color) = match engine.outcome() {
        Outcome::InProgress => {
            let player = engine.current_player();
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
        Outcome::Win(player) => (format!("{} wins!", player.name()), player_color(player)),
        Outcome::Draw => ("It's a draw!".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_evaluation(
    frame: &mut Frame,
    evaluation: &Option<EvalDisplay>,
    area: ratatui::layout::Rect,
) {
    let (text, color) = match evaluation {
        None => (String::new(), Color::DarkGray),
        Some(EvalDisplay::Scores(scores)) => {
            let joined = scores
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            (joined, Color::Green)
        }
        Some(EvalDisplay::Unavailable(reason)) => (reason.clone(), Color::Yellow),
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Evaluation"));

    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  E: Evaluation  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
