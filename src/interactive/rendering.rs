//! TUI rendering with ratatui
//!
//! Root word header, word entry field, accepted-word list, score panel and
//! the rejection popup.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{format_score, letter_badge, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Input area
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_input(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Accepted words
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[2]);

    render_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[3]);

    if let InputMode::Alert(reason) = app.input_mode {
        render_alert(f, reason.title(), reason.message());
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(spaced_letters(app.game.root_word()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" 🔤 WORD SCRAMBLE · Round {} ", app.game.round()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let hint = match app.remaining_letters() {
        Some(pool) if app.input_buffer.trim().is_empty() => Line::from(Span::styled(
            format!("Letters: {}", spaced_letters(&pool.to_string())),
            Style::default().fg(Color::DarkGray),
        )),
        Some(pool) => Line::from(Span::styled(
            format!("Left: {}", spaced_letters(&pool.to_string())),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            "Those letters aren't all in the word",
            Style::default().fg(Color::Red),
        )),
    };

    let content = vec![
        Line::from(Span::styled(
            app.input_buffer.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        hint,
    ];

    let input = Paragraph::new(content).block(
        Block::default()
            .title(" Enter your word | Enter: submit  TAB: shuffle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(input, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", letter_badge(word)),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let title = format!(" Your Words ({}) ", app.game.used_words().len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let score = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", format_score(app.game.score())),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(score, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Alert(_) => "Enter/Esc: OK | Ctrl-C: Quit",
        InputMode::Typing => "Enter: Submit | TAB: Shuffle | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(f.area(), 50, 7);

    let content = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
