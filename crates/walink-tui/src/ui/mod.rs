use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use walink_core::Feedback;

use crate::app::App;

const INPUT_PLACEHOLDER: &str = "e.g. +91 98765 43210";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(frame, chunks[0]);
    render_input(frame, chunks[1], app);
    render_result(frame, chunks[2], app);
    render_message(frame, chunks[3], app.message.as_ref());
    render_footer(frame, chunks[4]);

    if app.show_help {
        render_help(frame, size);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("walink");
    let paragraph =
        Paragraph::new("Enter a phone number to get a WhatsApp link.").block(block);
    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Phone number");
    let line = if app.input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            app.input.clone(),
            Style::default().fg(Color::Yellow),
        ))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if !app.show_help {
        let width = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let x = area.x.saturating_add(1).saturating_add(width).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_result(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Link");
    let Some(link) = &app.result else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            link.link_text().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::raw("  "),
        Span::styled(
            "Ready",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    if app.manual_copy {
        lines.push(Line::from(Span::styled(
            link.link.clone(),
            Style::default().add_modifier(Modifier::REVERSED),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_message(frame: &mut Frame<'_>, area: Rect, message: Option<&Feedback>) {
    let Some(feedback) = message else {
        return;
    };
    let color = if feedback.is_error() {
        Color::Red
    } else {
        Color::Green
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(
        feedback.text.clone(),
        Style::default().fg(color),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect) {
    let hint = "enter generate  ctrl+y copy  ctrl+o open  ctrl+r reset  f1 help  esc quit";
    let paragraph = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: esc quit, Ctrl+C quit, F1 help"),
        Line::from("Form: enter generate, Ctrl+Y copy, Ctrl+O open in browser, Ctrl+R reset"),
        Line::from("Editing: backspace delete, Ctrl+U clear, Ctrl+W delete word, paste supported"),
        Line::from(""),
        Line::from("Numbers with + are used as typed. Ten digits get the +91 country code;"),
        Line::from("a leading 0 on eleven digits is dropped first. Longer numbers are kept."),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
