pub mod email_list;
pub mod status_bar;

use crate::app::{AppState, Mode};
use crate::utils::unicode::{after_first_char, first_char_as_str};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, state: &AppState) {
    let prompt_height = if state.mode.is_prompt() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                // Email list
            Constraint::Length(prompt_height), // Path / URL input
            Constraint::Length(1),             // Status bar
        ])
        .split(f.area());

    email_list::render(f, state, chunks[0]);

    if state.mode.is_prompt() {
        render_prompt(f, state, chunks[1]);
    }

    status_bar::render(f, state, chunks[2]);

    match state.mode {
        Mode::ConfirmClear => render_confirm_clear(f, state),
        Mode::Alert => render_alert(f, state),
        _ => {}
    }

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_prompt(f: &mut Frame, state: &AppState, area: Rect) {
    let title = match state.mode {
        Mode::FilePrompt => " Import file (.csv / .xlsx) ",
        _ => " Google Sheets URL ",
    };

    let pos = state.edit_cursor_pos.min(state.edit_buffer.len());
    let before_cursor = &state.edit_buffer[..pos];
    let after_cursor = &state.edit_buffer[pos..];
    let cursor_style = Style::default()
        .bg(state.theme.pulse)
        .fg(state.theme.background)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::raw(before_cursor.to_string())];
    if after_cursor.is_empty() {
        spans.push(Span::styled(" ", cursor_style));
    } else {
        spans.push(Span::styled(first_char_as_str(after_cursor).to_string(), cursor_style));
        spans.push(Span::raw(after_first_char(after_cursor).to_string()));
    }

    let input = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(state.theme.foreground));

    f.render_widget(input, area);
}

fn render_confirm_clear(f: &mut Frame, state: &AppState) {
    let area = centered_rect(50, 20, f.area());
    let text = vec![
        Line::from(""),
        Line::from("Are you sure you want to clear the emails list?"),
        Line::from(""),
        Line::from(Span::styled(
            "y: yes    n / Esc: no",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Clear list ")
                .style(Style::default().bg(state.theme.background)),
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_alert(f: &mut Frame, state: &AppState) {
    let area = centered_rect(60, 25, f.area());
    let message = state.alert_message.as_deref().unwrap_or_default();
    let text = vec![
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().fg(state.theme.unchecked),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error ")
                .border_style(Style::default().fg(state.theme.alert))
                .style(Style::default().bg(state.theme.background)),
        )
        .alignment(Alignment::Center)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    Email Checklist Help

      ↑/↓ or j/k      Move cursor
      g / G           Jump to first / last
      Enter or Space  Copy email and mark it checked
      f               Import a .csv or .xlsx file
      u               Load a Google Sheets URL
      c               Clear the list (asks first)
      l               Open the configured link
      ?               Toggle help
      q               Quit

    Prompts:
      Enter           Submit
      Esc             Cancel
      ←/→ Home/End    Move cursor
    "#;

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
