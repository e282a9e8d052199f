use crate::app::{AppState, Mode};
use crate::utils::unicode::truncate_to_width;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

const CHECK_GLYPH: &str = "✓";

/// Rebuild every row from the session; nothing is carried over between frames.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let session = state.checklist.state();
    // Borders plus the " ✓" suffix
    let available_width = area.width.saturating_sub(2 + 2) as usize;

    let mut items: Vec<ListItem> = Vec::new();

    for (idx, email) in session.emails().iter().enumerate() {
        let is_checked = session.is_checked(email);
        let is_cursor = idx == state.cursor_position && state.mode == Mode::Navigate;
        let is_pulsing = state.is_pulsing(idx);

        let mut text_style = if is_checked {
            Style::default()
                .fg(state.theme.checked)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(state.theme.foreground)
        };
        let glyph_style = if is_checked {
            Style::default()
                .fg(state.theme.checked)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(state.theme.unchecked)
        };

        if is_pulsing {
            text_style = text_style.bg(state.theme.pulse).fg(state.theme.background);
        } else if is_cursor {
            text_style = text_style
                .fg(state.theme.cursor)
                .add_modifier(Modifier::REVERSED);
        }

        items.push(ListItem::new(Line::from(vec![
            Span::styled(truncate_to_width(email, available_width), text_style),
            Span::raw(" "),
            Span::styled(CHECK_GLYPH, glyph_style),
        ])));
    }

    if session.is_empty() {
        let hint = Style::default().fg(state.theme.foreground);
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(Span::styled(
            "  No emails loaded",
            hint,
        ))));
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(Span::styled(
            "  Press 'f' to import a .csv or .xlsx file",
            hint,
        ))));
        items.push(ListItem::new(Line::from(Span::styled(
            "  Press 'u' to load a Google Sheets URL",
            hint,
        ))));
    }

    let title = format!(" Emails - {} ", session.progress_label());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(state.theme.foreground));

    let mut list_state = ListState::default();
    if !session.is_empty() {
        list_state.select(Some(state.cursor_position));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}
