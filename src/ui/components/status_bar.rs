use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let session = state.checklist.state();
    let loading_indicator = if state.has_pending_imports() {
        " [loading]"
    } else {
        ""
    };
    let message = state
        .status_message
        .as_ref()
        .map(|(msg, _)| format!(" | {msg}"))
        .unwrap_or_default();

    let left_content = format!(
        " {} | {}{}{}",
        state.mode,
        session.progress_label(),
        loading_indicator,
        message
    );

    let nav_hint = "? help  q quit";
    let version_text = format!("v{VERSION}");

    let padding = area.width.saturating_sub(
        (left_content.width() + nav_hint.len() + version_text.len() + 3) as u16,
    );

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));

    f.render_widget(status, area);
}
