use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Status text, or the pending form error
    let status_style = if state.form_error.is_some() {
        Theme::error_message().bg(Color::DarkGray)
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::NameInput => "INPUT",
        FocusPanel::SaveButton => "SAVE",
        FocusPanel::TimerList => "TIMERS",
    };
    let right = format!(" [{}] {} ", focus_name, state.clock);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        right,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
