//! Detail panel for the selected timer: name, time and a Start/Stop button.

use crate::app::reducer::Timer;
use crate::app::state::*;
use crate::ui::format::format_time;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Label of the toggle button for a timer in this state.
pub fn button_label(timer: &Timer) -> &'static str {
    if timer.is_running {
        "Stop"
    } else {
        "Start"
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Timer ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(timer) = state.store.selected_timer() else {
        let hint = Paragraph::new(Span::styled(
            "Select a timer to see it here.",
            Style::default().fg(Theme::TEXT_MUTED),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    };

    let button_style = if state.focus == FocusPanel::TimerList {
        Theme::button_focused()
    } else {
        Theme::button()
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(timer.name.clone(), Theme::title())),
        Line::from(""),
        Line::from(Span::styled(
            format_time(timer.time, state.config.ui.show_tenths),
            Theme::big_time(),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("[ {} ]", button_label(timer)), button_style)),
        Line::from(Span::styled(
            "Enter/Space",
            Style::default().fg(Theme::TEXT_MUTED),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
