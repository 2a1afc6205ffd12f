//! New-timer form: a name field with a placeholder and a Save button.

use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "New Timer Name";

pub fn render(frame: &mut Frame, input_area: Rect, button_area: Rect, state: &AppState) {
    render_input(frame, input_area, state);
    render_button(frame, button_area, state);
}

fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::NameInput;
    let (border_style, border_type) = Theme::panel(focused);

    let block = Block::default()
        .title(" New Timer ")
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.input.text;
    let body = if input_text.is_empty() {
        Span::styled(PLACEHOLDER, Theme::placeholder())
    } else {
        Span::styled(input_text.as_str(), Theme::input_text())
    };

    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        body,
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 {
        let cursor_x = cursor_column(inner.x, &input_text[..state.input.cursor]);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

/// Screen column after the prompt chevron ("❯ ", 2 columns) and `typed`.
fn cursor_column(x: u16, typed: &str) -> u16 {
    let typed = u16::try_from(typed.width()).unwrap_or(u16::MAX);
    x.saturating_add(2).saturating_add(typed)
}

fn render_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::SaveButton;
    let (border_style, border_type) = Theme::panel(focused);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let label = Paragraph::new(Span::styled(
        "Save",
        if focused {
            Theme::button_focused()
        } else {
            Theme::button()
        },
    ))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(label, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ui::test_support::{draw, row_text};

    #[test]
    fn test_placeholder_when_empty() {
        let state = AppState::new(AppConfig::default());
        let buffer = draw(40, 3, |f| {
            render(f, Rect::new(0, 0, 30, 3), Rect::new(30, 0, 10, 3), &state)
        });
        let row = row_text(&buffer, 1);
        assert!(row.contains("New Timer Name"));
        assert!(row.contains("Save"));
    }

    #[test]
    fn test_cursor_column_saturates() {
        assert_eq!(cursor_column(1, ""), 3);
        assert_eq!(cursor_column(1, "héllo"), 8);
        assert_eq!(cursor_column(10, &"x".repeat(70_000)), u16::MAX);
    }

    #[test]
    fn test_long_input_renders() {
        let mut state = AppState::new(AppConfig::default());
        for _ in 0..70_000 {
            state.input.insert_char('x');
        }
        let buffer = draw(40, 3, |f| {
            render(f, Rect::new(0, 0, 30, 3), Rect::new(30, 0, 10, 3), &state)
        });
        assert!(row_text(&buffer, 1).contains("❯ xxx"));
    }

    #[test]
    fn test_typed_text_replaces_placeholder() {
        let mut state = AppState::new(AppConfig::default());
        for c in "Tea".chars() {
            state.input.insert_char(c);
        }
        let buffer = draw(40, 3, |f| {
            render(f, Rect::new(0, 0, 30, 3), Rect::new(30, 0, 10, 3), &state)
        });
        let row = row_text(&buffer, 1);
        assert!(row.contains("❯ Tea"));
        assert!(!row.contains("New Timer Name"));
    }
}
