//! List of every timer; the selected row is highlighted.

use crate::app::state::*;
use crate::ui::format::format_time;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::TimerList;
    let (border_style, border_type) = Theme::panel(focused);
    let timers = state.store.timers();

    let title = if timers.is_empty() {
        " Timers ".to_string()
    } else {
        format!(" Timers ({}) ", timers.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    if timers.is_empty() {
        let hint = List::new(vec![ListItem::new(Span::styled(
            " No timers yet. Type a name above and press Enter.",
            Style::default().fg(Theme::TEXT_MUTED),
        ))])
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let show_tenths = state.config.ui.show_tenths;
    let items: Vec<ListItem> = timers
        .iter()
        .map(|timer| {
            let (icon, style) = if timer.is_running {
                (" ▶ ", Theme::timer_running())
            } else {
                (" ■ ", Theme::timer_stopped())
            };
            ListItem::new(Line::from(vec![
                Span::styled(icon, style),
                Span::styled(format!("{:<12}", format_time(timer.time, show_tenths)), style),
                Span::styled(timer.name.clone(), Theme::input_text()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused {
            Theme::selected_row()
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        });

    let mut list_state = ListState::default().with_selected(state.store.selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::config::AppConfig;
    use crate::ui::test_support::{draw, row_text};

    #[test]
    fn test_empty_hint() {
        let state = AppState::new(AppConfig::default());
        let buffer = draw(60, 5, |f| {
            let area = f.area();
            render(f, area, &state)
        });
        assert!(row_text(&buffer, 1).contains("No timers yet"));
    }

    #[test]
    fn test_rows_in_insertion_order() {
        let mut state = AppState::new(AppConfig::default());
        state.store.dispatch(Action::NewTimer { name: "Tea".into() });
        state.store.dispatch(Action::NewTimer { name: "Eggs".into() });
        state.store.dispatch(Action::ToggleTimer { index: 1 });
        state.store.dispatch(Action::Update { delta_ms: 61_250 });

        let buffer = draw(60, 5, |f| {
            let area = f.area();
            render(f, area, &state)
        });
        assert!(row_text(&buffer, 0).contains("Timers (2)"));
        let first = row_text(&buffer, 1);
        assert!(first.contains("■ 0:00:00.0"));
        assert!(first.contains("Tea"));
        let second = row_text(&buffer, 2);
        assert!(second.contains("▶ 0:01:01.2"));
        assert!(second.contains("Eggs"));
    }
}
