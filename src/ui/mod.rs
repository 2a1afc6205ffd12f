mod format;
mod layout;
mod new_timer;
mod status_bar;
mod theme;
mod timer_list;
mod timer_view;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header);
    new_timer::render(frame, app_layout.name_input, app_layout.save_button, state);
    timer_list::render(frame, app_layout.timer_list, state);
    timer_view::render(frame, app_layout.timer_view, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" timerdeck ", Theme::header()),
        Span::styled(
            " Tab focus  Enter save/toggle  ↑↓ select  Ctrl+C quit",
            Style::default().fg(Theme::TEXT_SECONDARY),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::{Frame, Terminal};

    pub fn draw(width: u16, height: u16, f: impl FnOnce(&mut Frame)) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(f).unwrap();
        terminal.backend().buffer().clone()
    }

    pub fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    pub fn screen_text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| row_text(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
