use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub name_input: Rect,
    pub save_button: Rect,
    pub timer_list: Rect,
    pub timer_view: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: header | form | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // New timer form
            Constraint::Min(5),    // Timers
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let form = main_chunks[1];
    let content = main_chunks[2];
    let status_bar = main_chunks[3];

    // Form: input | save button
    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Min(20),    // Name input
            Constraint::Length(10), // Save button
        ])
        .split(form);

    // Content: list | selected timer
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Percentage(45), // Timer list
            Constraint::Min(20),        // Timer view
        ])
        .split(content);

    AppLayout {
        header,
        name_input: form_chunks[0],
        save_button: form_chunks[1],
        timer_list: content_chunks[0],
        timer_view: content_chunks[1],
        status_bar,
    }
}
