use crate::app::action::{self, Action};
use crate::app::event::AppEvent;
use crate::app::state::*;
use chrono::Local;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::fmt::Write;
use std::time::Duration;

/// Translate one event into store actions. Local UI state (input text, focus,
/// quit flag) is updated in place; timer state only changes through the
/// returned actions.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick { elapsed } => handle_tick(state, elapsed),
    }
}

/// Feed actions through the store and fold its change flag into `dirty`.
pub fn dispatch_all(state: &mut AppState, actions: Vec<Action>) {
    for action in actions {
        state.store.dispatch(action);
    }
    if state.store.take_dirty() {
        state.dirty = true;
    }
}

fn handle_tick(state: &mut AppState, elapsed: Duration) -> Vec<Action> {
    let clock = format_clock(&state.config.ui.clock_format);
    if clock != state.clock {
        state.clock = clock;
        state.dirty = true;
    }

    // Carry sub-millisecond leftovers so truncation never loses time
    let total = state.tick_remainder + elapsed;
    let whole_ms = total.as_millis() as u64;
    state.tick_remainder = total - Duration::from_millis(whole_ms);
    if whole_ms == 0 {
        return vec![];
    }
    vec![action::update(whole_ms)]
}

/// Current local time in `format`. An unrenderable format yields a placeholder.
fn format_clock(format: &str) -> String {
    let mut clock = String::new();
    if write!(clock, "{}", Local::now().format(format)).is_err() {
        return "--:--:--".to_string();
    }
    clock
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return vec![];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::NameInput => handle_input_key(state, key),
        FocusPanel::SaveButton => handle_save_key(state, key),
        FocusPanel::TimerList => handle_list_key(state, key),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('w') => state.input.delete_word_back(),
            KeyCode::Char('a') => state.input.move_home(),
            KeyCode::Char('e') => state.input.move_end(),
            KeyCode::Char('u') => state.input.clear(),
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Enter => submit_new_timer(state),
        KeyCode::Char(c) => {
            state.input.insert_char(c);
            state.form_error = None;
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        KeyCode::Down => {
            state.focus = FocusPanel::TimerList;
            vec![]
        }
        KeyCode::Esc => {
            state.input.clear();
            state.form_error = None;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_save_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => submit_new_timer(state),
        KeyCode::Down => {
            state.focus = FocusPanel::TimerList;
            vec![]
        }
        KeyCode::Left | KeyCode::Up => {
            state.focus = FocusPanel::NameInput;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let len = state.store.timers().len();
    let selected = state.store.selected_index();

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            vec![]
        }
        KeyCode::Char('n') | KeyCode::Char('/') => {
            state.focus = FocusPanel::NameInput;
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => match selected {
            Some(index) => vec![action::toggle_timer(index)],
            None => vec![],
        },
        KeyCode::Up | KeyCode::Char('k') => match selected {
            Some(0) => {
                state.focus = FocusPanel::NameInput;
                vec![]
            }
            Some(index) => vec![action::select_timer(index - 1)],
            None => vec![],
        },
        KeyCode::Down | KeyCode::Char('j') => match selected {
            Some(index) if index + 1 < len => vec![action::select_timer(index + 1)],
            _ => vec![],
        },
        KeyCode::Home => {
            if len > 0 {
                vec![action::select_timer(0)]
            } else {
                vec![]
            }
        }
        KeyCode::End => {
            if len > 0 {
                vec![action::select_timer(len - 1)]
            } else {
                vec![]
            }
        }
        _ => vec![],
    }
}

fn submit_new_timer(state: &mut AppState) -> Vec<Action> {
    match action::add_timer(&state.input.text, state.config.timers.max_name_len) {
        Ok(action) => {
            state.input.clear();
            state.form_error = None;
            vec![action]
        }
        Err(e) => {
            tracing::info!(error = %e, "rejected new timer");
            state.form_error = Some(format!("Cannot save: {}", e));
            vec![]
        }
    }
}

/// Create the configured startup timers through the store.
pub fn load_presets(state: &mut AppState) {
    let max_len = state.config.timers.max_name_len;
    let mut actions = Vec::new();
    for preset in &state.config.presets {
        match action::add_timer(&preset.name, max_len) {
            Ok(new_timer) => {
                let index = state.store.timers().len() + count_new(&actions);
                actions.push(new_timer);
                if preset.start_running {
                    actions.push(action::toggle_timer(index));
                }
            }
            Err(e) => {
                tracing::warn!(preset = %preset.name, error = %e, "skipping invalid preset");
            }
        }
    }
    tracing::info!(count = count_new(&actions), "loaded presets");
    dispatch_all(state, actions);
}

fn count_new(actions: &[Action]) -> usize {
    actions
        .iter()
        .filter(|a| matches!(a, Action::NewTimer { .. }))
        .count()
}
