use crate::app::store::Store;
use crate::config::AppConfig;
use std::time::Duration;

/// Text field of the new-timer form. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    NameInput,
    SaveButton,
    TimerList,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub input: InputState,
    pub focus: FocusPanel,
    pub should_quit: bool,
    pub dirty: bool,
    /// Last validation error from the new-timer form.
    pub form_error: Option<String>,
    /// Wall clock text shown in the status bar, refreshed on tick.
    pub clock: String,
    /// Elapsed time not yet dispatched because it is below one millisecond.
    pub tick_remainder: Duration,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: Store::new(),
            input: InputState::new(),
            focus: FocusPanel::NameInput,
            should_quit: false,
            dirty: true,
            form_error: None,
            clock: String::new(),
            tick_remainder: Duration::ZERO,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::NameInput => FocusPanel::SaveButton,
            FocusPanel::SaveButton => FocusPanel::TimerList,
            FocusPanel::TimerList => FocusPanel::NameInput,
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = match self.focus {
            FocusPanel::NameInput => FocusPanel::TimerList,
            FocusPanel::SaveButton => FocusPanel::NameInput,
            FocusPanel::TimerList => FocusPanel::SaveButton,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref err) = self.form_error {
            return err.clone();
        }
        format!(
            "Timers: {} | Running: {}",
            self.store.timers().len(),
            self.store.running_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_multibyte() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.cursor, input.text.len());
        input.move_left();
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hllo");
        input.delete_forward();
        assert_eq!(input.text, "hlo");
        input.move_end();
        input.move_right();
        assert_eq!(input.cursor, 3);
        input.move_home();
        input.delete_back();
        assert_eq!(input.text, "hlo");
    }

    #[test]
    fn test_delete_word_back() {
        let mut input = InputState::new();
        for c in "boil the eggs  ".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "boil the ");
        input.clear();
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, FocusPanel::NameInput);
        state.cycle_focus();
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::TimerList);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::NameInput);
        state.cycle_focus_back();
        assert_eq!(state.focus, FocusPanel::TimerList);
    }

    #[test]
    fn test_status_line_prefers_error() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.status_line(), "Timers: 0 | Running: 0");
        state.form_error = Some("timer name cannot be empty".into());
        assert_eq!(state.status_line(), "timer name cannot be empty");
    }
}
