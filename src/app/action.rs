//! Store actions and their creators.
//!
//! An action is a plain value describing a requested state transition. The
//! creators are the only place where user input is validated; once an action
//! exists the reducer applies it unconditionally.

use crate::app::error::TimerError;

pub type TimerIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    NewTimer { name: String },
    ToggleTimer { index: TimerIndex },
    SelectTimer { index: TimerIndex },
    Update { delta_ms: u64 },
}

impl Action {
    /// Short tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::NewTimer { .. } => "NEW_TIMER",
            Action::ToggleTimer { .. } => "TOGGLE_TIMER",
            Action::SelectTimer { .. } => "SELECT_TIMER",
            Action::Update { .. } => "UPDATE",
        }
    }
}

/// Build a `NewTimer` action. The name is trimmed and must be non-empty and
/// at most `max_len` characters.
pub fn add_timer(name: &str, max_len: usize) -> Result<Action, TimerError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TimerError::EmptyName);
    }
    let len = name.chars().count();
    if len > max_len {
        return Err(TimerError::NameTooLong { len, max: max_len });
    }
    Ok(Action::NewTimer {
        name: name.to_string(),
    })
}

pub fn toggle_timer(index: TimerIndex) -> Action {
    Action::ToggleTimer { index }
}

pub fn select_timer(index: TimerIndex) -> Action {
    Action::SelectTimer { index }
}

pub fn update(delta_ms: u64) -> Action {
    Action::Update { delta_ms }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_timer_trims() {
        assert_eq!(
            add_timer("  Tea  ", 64),
            Ok(Action::NewTimer { name: "Tea".into() })
        );
    }

    #[test]
    fn test_add_timer_rejects_blank() {
        assert_eq!(add_timer("", 64), Err(TimerError::EmptyName));
        assert_eq!(add_timer(" \t ", 64), Err(TimerError::EmptyName));
    }

    #[test]
    fn test_add_timer_counts_chars_not_bytes() {
        assert!(add_timer("ééééé", 5).is_ok());
        assert_eq!(
            add_timer("abcdef", 5),
            Err(TimerError::NameTooLong { len: 6, max: 5 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TimerError::EmptyName.to_string(), "timer name cannot be empty");
        assert_eq!(
            TimerError::NameTooLong { len: 70, max: 64 }.to_string(),
            "timer name is 70 characters long (max 64)"
        );
    }
}
