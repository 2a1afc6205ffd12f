use thiserror::Error;

/// Reasons a new timer cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("timer name cannot be empty")]
    EmptyName,
    #[error("timer name is {len} characters long (max {max})")]
    NameTooLong { len: usize, max: usize },
}
