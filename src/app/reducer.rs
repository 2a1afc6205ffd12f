//! The timer reducer: `(state, action) -> new state`.

use crate::app::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub name: String,
    /// Accumulated running time in milliseconds.
    pub time: u64,
    pub is_running: bool,
}

impl Timer {
    pub fn new(name: String) -> Self {
        Self {
            name,
            time: 0,
            is_running: false,
        }
    }
}

/// Store contents. `selected` always points inside `timers` when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimersState {
    pub timers: Vec<Timer>,
    pub selected: Option<usize>,
}

pub fn reduce(state: &TimersState, action: &Action) -> TimersState {
    let mut next = state.clone();
    match action {
        Action::NewTimer { name } => {
            next.timers.push(Timer::new(name.clone()));
            if next.selected.is_none() {
                next.selected = Some(next.timers.len() - 1);
            }
        }
        Action::ToggleTimer { index } => {
            if let Some(timer) = next.timers.get_mut(*index) {
                timer.is_running = !timer.is_running;
            }
        }
        Action::SelectTimer { index } => {
            if *index < next.timers.len() {
                next.selected = Some(*index);
            }
        }
        Action::Update { delta_ms } => {
            for timer in next.timers.iter_mut().filter(|t| t.is_running) {
                timer.time = timer.time.saturating_add(*delta_ms);
            }
        }
    }
    next
}
