//! Single state container. All timer mutations go through [`Store::dispatch`].

use crate::app::action::Action;
use crate::app::reducer::{reduce, Timer, TimersState};

#[derive(Debug, Default)]
pub struct Store {
    state: TimersState,
    dirty: bool,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `action` through the reducer. Returns whether the state changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        match &action {
            Action::Update { delta_ms } => {
                tracing::trace!(delta_ms, "dispatch {}", action.kind())
            }
            other => tracing::debug!(action = ?other, "dispatch {}", action.kind()),
        }
        let next = reduce(&self.state, &action);
        let changed = next != self.state;
        self.state = next;
        self.dirty |= changed;
        changed
    }

    /// Returns and clears the changed-since-last-call flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn timers(&self) -> &[Timer] {
        &self.state.timers
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected
    }

    pub fn selected_timer(&self) -> Option<&Timer> {
        self.state.selected.and_then(|i| self.state.timers.get(i))
    }

    pub fn running_count(&self) -> usize {
        self.state.timers.iter().filter(|t| t.is_running).count()
    }
}
