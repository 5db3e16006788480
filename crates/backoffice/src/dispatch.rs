use tracing::info;

use crate::action::Action;

/// Receiver for actions produced by dialogs (the store side).
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl<F> Dispatch for F
where
    F: FnMut(Action),
{
    fn dispatch(&mut self, action: Action) {
        self(action)
    }
}

/// In-memory dispatcher that records every action it receives.
#[derive(Debug, Default, Clone)]
pub struct ActionLog {
    actions: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn drain(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }
}

impl Dispatch for ActionLog {
    fn dispatch(&mut self, action: Action) {
        info!(%action, "dispatch");
        self.actions.push(action);
    }
}
