use crate::models::{RecordId, ResultSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded(RecordId),
}

impl ExpansionState {
    pub fn expanded_id(&self) -> Option<&RecordId> {
        match self {
            ExpansionState::Collapsed => None,
            ExpansionState::Expanded(id) => Some(id),
        }
    }
}

/// Tracks the one row (if any) whose details are open.
#[derive(Debug, Default)]
pub struct ExpansionController {
    state: ExpansionState,
}

impl ExpansionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.state.expanded_id() == Some(id)
    }

    pub fn toggle(&mut self, id: RecordId) {
        self.state = if self.is_expanded(&id) {
            ExpansionState::Collapsed
        } else {
            ExpansionState::Expanded(id)
        };
    }

    /// Collapse if the open row is not part of `records`. Returns whether it
    /// collapsed.
    pub fn reconcile(&mut self, records: &ResultSet) -> bool {
        match &self.state {
            ExpansionState::Expanded(id) if !records.contains(id) => {
                self.state = ExpansionState::Collapsed;
                true
            }
            _ => false,
        }
    }
}
