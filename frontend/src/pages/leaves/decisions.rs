use std::collections::HashMap;

use crate::api::ApiError;

use super::bulk::BatchReport;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionOutcome {
    Approved,
    Rejected,
}

impl DecisionOutcome {
    /// Wire value of `Tapprove`.
    pub fn tapprove(self) -> u8 {
        match self {
            DecisionOutcome::Approved => 1,
            DecisionOutcome::Rejected => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DecisionOutcome::Approved => "Approved",
            DecisionOutcome::Rejected => "Rejected",
        }
    }
}

/// Lifecycle of one history entry's decision.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EntryState {
    #[default]
    Pending,
    InFlight {
        outcome: DecisionOutcome,
        previous: Option<DecisionOutcome>,
    },
    Confirmed(DecisionOutcome),
    Failed {
        attempted: DecisionOutcome,
        previous: Option<DecisionOutcome>,
        message: String,
    },
}

impl EntryState {
    /// Outcome the server has acknowledged for this entry, if any.
    pub fn effective(&self) -> Option<DecisionOutcome> {
        match self {
            EntryState::Pending => None,
            EntryState::Confirmed(outcome) => Some(*outcome),
            EntryState::InFlight { previous, .. } | EntryState::Failed { previous, .. } => {
                *previous
            }
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, EntryState::InFlight { .. })
    }
}

/// Decision state for every entry of the open application, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionTracker {
    order: Vec<i64>,
    states: HashMap<i64, EntryState>,
}

impl DecisionTracker {
    pub fn new(entry_ids: impl IntoIterator<Item = i64>) -> Self {
        let mut tracker = Self::default();
        tracker.sync_entries(entry_ids);
        tracker
    }

    /// Adopts a fresh entry list, keeping states of entries still present.
    pub fn sync_entries(&mut self, entry_ids: impl IntoIterator<Item = i64>) {
        let order: Vec<i64> = entry_ids.into_iter().collect();
        self.states.retain(|id, _| order.contains(id));
        for id in &order {
            self.states.entry(*id).or_default();
        }
        self.order = order;
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn state(&self, id: i64) -> EntryState {
        self.states.get(&id).cloned().unwrap_or_default()
    }

    pub fn effective(&self, id: i64) -> Option<DecisionOutcome> {
        self.states.get(&id).and_then(EntryState::effective)
    }

    pub fn any_in_flight(&self) -> bool {
        self.states.values().any(EntryState::is_in_flight)
    }

    /// Marks the entry in flight. Refused for unknown entries, entries
    /// already waiting on the server and repeats of the acknowledged outcome.
    pub fn begin(&mut self, id: i64, outcome: DecisionOutcome) -> bool {
        match self.states.get_mut(&id) {
            Some(state) if !state.is_in_flight() && state.effective() != Some(outcome) => {
                let previous = state.effective();
                *state = EntryState::InFlight { outcome, previous };
                true
            }
            _ => false,
        }
    }

    pub fn confirm(&mut self, id: i64) {
        if let Some(state) = self.states.get_mut(&id) {
            if let EntryState::InFlight { outcome, .. } = *state {
                *state = EntryState::Confirmed(outcome);
            }
        }
    }

    /// Rolls the entry back to what it was before the attempt.
    pub fn fail(&mut self, id: i64, message: impl Into<String>) {
        if let Some(state) = self.states.get_mut(&id) {
            if let EntryState::InFlight { outcome, previous } = *state {
                *state = EntryState::Failed {
                    attempted: outcome,
                    previous,
                    message: message.into(),
                };
            }
        }
    }

    pub fn settle(&mut self, id: i64, result: &Result<(), ApiError>) {
        match result {
            Ok(()) => self.confirm(id),
            Err(err) => self.fail(id, err.error.clone()),
        }
    }

    pub fn apply_report(&mut self, report: &BatchReport<i64>) {
        for item in &report.outcomes {
            self.settle(item.key, &item.result);
        }
    }

    /// Entries a bulk action should touch: no effective decision, not in flight.
    pub fn undecided_targets(&self) -> Vec<i64> {
        self.order
            .iter()
            .copied()
            .filter(|id| {
                let state = self.state(*id);
                state.effective().is_none() && !state.is_in_flight()
            })
            .collect()
    }

    /// The decision map: entries with an effective outcome, in display order.
    pub fn decisions(&self) -> Vec<(i64, DecisionOutcome)> {
        self.order
            .iter()
            .filter_map(|id| self.effective(*id).map(|outcome| (*id, outcome)))
            .collect()
    }

    pub fn all_decided(&self) -> bool {
        self.order.iter().all(|id| self.effective(*id).is_some())
    }

    /// Every given entry has an acknowledged outcome and nothing is waiting
    /// on the server. An unknown entry counts as undecided.
    pub fn covers(&self, entry_ids: impl IntoIterator<Item = i64>) -> bool {
        !self.any_in_flight() && entry_ids.into_iter().all(|id| self.effective(id).is_some())
    }
}
