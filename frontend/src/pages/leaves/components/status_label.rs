use leptos::*;

use crate::api::LeaveStatus;
use crate::pages::leaves::decisions::{DecisionOutcome, EntryState};

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-yellow-100 text-yellow-800",
        LeaveStatus::Approved => "bg-green-100 text-green-800",
        LeaveStatus::Rejected => "bg-red-100 text-red-800",
    }
}

pub fn entry_state_label(state: &EntryState) -> (String, &'static str) {
    match state {
        EntryState::Pending => ("Pending".into(), "bg-gray-100 text-gray-800"),
        EntryState::InFlight { outcome, .. } => {
            (format!("{} (saving)", outcome.label()), "bg-blue-100 text-blue-800")
        }
        EntryState::Confirmed(outcome) => (
            outcome.label().to_string(),
            match outcome {
                DecisionOutcome::Approved => "bg-green-100 text-green-800",
                DecisionOutcome::Rejected => "bg-red-100 text-red-800",
            },
        ),
        EntryState::Failed { previous, .. } => (
            match previous {
                Some(outcome) => format!("{} (change failed)", outcome.label()),
                None => "Failed".to_string(),
            },
            "bg-red-50 text-red-700",
        ),
    }
}

#[component]
pub fn LeaveStatusLabel(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium {}",
            status_badge_class(status)
        )>
            {status.label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_change_keeps_previous_label() {
        let (label, _) = entry_state_label(&EntryState::Failed {
            attempted: DecisionOutcome::Rejected,
            previous: Some(DecisionOutcome::Approved),
            message: "X".into(),
        });
        assert_eq!(label, "Approved (change failed)");
        let (label, _) = entry_state_label(&EntryState::Pending);
        assert_eq!(label, "Pending");
    }
}
