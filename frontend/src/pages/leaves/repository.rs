use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, LeaveApplication, LeaveDetail, LeaveDetailRequest, LeavePrintData,
    LeaveStatus, LeaveType, SubmitApprovalRequest, TempApproveRequest,
};

use super::{
    bulk::{run_bounded, BatchReport, MAX_IN_FLIGHT},
    decisions::DecisionOutcome,
};

/// History entry a decision is recorded against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecisionTarget {
    pub entry_id: i64,
    pub leave_type: LeaveType,
}

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, status: LeaveStatus) -> Result<Vec<LeaveApplication>, ApiError> {
        self.client.list_leaves(status).await
    }

    pub async fn detail(&self, application: &LeaveApplication) -> Result<LeaveDetail, ApiError> {
        let request = LeaveDetailRequest {
            id: application.id,
            employee_id: application.employee_id,
        };
        self.client
            .get_leave_detail(application.leave_type, &request)
            .await
    }

    /// Records a provisional decision for one entry.
    pub async fn decide(
        &self,
        target: DecisionTarget,
        outcome: DecisionOutcome,
        reason: Option<String>,
    ) -> Result<(), ApiError> {
        let request = TempApproveRequest {
            id: target.entry_id,
            tapprove: outcome.tapprove(),
            leave_type: target.leave_type,
            reason: match outcome {
                DecisionOutcome::Approved => None,
                DecisionOutcome::Rejected => reason,
            },
        };
        self.client.temp_approve(&request).await.map(|_| ())
    }

    pub async fn decide_all(
        &self,
        targets: Vec<DecisionTarget>,
        outcome: DecisionOutcome,
        reason: Option<String>,
    ) -> BatchReport<i64> {
        let ids: Vec<i64> = targets.iter().map(|t| t.entry_id).collect();
        let report = run_bounded(ids, MAX_IN_FLIGHT, |entry_id| {
            let target = targets
                .iter()
                .copied()
                .find(|t| t.entry_id == entry_id);
            let reason = reason.clone();
            async move {
                match target {
                    Some(target) => self.decide(target, outcome, reason).await,
                    None => Err(ApiError::unknown(format!("Unknown entry {}", entry_id))),
                }
            }
        })
        .await;
        if let Some(summary) = report.failure_summary() {
            log::warn!("bulk {} finished with failures: {}", outcome.label(), summary);
        }
        report
    }

    pub async fn submit(&self, request: SubmitApprovalRequest) -> Result<Option<String>, ApiError> {
        self.client.submit_approve(request).await
    }

    pub async fn print_data(&self, id: i64) -> Result<LeavePrintData, ApiError> {
        self.client.leave_print_data(id).await
    }
}

impl Default for LeavesRepository {
    fn default() -> Self {
        Self::new()
    }
}
