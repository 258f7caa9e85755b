use reqwest::Method;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::api::client::ApiClient;
use crate::error::ApiError;
use crate::model::{LeaveAction, LeaveId, LeaveRequest, LeaveRequestInput};
use crate::models::RejectRequest;
use crate::routes;

/// List endpoints answer with a bare array, paginated backends wrap it.
#[derive(Deserialize)]
#[serde(untagged)]
enum LeaveList {
    Plain(Vec<LeaveRequest>),
    Page { data: Vec<LeaveRequest> },
}

impl From<LeaveList> for Vec<LeaveRequest> {
    fn from(list: LeaveList) -> Self {
        match list {
            LeaveList::Plain(data) | LeaveList::Page { data } => data,
        }
    }
}

/// Leave-request operations, authenticated with the shared session.
///
/// Calls are independent: nothing here de-duplicates overlapping calls or
/// touches local state before the backend answers.
#[derive(Clone)]
pub struct LeaveClient {
    api: ApiClient,
}

impl LeaveClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /* =========================
    Employee side
    ========================= */

    #[instrument(
        name = "leave_create",
        skip(self, input),
        fields(leave_type = %input.leave_type, days = input.number_of_days)
    )]
    pub async fn create(&self, input: &LeaveRequestInput) -> Result<LeaveRequest, ApiError> {
        input.validate()?;

        let request = self.api.authorized(Method::POST, routes::LEAVES).json(input);
        let created: LeaveRequest = self.api.send_json(request).await?;

        info!(leave_id = %created.id, "leave request submitted");
        Ok(created)
    }

    #[instrument(name = "leave_list_mine", skip(self))]
    pub async fn list_mine(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.list(routes::MY_LEAVES).await
    }

    /* =========================
    Manager side
    ========================= */

    #[instrument(name = "leave_list_all", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.list(routes::LEAVES).await
    }

    #[instrument(name = "leave_approve", skip(self), fields(leave_id = %id))]
    pub async fn approve(&self, id: LeaveId) -> Result<LeaveRequest, ApiError> {
        let request = self
            .api
            .authorized(Method::POST, &routes::approve_leave(id));
        let updated = self.api.send_json(request).await?;
        Ok(reflect(LeaveAction::Approve, updated))
    }

    #[instrument(name = "leave_reject", skip(self, reason), fields(leave_id = %id))]
    pub async fn reject(&self, id: LeaveId, reason: &str) -> Result<LeaveRequest, ApiError> {
        let body = RejectRequest {
            reason: reason.to_string(),
        };
        let request = self
            .api
            .authorized(Method::POST, &routes::reject_leave(id))
            .json(&body);
        let updated = self.api.send_json(request).await?;
        Ok(reflect(LeaveAction::Reject, updated))
    }

    async fn list(&self, path: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let request = self.api.authorized(Method::GET, path);
        let list: LeaveList = self.api.send_json(request).await?;
        let leaves: Vec<LeaveRequest> = list.into();
        info!(count = leaves.len(), "leave requests fetched");
        Ok(leaves)
    }
}

/// The backend's answer is authoritative; a surprising status is only logged.
fn reflect(action: LeaveAction, updated: LeaveRequest) -> LeaveRequest {
    if updated.status != action.target() {
        warn!(
            leave_id = %updated.id,
            expected = %action.target(),
            returned = %updated.status,
            "backend returned an unexpected status after {action}"
        );
    } else {
        info!(leave_id = %updated.id, status = %updated.status, "leave request decided");
    }
    updated
}
