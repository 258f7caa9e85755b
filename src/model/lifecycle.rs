use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Approval state of a leave request.
///
/// `Pending` is the only non-terminal state. A request moves out of it at
/// most once and never comes back.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A manager's decision on a pending request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LeaveAction {
    Approve,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("leave request is already {0}")]
    AlreadyDecided(LeaveStatus),
}

impl LeaveAction {
    /// State the request lands in when this action succeeds.
    pub fn target(&self) -> LeaveStatus {
        match self {
            LeaveAction::Approve => LeaveStatus::Approved,
            LeaveAction::Reject => LeaveStatus::Rejected,
        }
    }
}

impl LeaveStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }

    pub fn apply(self, action: LeaveAction) -> Result<LeaveStatus, TransitionError> {
        match self {
            LeaveStatus::Pending => Ok(action.target()),
            decided => Err(TransitionError::AlreadyDecided(decided)),
        }
    }
}
