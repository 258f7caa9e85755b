use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::lifecycle::LeaveStatus;

/// Reasons longer than this are refused before reaching the backend.
pub const MAX_REASON_CHARS: usize = 150;

/// Backend-assigned identifier of a leave request.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LeaveId(pub u64);

/// Kind of absence. The set is open: labels the client does not know are
/// carried through untouched as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Maternity,
    Permission,
    CompensatoryOff,
    Other(String),
}

impl LeaveType {
    /// Short absences within a day, listed apart from full leaves.
    pub fn is_permission(&self) -> bool {
        matches!(self, LeaveType::Permission)
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaveType::Annual => write!(f, "Annual"),
            LeaveType::Sick => write!(f, "Sick"),
            LeaveType::Personal => write!(f, "Personal"),
            LeaveType::Maternity => write!(f, "Maternity"),
            LeaveType::Permission => write!(f, "Permission"),
            LeaveType::CompensatoryOff => write!(f, "Compensatory Off"),
            LeaveType::Other(label) => write!(f, "{label}"),
        }
    }
}

impl FromStr for LeaveType {
    type Err = std::convert::Infallible;

    /// Accepts the labels the forms use ("Annual Leaves", "Sick Leave",
    /// "comp-off", ...) as well as the bare names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let lowered = label.to_lowercase().replace(['-', '_'], " ");
        let key = lowered
            .strip_suffix(" leaves")
            .or_else(|| lowered.strip_suffix(" leave"))
            .unwrap_or(&lowered)
            .trim();

        Ok(match key {
            "annual" => LeaveType::Annual,
            "sick" => LeaveType::Sick,
            "personal" => LeaveType::Personal,
            "maternity" => LeaveType::Maternity,
            "permission" => LeaveType::Permission,
            "compensatory off" | "comp off" | "compensatory" => LeaveType::CompensatoryOff,
            _ => LeaveType::Other(label.to_string()),
        })
    }
}

impl From<String> for LeaveType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<LeaveType> for String {
    fn from(value: LeaveType) -> Self {
        value.to_string()
    }
}

/// Denormalized person reference carried on a request for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: String,
    /// Job title shown next to the name, e.g. "UI/UX Designer".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A leave request as the backend reports it.
///
/// Only `id` is mandatory on the wire; approve/reject endpoints may echo
/// a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: LeaveId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<LeaveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_days: Option<u32>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub inform_to: Vec<String>,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver: Option<EmployeeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Fields an employee fills in on the request form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestInput {
    pub leave_type: LeaveType,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    /// Entered separately from the dates; never reconciled with them here.
    pub number_of_days: u32,
    pub reason: String,
    #[serde(default)]
    pub inform_to: Vec<String>,
}

impl LeaveRequestInput {
    /// Inclusive span between the two dates, zero if they are reversed.
    pub fn calendar_days(from: NaiveDate, to: NaiveDate) -> u32 {
        let span = (to - from).num_days() + 1;
        u32::try_from(span).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reason.trim().is_empty() {
            return Err(ValidationError::MissingField("reason"));
        }

        let actual = self.reason.chars().count();
        if actual > MAX_REASON_CHARS {
            return Err(ValidationError::ReasonTooLong {
                max: MAX_REASON_CHARS,
                actual,
            });
        }

        if self.from_date > self.to_date {
            return Err(ValidationError::InvalidDateRange {
                from: self.from_date,
                to: self.to_date,
            });
        }

        if self.number_of_days == 0 {
            return Err(ValidationError::InvalidDayCount);
        }

        Ok(())
    }
}
