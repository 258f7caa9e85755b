use crate::model::leave_request::{LeaveRequest, LeaveType};
use crate::model::lifecycle::LeaveStatus;

/// Dashboard view over a list of requests: status and leave-type tabs plus a
/// search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveFilter {
    pub status: Option<LeaveStatus>,
    pub leave_type: Option<LeaveType>,
    pub search: Option<String>,
}

/// Number of requests per status, for tab badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl LeaveFilter {
    pub fn with_status(mut self, status: LeaveStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Requests without a leave type never match.
    pub fn with_leave_type(mut self, leave_type: LeaveType) -> Self {
        self.leave_type = Some(leave_type);
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Case-insensitive substring match over employee name and role,
    /// leave type and reason. A blank query matches everything.
    pub fn matches(&self, leave: &LeaveRequest) -> bool {
        if let Some(status) = self.status {
            if leave.status != status {
                return false;
            }
        }

        if let Some(kind) = &self.leave_type {
            if leave.leave_type.as_ref() != Some(kind) {
                return false;
            }
        }

        let query = match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };

        let mut haystacks: Vec<String> = vec![leave.reason.clone()];
        if let Some(employee) = &leave.employee {
            haystacks.push(employee.name.clone());
            haystacks.extend(employee.role.clone());
        }
        if let Some(kind) = &leave.leave_type {
            haystacks.push(kind.to_string());
        }

        haystacks
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Keeps the backend's order.
    pub fn apply<'a>(&self, leaves: &'a [LeaveRequest]) -> Vec<&'a LeaveRequest> {
        leaves.iter().filter(|leave| self.matches(leave)).collect()
    }
}

impl StatusCounts {
    pub fn tally<'a>(leaves: impl IntoIterator<Item = &'a LeaveRequest>) -> Self {
        leaves
            .into_iter()
            .fold(Self::default(), |mut counts, leave| {
                match leave.status {
                    LeaveStatus::Pending => counts.pending += 1,
                    LeaveStatus::Approved => counts.approved += 1,
                    LeaveStatus::Rejected => counts.rejected += 1,
                }
                counts
            })
    }

    pub fn get(&self, status: LeaveStatus) -> usize {
        match status {
            LeaveStatus::Pending => self.pending,
            LeaveStatus::Approved => self.approved,
            LeaveStatus::Rejected => self.rejected,
        }
    }
}
