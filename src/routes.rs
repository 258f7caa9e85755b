//! Paths of the leave backend, relative to the configured base URL.
//!
//! ```text
//! PUBLIC
//!  ├─ POST /auth/login
//!  └─ POST /auth/register
//!
//! BEARER
//!  ├─ POST /leaves               create
//!  ├─ GET  /leaves               all employees (manager)
//!  ├─ GET  /leaves/my            own requests
//!  ├─ POST /leaves/{id}/approve
//!  └─ POST /leaves/{id}/reject   { reason }
//! ```

use crate::model::LeaveId;

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const LEAVES: &str = "/leaves";
pub const MY_LEAVES: &str = "/leaves/my";

pub fn approve_leave(id: LeaveId) -> String {
    format!("{LEAVES}/{id}/approve")
}

pub fn reject_leave(id: LeaveId) -> String {
    format!("{LEAVES}/{id}/reject")
}
