pub mod filter;
pub mod leave_request;
pub mod lifecycle;
pub mod role;
pub mod user;

pub use filter::{LeaveFilter, StatusCounts};
pub use leave_request::{EmployeeRef, LeaveId, LeaveRequest, LeaveRequestInput, LeaveType};
pub use lifecycle::{LeaveAction, LeaveStatus, TransitionError};
pub use role::Role;
pub use user::User;
