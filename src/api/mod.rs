pub mod client;
pub mod leave_request;

pub use client::ApiClient;
pub use leave_request::LeaveClient;
