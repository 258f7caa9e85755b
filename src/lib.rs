//! Client for the leave-management backend.
//!
//! [`auth::AuthClient`] logs in and registers, keeping the bearer token and
//! profile in a [`auth::SessionStore`]. [`api::LeaveClient`] submits, lists
//! and decides leave requests with that token. Both share one
//! [`api::ApiClient`].

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod models;
pub mod routes;

pub use api::{ApiClient, LeaveClient};
pub use auth::{AuthClient, Session, SessionStore};
pub use config::Config;
pub use error::{ApiError, AuthError, BackendError, StorageError, ValidationError};
