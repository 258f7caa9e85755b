use std::fmt;

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Checks made locally, before any request leaves the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least {min} characters long")]
    WeakPassword { min: usize },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("reason is {actual} characters, maximum is {max}")]
    ReasonTooLong { max: usize, actual: usize },

    #[error("from date {from} is after to date {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("number of days must be at least 1")]
    InvalidDayCount,
}

/// A non-success answer from the backend, kept exactly as received.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendError {
    pub status: StatusCode,
    /// Parsed JSON body, or the raw text as a JSON string when it is not JSON.
    pub payload: Value,
}

impl BackendError {
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let payload = serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()));
        Self { status, payload }
    }

    /// Human-readable message from the usual `error`/`message` fields.
    pub fn message(&self) -> Option<&str> {
        match &self.payload {
            Value::String(text) if !text.is_empty() => Some(text.as_str()),
            Value::Object(map) => ["error", "message", "detail"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str)),
            _ => None,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.status, message),
            None => write!(f, "{}: {}", self.status, self.payload),
        }
    }
}

impl std::error::Error for BackendError {}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage is corrupt: {0}")]
    Format(#[from] serde_json::Error),

    #[error("session storage lock poisoned")]
    Poisoned,
}

/// Failures of login and registration.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credentials refused, or a success answer that carried no token.
    #[error("backend rejected the request ({0})")]
    Rejected(BackendError),

    #[error("unexpected response body: {0}")]
    Decode(serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Failures of authenticated leave operations.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 401: no token, or one the backend no longer accepts.
    #[error("not authenticated ({0})")]
    Unauthenticated(BackendError),

    /// 403: authenticated but not allowed, e.g. staff approving a request.
    #[error("forbidden ({0})")]
    Forbidden(BackendError),

    #[error("backend error ({0})")]
    Backend(BackendError),

    #[error("unexpected response body: {0}")]
    Decode(serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn from_backend(error: BackendError) -> Self {
        match error.status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthenticated(error),
            StatusCode::FORBIDDEN => ApiError::Forbidden(error),
            _ => ApiError::Backend(error),
        }
    }

    pub fn backend(&self) -> Option<&BackendError> {
        match self {
            ApiError::Unauthenticated(e) | ApiError::Forbidden(e) | ApiError::Backend(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },

    #[error("{var} has an unknown log level: {value}")]
    InvalidLogLevel { var: &'static str, value: String },
}
