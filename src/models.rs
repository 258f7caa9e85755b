use serde::{Deserialize, Serialize};

use crate::model::{Role, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration form, sent as-is once the password checks pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub employee_id: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub job_title: String,
    pub department: String,
    pub role: Role,
    pub terms_accepted: bool,
}

/// Success body of both login and register.
///
/// `token` stays optional so that a 2xx without one can be reported
/// instead of failing to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}
