use reqwest::Method;
use tracing::{debug, info, instrument, warn};

use crate::api::client::ApiClient;
use crate::auth::password::check_new_password;
use crate::auth::session::Session;
use crate::error::{AuthError, BackendError};
use crate::model::User;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::routes;

/// Establishes and ends sessions.
///
/// Only a successful `login`/`register` and `logout` write to the
/// session store.
#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[instrument(name = "auth_login", skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        info!("Login request");

        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.api.public(Method::POST, routes::LOGIN).json(&body);
        self.establish(request).await
    }

    /// Checks the password pair locally first; a failed check never reaches
    /// the network.
    #[instrument(
        name = "auth_register",
        skip(self, profile),
        fields(email = %profile.email, role = %profile.role)
    )]
    pub async fn register(&self, profile: &RegisterRequest) -> Result<Session, AuthError> {
        if let Err(e) = check_new_password(&profile.password, &profile.confirm_password) {
            info!(error = %e, "Validation failed");
            return Err(e.into());
        }

        info!("Registration request");
        let request = self.api.public(Method::POST, routes::REGISTER).json(profile);
        self.establish(request).await
    }

    /// Local only: the backend is not told.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.api.session().clear()?;
        info!("Logged out");
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        self.api.session().user()
    }

    async fn establish(&self, request: reqwest::RequestBuilder) -> Result<Session, AuthError> {
        let (status, body) = self.api.execute(request).await?;

        if !status.is_success() {
            let rejection = BackendError::from_body(status, &body);
            warn!(status = status.as_u16(), "Credentials rejected");
            return Err(AuthError::Rejected(rejection));
        }

        let response: AuthResponse = serde_json::from_slice(&body).map_err(AuthError::Decode)?;

        let (token, user) = match response {
            AuthResponse {
                token: Some(token),
                user: Some(user),
            } if !token.is_empty() => (token, user),
            _ => {
                warn!(status = status.as_u16(), "Success response without a usable session");
                return Err(AuthError::Rejected(BackendError::from_body(status, &body)));
            }
        };

        debug!(user_id = user.id, "Storing session");
        self.api.session().set(&token, &user)?;

        info!(user_id = user.id, role = %user.role, "Session established");
        Ok(Session { token, user })
    }
}
