use actix_web::error::{ErrorForbidden, ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};
use leavedesk::model::Role;
use serde_json::json;

use super::BackendState;
use super::jwt::verify_token;

pub struct AuthUser {
    pub user_id: u64,
    pub email: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(t) => t,
            None => {
                return ready(Err(ErrorUnauthorized(
                    json!({"error": "Missing Authorization header"}),
                )));
            }
        };

        let state = match req.app_data::<Data<BackendState>>() {
            Some(s) => s,
            None => return ready(Err(ErrorInternalServerError("State missing"))),
        };

        match verify_token(token, &state.secret) {
            Ok(claims) => ready(Ok(AuthUser {
                user_id: claims.user_id,
                email: claims.sub,
                role: claims.role,
            })),
            Err(e) => ready(Err(ErrorUnauthorized(
                json!({"error": "Invalid or expired token", "details": e}),
            ))),
        }
    }
}

impl AuthUser {
    pub fn require_manager(&self) -> actix_web::Result<()> {
        if self.role.can_decide_leaves() {
            Ok(())
        } else {
            Err(ErrorForbidden(json!({"error": "Manager/HR only"})))
        }
    }
}
