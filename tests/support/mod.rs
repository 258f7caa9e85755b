//! In-process fake of the leave backend, plus client helpers.
#![allow(dead_code)]

pub mod auth;
pub mod handlers;
pub mod jwt;
pub mod routes;

use std::sync::{Arc, Mutex};

use actix_web::{App, HttpServer, web};
use leavedesk::model::{LeaveRequest, Role, User};
use leavedesk::{ApiClient, AuthClient, LeaveClient, SessionStore};

pub const MANAGER_EMAIL: &str = "elizabeth@company.com";
pub const MANAGER_PASSWORD: &str = "manager-pass";

pub struct Account {
    pub user: User,
    pub password: String,
}

pub struct BackendState {
    pub secret: String,
    pub accounts: Mutex<Vec<Account>>,
    pub leaves: Mutex<Vec<LeaveRequest>>,
}

impl BackendState {
    /// One manager account, no leave requests.
    pub fn seeded() -> Self {
        let manager = Account {
            user: User {
                id: 1,
                name: "Elizabeth Penelope".to_string(),
                email: MANAGER_EMAIL.to_string(),
                role: Role::Manager,
                job_title: Some("Team Lead UI/UX".to_string()),
            },
            password: MANAGER_PASSWORD.to_string(),
        };

        Self {
            secret: "test-secret".to_string(),
            accounts: Mutex::new(vec![manager]),
            leaves: Mutex::new(Vec::new()),
        }
    }
}

pub struct TestBackend {
    pub base_url: String,
    pub state: web::Data<BackendState>,
}

/// Must be called from an actix system, e.g. inside `#[actix_web::test]`.
pub async fn spawn_backend() -> TestBackend {
    let state = web::Data::new(BackendState::seeded());
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake backend");

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());

    TestBackend {
        base_url: format!("http://{addr}/api"),
        state,
    }
}

/// Auth and leave clients sharing one fresh in-memory session.
pub struct Clients {
    pub session: Arc<SessionStore>,
    pub auth: AuthClient,
    pub leaves: LeaveClient,
}

pub fn clients(base_url: &str) -> Clients {
    clients_with(base_url, Arc::new(SessionStore::in_memory()))
}

pub fn clients_with(base_url: &str, session: Arc<SessionStore>) -> Clients {
    let api = ApiClient::new(base_url, session.clone()).expect("build http client");
    Clients {
        session,
        auth: AuthClient::new(api.clone()),
        leaves: LeaveClient::new(api),
    }
}

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}
