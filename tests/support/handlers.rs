use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use leavedesk::model::{
    EmployeeRef, LeaveAction, LeaveId, LeaveRequest, LeaveRequestInput, LeaveStatus, User,
};
use leavedesk::models::{AuthResponse, LoginRequest, RegisterRequest, RejectRequest};
use serde::Serialize;
use serde_json::json;

use super::auth::AuthUser;
use super::jwt::generate_token;
use super::{Account, BackendState};

#[derive(Serialize)]
struct LeaveListResponse<'a> {
    data: &'a [LeaveRequest],
    page: u32,
    per_page: u32,
    total: usize,
}

fn session_response(user: User, secret: &str) -> AuthResponse {
    AuthResponse {
        token: Some(generate_token(&user, secret)),
        user: Some(user),
    }
}

/* =========================
Auth
========================= */

pub async fn login(
    body: web::Json<LoginRequest>,
    state: web::Data<BackendState>,
) -> impl Responder {
    let accounts = state.accounts.lock().unwrap();

    match accounts
        .iter()
        .find(|a| a.user.email == body.email && a.password == body.password)
    {
        Some(account) => {
            HttpResponse::Ok().json(session_response(account.user.clone(), &state.secret))
        }
        None => HttpResponse::Unauthorized().json(json!({"error": "Invalid credentials"})),
    }
}

pub async fn register(
    body: web::Json<RegisterRequest>,
    state: web::Data<BackendState>,
) -> impl Responder {
    let mut accounts = state.accounts.lock().unwrap();

    if accounts.iter().any(|a| a.user.email == body.email) {
        return HttpResponse::Conflict().json(json!({"error": "Email already registered"}));
    }

    let user = User {
        id: accounts.len() as u64 + 1,
        name: body.full_name.clone(),
        email: body.email.clone(),
        role: body.role,
        job_title: Some(body.job_title.clone()),
    };
    accounts.push(Account {
        user: user.clone(),
        password: body.password.clone(),
    });

    HttpResponse::Created().json(session_response(user, &state.secret))
}

/* =========================
Leave requests
========================= */

pub async fn create_leave(
    auth: AuthUser,
    state: web::Data<BackendState>,
    payload: web::Json<LeaveRequestInput>,
) -> impl Responder {
    if payload.from_date > payload.to_date {
        return HttpResponse::BadRequest()
            .json(json!({"message": "fromDate cannot be after toDate"}));
    }

    let (employee, approver) = {
        let accounts = state.accounts.lock().unwrap();
        let employee = accounts
            .iter()
            .find(|a| a.user.id == auth.user_id)
            .map(|a| employee_ref(&a.user));
        let approver = accounts
            .iter()
            .find(|a| a.user.role.can_decide_leaves())
            .map(|a| employee_ref(&a.user));
        (employee, approver)
    };

    let mut leaves = state.leaves.lock().unwrap();
    let payload = payload.into_inner();
    let leave = LeaveRequest {
        id: LeaveId(leaves.len() as u64 + 1),
        employee,
        leave_type: Some(payload.leave_type),
        from_date: Some(payload.from_date),
        to_date: Some(payload.to_date),
        number_of_days: Some(payload.number_of_days),
        reason: payload.reason,
        inform_to: payload.inform_to,
        status: LeaveStatus::Pending,
        approver,
        applied_date: Some(Utc::now().date_naive()),
        rejection_reason: None,
    };
    leaves.push(leave.clone());

    HttpResponse::Created().json(leave)
}

pub async fn leave_list(auth: AuthUser, state: web::Data<BackendState>) -> actix_web::Result<impl Responder> {
    auth.require_manager()?;

    let leaves = state.leaves.lock().unwrap();
    Ok(HttpResponse::Ok().json(LeaveListResponse {
        data: &leaves,
        page: 1,
        per_page: 100,
        total: leaves.len(),
    }))
}

pub async fn my_leaves(auth: AuthUser, state: web::Data<BackendState>) -> impl Responder {
    let leaves = state.leaves.lock().unwrap();
    let mine: Vec<&LeaveRequest> = leaves
        .iter()
        .filter(|l| l.employee.as_ref().and_then(|e| e.id) == Some(auth.user_id))
        .collect();

    HttpResponse::Ok().json(mine)
}

pub async fn approve_leave(
    auth: AuthUser,
    state: web::Data<BackendState>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager()?;
    Ok(decide(&state, path.into_inner(), LeaveAction::Approve, None))
}

pub async fn reject_leave(
    auth: AuthUser,
    state: web::Data<BackendState>,
    path: web::Path<u64>,
    body: web::Json<RejectRequest>,
) -> actix_web::Result<impl Responder> {
    auth.require_manager()?;
    Ok(decide(
        &state,
        path.into_inner(),
        LeaveAction::Reject,
        Some(body.into_inner().reason),
    ))
}

fn decide(
    state: &BackendState,
    leave_id: u64,
    action: LeaveAction,
    reason: Option<String>,
) -> HttpResponse {
    let mut leaves = state.leaves.lock().unwrap();

    let Some(leave) = leaves.iter_mut().find(|l| l.id == LeaveId(leave_id)) else {
        return HttpResponse::NotFound().json(json!({"message": "Leave request not found"}));
    };

    match leave.status.apply(action) {
        Ok(next) => {
            leave.status = next;
            leave.rejection_reason = reason;
            HttpResponse::Ok().json(leave.clone())
        }
        Err(e) => HttpResponse::Conflict().json(json!({"message": e.to_string()})),
    }
}

fn employee_ref(user: &User) -> EmployeeRef {
    EmployeeRef {
        id: Some(user.id),
        name: user.name.clone(),
        role: user.job_title.clone(),
    }
}
