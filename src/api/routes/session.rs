//! Session Routes
//!
//! The server holds a single session shared by every client.
//!
//! - GET /api/v1/session - Current user and screen
//! - POST /api/v1/session/login - Sign in
//! - POST /api/v1/session/register - Create an account and sign in
//! - DELETE /api/v1/session - Sign out

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{LoginRequest, RegisterRequest, SessionResponse};
use crate::api::error::ApiResult;
use crate::api::extract::ApiJson;
use crate::api::state::ApiState;
use crate::session::{Action, AppState, Credentials, Outcome, Registration};
use crate::tracker::Role;

/// GET /api/v1/session
pub async fn get_session(State(state): State<Arc<ApiState>>) -> Json<SessionResponse> {
    let app = state.app.read().await;
    Json(SessionResponse {
        user: app.user().cloned(),
        view: app.view(),
        notice: None,
    })
}

/// POST /api/v1/session/login
pub async fn login(
    State(state): State<Arc<ApiState>>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let credentials = Credentials {
        email: req.email,
        password: req.password,
    };
    let session = state
        .dispatch_with(Action::Login { credentials }, snapshot)
        .await?;

    Ok(Json(session))
}

/// POST /api/v1/session/register
pub async fn register(
    State(state): State<Arc<ApiState>>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let role = match req.role.as_deref() {
        Some(role) => role.parse::<Role>()?,
        None => Role::default(),
    };
    let registration = Registration {
        full_name: req.full_name,
        email: req.email,
        password: req.password,
        role,
    };
    let session = state
        .dispatch_with(Action::Register { registration }, snapshot)
        .await?;

    Ok(Json(session))
}

/// DELETE /api/v1/session
pub async fn logout(State(state): State<Arc<ApiState>>) -> ApiResult<Json<SessionResponse>> {
    let session = state.dispatch_with(Action::SignOut, snapshot).await?;
    Ok(Json(session))
}

fn snapshot(app: &AppState, outcome: Outcome) -> SessionResponse {
    SessionResponse {
        user: app.user().cloned(),
        view: outcome.view,
        notice: outcome.notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::config::ApiConfig;
    use crate::session::{AppState, View};

    fn test_state() -> Arc<ApiState> {
        Arc::new(ApiState::new(AppState::default(), ApiConfig::default()))
    }

    fn login_request(email: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: String::new(),
        }
    }

    #[tokio::test]
    async fn test_signed_out_by_default() {
        let Json(session) = get_session(State(test_state())).await;
        assert!(session.user.is_none());
        assert_eq!(session.view, View::Home);
    }

    #[tokio::test]
    async fn test_admin_login() {
        let state = test_state();
        let Json(session) = login(State(Arc::clone(&state)), ApiJson(login_request("hr@veridia.com")))
            .await
            .unwrap();

        let user = session.user.unwrap();
        assert!(user.admin);
        assert_eq!(user.name, "HR Team");
        assert_eq!(session.view, View::Admin);
    }

    #[tokio::test]
    async fn test_login_response_matches_stored_session() {
        let state = test_state();
        let Json(session) = login(State(Arc::clone(&state)), ApiJson(login_request("neha@example.com")))
            .await
            .unwrap();

        let Json(current) = get_session(State(state)).await;
        assert_eq!(session.user, current.user);
        assert_eq!(session.view, current.view);
        assert_eq!(session.view, View::Applicant);
    }

    #[tokio::test]
    async fn test_login_requires_email() {
        let result = login(State(test_state()), ApiJson(login_request("  "))).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_then_logout() {
        let state = test_state();
        let req = RegisterRequest {
            full_name: "Neha Patil".to_string(),
            email: "neha@example.com".to_string(),
            password: String::new(),
            role: Some("data scientist".to_string()),
        };
        let Json(session) = register(State(Arc::clone(&state)), ApiJson(req)).await.unwrap();
        let user = session.user.unwrap();
        assert_eq!(user.name, "Neha Patil");
        assert_eq!(user.role, Some(Role::DataScientist));
        assert_eq!(session.view, View::Applicant);

        let Json(session) = logout(State(Arc::clone(&state))).await.unwrap();
        assert!(session.user.is_none());
        assert_eq!(session.view, View::Home);
    }
}
