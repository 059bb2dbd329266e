//! Application Routes
//!
//! - GET /api/v1/applications - List applications, filtered by role, status and text
//! - POST /api/v1/applications - Submit a new application
//! - GET /api/v1/applications/:id - Get one application
//! - PUT /api/v1/applications/:id/status - Change an application's status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{
    ApplicationListResponse, CreateApplicationRequest, ListQuery, UpdateStatusRequest,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::{ApiJson, ApiPath, ApiQuery};
use crate::api::state::ApiState;
use crate::session::Action;
use crate::tracker::{
    filter, parse_role_choice, parse_status_choice, ApplicationDraft, ApplicationRecord,
    FilterState, Role, Status,
};

/// GET /api/v1/applications
///
/// Newest first. The query leaves the session's own admin filter untouched.
pub async fn list_applications(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> ApiResult<Json<ApplicationListResponse>> {
    let selection = FilterState {
        role: parse_role_choice(query.role.as_deref().unwrap_or_default())?,
        status: parse_status_choice(query.status.as_deref().unwrap_or_default())?,
        query: query.q.unwrap_or_default(),
    };

    let app = state.app.read().await;
    let applications: Vec<ApplicationRecord> = filter(app.store().records(), &selection)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ApplicationListResponse {
        total: applications.len(),
        applications,
    }))
}

/// GET /api/v1/applications/:id
pub async fn get_application(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<u32>,
) -> ApiResult<Json<ApplicationRecord>> {
    let app = state.app.read().await;
    let record = app
        .store()
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Application with id {} not found", id)))?;

    Ok(Json(record))
}

/// POST /api/v1/applications
///
/// Same path as submitting the apply form: the session moves to the
/// applicant dashboard (or to login when nobody is signed in).
pub async fn create_application(
    State(state): State<Arc<ApiState>>,
    ApiJson(req): ApiJson<CreateApplicationRequest>,
) -> ApiResult<(StatusCode, Json<ApplicationRecord>)> {
    let role = match req.role.as_deref() {
        Some(role) => role.parse::<Role>()?,
        None => Role::default(),
    };
    let draft = ApplicationDraft::new(req.full_name, req.email, role);

    let outcome = state.dispatch(Action::Submit { draft }).await?;
    let record = outcome
        .record
        .ok_or_else(|| ApiError::Internal("Submission produced no record".to_string()))?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/v1/applications/:id/status
pub async fn update_status(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<u32>,
    ApiJson(req): ApiJson<UpdateStatusRequest>,
) -> ApiResult<Json<ApplicationRecord>> {
    let status = req.status.parse::<Status>()?;

    let outcome = state.dispatch(Action::SetStatus { id, status }).await?;
    let record = outcome
        .record
        .ok_or_else(|| ApiError::Internal("Status change produced no record".to_string()))?;

    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::session::AppState;

    fn test_state() -> Arc<ApiState> {
        Arc::new(ApiState::new(AppState::default(), ApiConfig::default()))
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let state = test_state();
        let Json(list) = list_applications(State(state), ApiQuery(ListQuery::default()))
            .await
            .unwrap();

        assert_eq!(list.total, 3);
        let ids: Vec<u32> = list.applications.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_filtered() {
        let state = test_state();
        let query = ListQuery {
            role: Some("All".to_string()),
            status: Some("Rejected".to_string()),
            q: None,
        };
        let Json(list) = list_applications(State(state), ApiQuery(query)).await.unwrap();

        assert_eq!(list.total, 1);
        assert_eq!(list.applications[0].name, "Rahul Joshi");
    }

    #[tokio::test]
    async fn test_list_leaves_session_filter_alone() {
        let state = test_state();
        state
            .dispatch(Action::SetFilterRole {
                role: Some(Role::DataScientist),
            })
            .await
            .unwrap();

        let query = ListQuery {
            status: Some("Rejected".to_string()),
            ..Default::default()
        };
        let Json(list) = list_applications(State(Arc::clone(&state)), ApiQuery(query))
            .await
            .unwrap();
        assert_eq!(list.total, 1);

        let app = state.app.read().await;
        assert_eq!(
            app.filters(),
            &FilterState {
                role: Some(Role::DataScientist),
                ..FilterState::default()
            }
        );
        assert_eq!(app.visible_applications().len(), 1);
        assert_eq!(app.visible_applications()[0].name, "Neha Patil");
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_role() {
        let query = ListQuery {
            role: Some("Designer".to_string()),
            ..Default::default()
        };
        let result = list_applications(State(test_state()), ApiQuery(query)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let state = test_state();
        let req = CreateApplicationRequest {
            full_name: "Priya Nair".to_string(),
            email: "priya@example.com".to_string(),
            role: Some("Backend Dev".to_string()),
        };

        let (status, Json(record)) = create_application(State(Arc::clone(&state)), ApiJson(req))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(record.id, 4);
        assert_eq!(record.status, Status::Submitted);

        let Json(fetched) = get_application(State(state), ApiPath(4)).await.unwrap();
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn test_create_requires_email() {
        let req = CreateApplicationRequest {
            full_name: "Priya Nair".to_string(),
            email: String::new(),
            role: None,
        };
        let result = create_application(State(test_state()), ApiJson(req)).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_status() {
        let state = test_state();
        let req = UpdateStatusRequest {
            status: "shortlisted".to_string(),
        };
        let Json(record) = update_status(State(Arc::clone(&state)), ApiPath(1), ApiJson(req))
            .await
            .unwrap();
        assert_eq!(record.status, Status::Shortlisted);

        let app = state.app.read().await;
        assert_eq!(app.store().get(1).unwrap().status, Status::Shortlisted);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let req = UpdateStatusRequest {
            status: "Rejected".to_string(),
        };
        let result = update_status(State(test_state()), ApiPath(42), ApiJson(req)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
