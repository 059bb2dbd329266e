//! Stats Route
//!
//! - GET /api/v1/stats - Figures shown on the home screen

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::ApiState;
use crate::session::HomeStats;

/// GET /api/v1/stats
pub async fn get_stats(State(state): State<Arc<ApiState>>) -> Json<HomeStats> {
    Json(state.app.read().await.home_stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiConfig, CatalogConfig};
    use crate::session::AppState;

    #[tokio::test]
    async fn test_stats_follow_catalog() {
        let catalog = CatalogConfig {
            seed_sample_data: false,
            open_roles: 2,
            avg_time_to_hire_days: 11,
        };
        let state = Arc::new(ApiState::new(AppState::new(&catalog), ApiConfig::default()));

        let Json(stats) = get_stats(State(state)).await;
        assert_eq!(stats.applications, 0);
        assert_eq!(stats.open_roles, 2);
        assert_eq!(stats.avg_time_to_hire_days, 11);
    }
}
