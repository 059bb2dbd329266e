//! API State
//!
//! Shared state accessible by all API handlers.
//! The whole prototype state sits behind one lock, so every request sees the
//! effect of the previous one.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::ApiConfig;
use crate::session::{Action, AppState, Outcome};
use crate::tracker::TrackerResult;

/// Shared state for all handlers
#[derive(Clone)]
pub struct ApiState {
    /// The single in-memory application state
    pub app: Arc<RwLock<AppState>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ApiState {
    pub fn new(app: AppState, config: ApiConfig) -> Self {
        Self {
            app: Arc::new(RwLock::new(app)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Apply one action under the write lock
    pub async fn dispatch(&self, action: Action) -> TrackerResult<Outcome> {
        self.app.write().await.dispatch(action)
    }

    /// Apply one action and read the resulting state under the same lock
    pub async fn dispatch_with<R>(
        &self,
        action: Action,
        read: impl FnOnce(&AppState, Outcome) -> R,
    ) -> TrackerResult<R> {
        let mut app = self.app.write().await;
        let outcome = app.dispatch(action)?;
        Ok(read(&*app, outcome))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
