//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::session::{Notice, SessionUser, View};
use crate::tracker::ApplicationRecord;

// ============================================
// APPLICATION DTOs
// ============================================

/// Query string for listing applications
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Role name or "All"
    #[serde(default)]
    pub role: Option<String>,
    /// Status name or "All"
    #[serde(default)]
    pub status: Option<String>,
    /// Case-insensitive substring of name or email
    #[serde(default)]
    pub q: Option<String>,
}

/// Application list response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub total: usize,
    pub applications: Vec<ApplicationRecord>,
}

/// New application request
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub full_name: String,
    pub email: String,
    /// Role name; defaults to Frontend Dev
    #[serde(default)]
    pub role: Option<String>,
}

/// Status change request
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// ============================================
// SESSION DTOs
// ============================================

/// Login request
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Role name; defaults to Frontend Dev
    #[serde(default)]
    pub role: Option<String>,
}

/// Current session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Signed-in user, null when signed out
    pub user: Option<SessionUser>,
    /// Screen the session is on
    pub view: View,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy"
    pub status: String,
    /// Applications currently held in memory
    pub applications: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
