//! Core data types for application tracking
//!
//! - `Role`: the fixed set of open positions
//! - `Status`: where an application stands in review
//! - `ApplicationDraft`: what a candidate hands in
//! - `ApplicationRecord`: a stored application

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::tracker::error::{require, validate_email, TrackerError, TrackerResult};

/// Position a candidate applies for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    #[serde(rename = "Frontend Dev")]
    FrontendDev,
    #[serde(rename = "Backend Dev")]
    BackendDev,
    #[serde(rename = "Data Scientist")]
    DataScientist,
}

impl Role {
    /// Get all roles in the order the forms offer them
    pub fn all() -> &'static [Role] {
        &[Role::FrontendDev, Role::BackendDev, Role::DataScientist]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::FrontendDev => "Frontend Dev",
            Role::BackendDev => "Backend Dev",
            Role::DataScientist => "Data Scientist",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "frontend dev" | "frontend" => Ok(Role::FrontendDev),
            "backend dev" | "backend" => Ok(Role::BackendDev),
            "data scientist" => Ok(Role::DataScientist),
            _ => Err(TrackerError::parse("role", s)),
        }
    }
}

/// Review status of an application
///
/// Any status may follow any other; only an admin action changes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Submitted,
    Shortlisted,
    Rejected,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[Status::Submitted, Status::Shortlisted, Status::Rejected]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Submitted => "Submitted",
            Status::Shortlisted => "Shortlisted",
            Status::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "submitted" => Ok(Status::Submitted),
            "shortlisted" => Ok(Status::Shortlisted),
            "rejected" => Ok(Status::Rejected),
            _ => Err(TrackerError::parse("status", s)),
        }
    }
}

/// Lowercase and treat `-`/`_` as spaces so `backend-dev` reads as `Backend Dev`
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// A not-yet-stored application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl ApplicationDraft {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            role,
        }
    }

    /// Check required fields and the email shape
    pub fn validate(&self) -> TrackerResult<()> {
        require("full name", &self.full_name)?;
        validate_email(&self.email)
    }
}

/// A submitted job application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationRecord {
    /// Sequential identifier, never reused
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    /// Day of submission (UTC); never changes
    pub submitted_on: NaiveDate,
}

impl ApplicationRecord {
    /// Build a fresh record from a draft; status starts at `Submitted`
    pub fn from_draft(id: u32, draft: ApplicationDraft, submitted_on: NaiveDate) -> Self {
        Self {
            id,
            name: draft.full_name.trim().to_string(),
            email: draft.email.trim().to_string(),
            role: draft.role,
            status: Status::Submitted,
            submitted_on,
        }
    }
}

/// Today's date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
