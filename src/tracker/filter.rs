//! Filter Evaluator
//!
//! Computes the admin view's visible subset of applications. Filtering is
//! pure and keeps store order.

use serde::{Deserialize, Serialize};

use crate::tracker::error::TrackerResult;
use crate::tracker::types::{normalize, ApplicationRecord, Role, Status};

/// The admin view's current search/filter predicate
///
/// `None` for `role` or `status` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub query: String,
}

impl FilterState {
    /// Filter that keeps everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Builder: restrict to one role
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Builder: restrict to one status
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: set the free-text query
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Check whether a record passes every predicate
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        if let Some(role) = self.role {
            if record.role != role {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            return record.name.to_lowercase().contains(&needle)
                || record.email.to_lowercase().contains(&needle);
        }
        true
    }
}

/// Keep the records that match `state`, in the order given
pub fn filter<'a, I>(records: I, state: &FilterState) -> Vec<&'a ApplicationRecord>
where
    I: IntoIterator<Item = &'a ApplicationRecord>,
{
    records.into_iter().filter(|r| state.matches(r)).collect()
}

/// Parse a role selector; `"All"` (or an empty string) means no restriction
pub fn parse_role_choice(s: &str) -> TrackerResult<Option<Role>> {
    if is_all(s) {
        return Ok(None);
    }
    s.parse().map(Some)
}

/// Parse a status selector; `"All"` (or an empty string) means no restriction
pub fn parse_status_choice(s: &str) -> TrackerResult<Option<Status>> {
    if is_all(s) {
        return Ok(None);
    }
    s.parse().map(Some)
}

fn is_all(s: &str) -> bool {
    let s = normalize(s);
    s.is_empty() || s == "all"
}

/// Display label for a selector value
pub fn choice_label<T: std::fmt::Display>(choice: &Option<T>) -> String {
    match choice {
        Some(value) => value.to_string(),
        None => "All".to_string(),
    }
}
