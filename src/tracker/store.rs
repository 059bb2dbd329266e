//! Application Record Store
//!
//! Holds submitted applications newest-first. Supports append (prepend, in
//! iteration terms) and status mutation; nothing is ever removed.

use chrono::NaiveDate;
use std::collections::VecDeque;

use crate::tracker::error::{TrackerError, TrackerResult};
use crate::tracker::types::{today, ApplicationDraft, ApplicationRecord, Role, Status};

/// In-memory store of job applications
#[derive(Debug, Clone, Default)]
pub struct ApplicationStore {
    /// Newest first
    records: VecDeque<ApplicationRecord>,
}

impl ApplicationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three sample applications
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for record in sample_records() {
            store.records.push_back(record);
        }
        store
    }

    /// Submit a draft dated today
    pub fn submit(&mut self, draft: ApplicationDraft) -> TrackerResult<ApplicationRecord> {
        self.submit_on(draft, today())
    }

    /// Submit a draft with an explicit submission date
    ///
    /// The new record gets id `len + 1`, status `Submitted`, and becomes the
    /// head of the store. Ids stay unique because records are never removed.
    pub fn submit_on(
        &mut self,
        draft: ApplicationDraft,
        submitted_on: NaiveDate,
    ) -> TrackerResult<ApplicationRecord> {
        draft.validate()?;

        let id = self.records.len() as u32 + 1;
        let record = ApplicationRecord::from_draft(id, draft, submitted_on);
        self.records.push_front(record.clone());

        tracing::info!(
            application_id = id,
            role = %record.role,
            "Application submitted"
        );
        Ok(record)
    }

    /// Replace the status of one application
    ///
    /// Unknown ids leave the store untouched and return `NotFound`.
    pub fn set_status(&mut self, id: u32, status: Status) -> TrackerResult<ApplicationRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(TrackerError::NotFound(id))?;

        let previous = record.status;
        record.status = status;

        tracing::info!(
            application_id = id,
            from = %previous,
            to = %status,
            "Application status updated"
        );
        Ok(record.clone())
    }

    /// Look up one application
    pub fn get(&self, id: u32) -> Option<&ApplicationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Iterate in store order (newest first)
    pub fn records(&self) -> impl Iterator<Item = &ApplicationRecord> + '_ {
        self.records.iter()
    }

    /// The first `n` records in store order
    pub fn recent(&self, n: usize) -> Vec<&ApplicationRecord> {
        self.records.iter().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn sample_records() -> Vec<ApplicationRecord> {
    let sample = |id: u32, name: &str, email: &str, role: Role, status: Status, day: u32| {
        ApplicationRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            submitted_on: NaiveDate::from_ymd_opt(2025, 9, day).unwrap_or_default(),
        }
    };

    vec![
        sample(1, "Aarav Sharma", "aarav@example.com", Role::FrontendDev, Status::Submitted, 14),
        sample(2, "Neha Patil", "neha@example.com", Role::DataScientist, Status::Shortlisted, 15),
        sample(3, "Rahul Joshi", "rahul@example.com", Role::BackendDev, Status::Rejected, 16),
    ]
}
