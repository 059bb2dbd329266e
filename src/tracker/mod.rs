//! Veridia Application Tracker
//!
//! The in-memory core of the hiring platform:
//!
//! - **types**: Roles, statuses, drafts and stored records
//! - **store**: Newest-first record store with status mutation
//! - **filter**: Role/status/free-text filtering for the admin view
//! - **error**: Error types
//!
//! # Data flow
//!
//! ```text
//! Form buffer → Draft → ApplicationStore::submit → records (newest first)
//!                                                → filter(FilterState) → admin table
//! ```
//!
//! # Example
//!
//! ```rust
//! use veridia::tracker::{filter, ApplicationDraft, ApplicationStore, FilterState, Role, Status};
//!
//! let mut store = ApplicationStore::seeded();
//! let record = store
//!     .submit(ApplicationDraft::new("X", "x@y.com", Role::BackendDev))
//!     .unwrap();
//! assert_eq!(record.id, 4);
//!
//! store.set_status(record.id, Status::Shortlisted).unwrap();
//! let shortlisted = filter(store.records(), &FilterState::all().status(Status::Shortlisted));
//! assert_eq!(shortlisted.len(), 2);
//! ```

pub mod error;
pub mod filter;
pub mod store;
pub mod types;

pub use error::{TrackerError, TrackerResult};
pub use filter::{filter, parse_role_choice, parse_status_choice, FilterState};
pub use store::ApplicationStore;
pub use types::{ApplicationDraft, ApplicationRecord, Role, Status};
