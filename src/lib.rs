//! # Veridia Hiring
//!
//! In-memory hiring platform: candidates register, apply for a role and
//! follow their applications; HR reviews, filters and moves applications
//! between statuses.
//!
//! ## Modules
//!
//! - [`tracker`]: Application records, the store and the admin filter
//! - [`session`]: Screens, the signed-in user, form buffers and `AppState`
//! - [`screens`]: Text rendering of each screen
//! - [`shell`]: Command parser for the interactive `veridia` binary
//! - [`api`]: REST API server with Axum over the same state
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use veridia::session::{Action, AppState, Credentials, View};
//! use veridia::tracker::{ApplicationDraft, Role, Status};
//!
//! let mut state = AppState::default();
//!
//! let outcome = state
//!     .dispatch(Action::Submit {
//!         draft: ApplicationDraft::new("Priya Nair", "priya@example.com", Role::BackendDev),
//!     })
//!     .unwrap();
//! let id = outcome.record.unwrap().id;
//!
//! state
//!     .dispatch(Action::Login {
//!         credentials: Credentials {
//!             email: "hr@veridia.com".into(),
//!             password: String::new(),
//!         },
//!     })
//!     .unwrap();
//! assert_eq!(state.view(), View::Admin);
//!
//! state.dispatch(Action::Shortlist { id }).unwrap();
//! assert_eq!(state.store().get(id).unwrap().status, Status::Shortlisted);
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod screens;
pub mod session;
pub mod shell;
pub mod tracker;

// Re-export top-level types for convenience
pub use tracker::{
    filter, ApplicationDraft, ApplicationRecord, ApplicationStore, FilterState, Role, Status,
    TrackerError, TrackerResult,
};

pub use session::{reduce, Action, AppState, Notice, NoticeLevel, Outcome, SessionUser, View};

pub use api::{build_router, serve, ApiError, ApiState};

pub use config::{ApiConfig, CatalogConfig, Config, ConfigError, LoggingConfig};
