//! Application state and its single transition function
//!
//! `AppState` owns everything the prototype keeps in memory: the active
//! screen, the signed-in user, the application store, the form buffers and
//! the admin filter. Every user interaction is an `Action`; `dispatch`
//! applies one action and reports what happened as an `Outcome` or a typed
//! error. Feedback that used to be a blocking dialog is the `notice`.

use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::session::forms::{ApplicationForm, Field, LoginForm, RegisterForm};
use crate::session::user::{self, Credentials, Registration, SessionUser};
use crate::session::view::View;
use crate::tracker::{
    filter, ApplicationDraft, ApplicationRecord, ApplicationStore, FilterState, Role, Status,
    TrackerError, TrackerResult,
};

/// A discrete user interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Switch screens
    Navigate { view: View },
    /// Edit one field of a form buffer
    EditRegister { field: Field, value: String },
    EditLogin { field: Field, value: String },
    EditApplication { field: Field, value: String },
    /// Restore the application form to its template
    ResetApplication,
    /// Submit a form from its buffer
    SubmitRegister,
    SubmitLogin,
    SubmitApplication,
    /// Submit with explicit contents, bypassing the buffers
    Register { registration: Registration },
    Login { credentials: Credentials },
    Submit { draft: ApplicationDraft },
    SignOut,
    /// Admin filter edits; `None` means "All"
    SetFilterRole { role: Option<Role> },
    SetFilterStatus { status: Option<Status> },
    SetFilterQuery { query: String },
    /// Admin review actions
    SetStatus { id: u32, status: Status },
    Shortlist { id: u32 },
    Reject { id: u32 },
    ViewProfile { id: u32 },
    /// Placeholders for flows the prototype does not have
    RequestSso,
    ForgotPassword,
}

/// How a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
}

/// User-facing feedback produced by an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// Result of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Screen shown after the action
    pub view: View,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    /// The application the action created or touched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<ApplicationRecord>,
}

/// Numbers shown on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeStats {
    pub applications: usize,
    pub open_roles: u32,
    pub avg_time_to_hire_days: u32,
}

/// Everything the prototype keeps in memory
#[derive(Debug, Clone)]
pub struct AppState {
    view: View,
    user: Option<SessionUser>,
    store: ApplicationStore,
    register_form: RegisterForm,
    login_form: LoginForm,
    application_form: ApplicationForm,
    filters: FilterState,
    catalog: CatalogConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&CatalogConfig::default())
    }
}

impl AppState {
    /// Fresh state on the home screen
    pub fn new(catalog: &CatalogConfig) -> Self {
        let store = if catalog.seed_sample_data {
            ApplicationStore::seeded()
        } else {
            ApplicationStore::new()
        };

        Self::with_store(store, catalog)
    }

    /// Fresh state over an existing store
    pub fn with_store(store: ApplicationStore, catalog: &CatalogConfig) -> Self {
        Self {
            view: View::Home,
            user: None,
            store,
            register_form: RegisterForm::default(),
            login_form: LoginForm::default(),
            application_form: ApplicationForm::default(),
            filters: FilterState::all(),
            catalog: catalog.clone(),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn store(&self) -> &ApplicationStore {
        &self.store
    }

    pub fn register_form(&self) -> &RegisterForm {
        &self.register_form
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }

    pub fn application_form(&self) -> &ApplicationForm {
        &self.application_form
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Applications visible on the admin screen under the current filter
    pub fn visible_applications(&self) -> Vec<&ApplicationRecord> {
        filter(self.store.records(), &self.filters)
    }

    pub fn home_stats(&self) -> HomeStats {
        HomeStats {
            applications: self.store.len(),
            open_roles: self.catalog.open_roles,
            avg_time_to_hire_days: self.catalog.avg_time_to_hire_days,
        }
    }

    /// Apply one action
    ///
    /// A failed action leaves the state exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> TrackerResult<Outcome> {
        let result = self.apply(action);
        if let Err(e) = &result {
            tracing::warn!(view = %self.view, error = %e, "Action rejected");
        }
        result
    }

    fn apply(&mut self, action: Action) -> TrackerResult<Outcome> {
        match action {
            Action::Navigate { view } => {
                let notice = self.go(view);
                Ok(self.outcome(notice, None))
            }

            Action::EditRegister { field, value } => {
                self.register_form.set(field, &value)?;
                Ok(self.outcome(None, None))
            }
            Action::EditLogin { field, value } => {
                self.login_form.set(field, &value)?;
                Ok(self.outcome(None, None))
            }
            Action::EditApplication { field, value } => {
                self.application_form.set(field, &value)?;
                Ok(self.outcome(None, None))
            }
            Action::ResetApplication => {
                self.application_form.reset();
                Ok(self.outcome(None, None))
            }

            Action::SubmitRegister => {
                let registration = self.register_form.submit()?;
                self.register(&registration)
            }
            Action::Register { registration } => {
                registration.validate()?;
                self.register(&registration)
            }

            Action::SubmitLogin => {
                let credentials = self.login_form.submit()?;
                self.login(&credentials)
            }
            Action::Login { credentials } => {
                credentials.validate()?;
                self.login(&credentials)
            }

            Action::SubmitApplication => {
                let draft = self.application_form.submit()?;
                self.submit(draft)
            }
            Action::Submit { draft } => self.submit(draft),

            Action::SignOut => {
                if let Some(user) = self.user.take() {
                    tracing::info!(email = %user.email, "Signed out");
                }
                self.view = View::Home;
                Ok(self.outcome(None, None))
            }

            Action::SetFilterRole { role } => {
                self.filters.role = role;
                Ok(self.outcome(None, None))
            }
            Action::SetFilterStatus { status } => {
                self.filters.status = status;
                Ok(self.outcome(None, None))
            }
            Action::SetFilterQuery { query } => {
                self.filters.query = query;
                Ok(self.outcome(None, None))
            }

            Action::SetStatus { id, status } => self.set_status(id, status),
            Action::Shortlist { id } => self.set_status(id, Status::Shortlisted),
            Action::Reject { id } => self.set_status(id, Status::Rejected),

            Action::ViewProfile { id } => {
                let record = self.store.get(id).cloned().ok_or(TrackerError::NotFound(id))?;
                let notice = Notice::info(format!(
                    "{} <{}>: {}, {} (submitted {})",
                    record.name, record.email, record.role, record.status, record.submitted_on
                ));
                Ok(self.outcome(Some(notice), Some(record)))
            }

            Action::RequestSso => Ok(self.outcome(
                Some(Notice::info("Single sign-on is not available yet")),
                None,
            )),
            Action::ForgotPassword => Ok(self.outcome(
                Some(Notice::info("Password reset is not available yet")),
                None,
            )),
        }
    }

    /// Switch screens, honouring the applicant guard
    ///
    /// Entering the register or login screen starts from an empty buffer.
    fn go(&mut self, target: View) -> Option<Notice> {
        let (view, notice) = if target == View::Applicant && self.user.is_none() {
            tracing::debug!("No session user, redirecting applicant view to login");
            (
                View::Login,
                Some(Notice::info("Log in to see your applicant dashboard")),
            )
        } else {
            (target, None)
        };

        if view != self.view {
            match view {
                View::Register => self.register_form.reset(),
                View::Login => self.login_form.reset(),
                _ => {}
            }
        }

        tracing::debug!(from = %self.view, to = %view, "Navigate");
        self.view = view;
        notice
    }

    fn register(&mut self, registration: &Registration) -> TrackerResult<Outcome> {
        let (user, view) = user::register(registration);
        tracing::info!(email = %user.email, role = ?user.role, "Registered");
        self.user = Some(user);
        let notice = self.go(view);
        Ok(self.outcome(notice, None))
    }

    fn login(&mut self, credentials: &Credentials) -> TrackerResult<Outcome> {
        let (user, view) = user::login(credentials);
        tracing::info!(email = %user.email, admin = user.admin, "Logged in");
        self.user = Some(user);
        let notice = self.go(view);
        Ok(self.outcome(notice, None))
    }

    fn submit(&mut self, draft: ApplicationDraft) -> TrackerResult<Outcome> {
        let record = self.store.submit(draft)?;
        let notice = match self.go(View::Applicant) {
            Some(redirect) => {
                Notice::success(format!("Application submitted! {}", redirect.message))
            }
            None => Notice::success("Application submitted!"),
        };
        Ok(self.outcome(Some(notice), Some(record)))
    }

    fn set_status(&mut self, id: u32, status: Status) -> TrackerResult<Outcome> {
        let record = self.store.set_status(id, status)?;
        Ok(self.outcome(Some(Notice::success("Status updated")), Some(record)))
    }

    fn outcome(&self, notice: Option<Notice>, record: Option<ApplicationRecord>) -> Outcome {
        Outcome {
            view: self.view,
            notice,
            record,
        }
    }
}

/// Owned form of `dispatch`: consume a state and an action, return the next state
pub fn reduce(mut state: AppState, action: Action) -> (AppState, TrackerResult<Outcome>) {
    let result = state.dispatch(action);
    (state, result)
}
