//! Session and View State
//!
//! - **view**: The six screens
//! - **user**: Unverified session identity and the login/register rules
//! - **forms**: Per-form field buffers
//! - **state**: `AppState`, `Action` and the `dispatch` transition function

pub mod forms;
pub mod state;
pub mod user;
pub mod view;

pub use forms::{ApplicationForm, Field, LoginForm, RegisterForm};
pub use state::{reduce, Action, AppState, HomeStats, Notice, NoticeLevel, Outcome};
pub use user::{Credentials, Registration, SessionUser};
pub use view::View;
