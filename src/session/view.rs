//! Screens the user can navigate between

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::tracker::TrackerError;

/// The active screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Register,
    Login,
    Apply,
    Applicant,
    Admin,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Home,
            View::Register,
            View::Login,
            View::Apply,
            View::Applicant,
            View::Admin,
        ]
    }

    /// Screen title shown above the content
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "A better hiring experience for Veridia",
            View::Register => "Create account",
            View::Login => "Login",
            View::Apply => "Application Form",
            View::Applicant => "Applicant Dashboard",
            View::Admin => "HR Admin Dashboard",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Home => write!(f, "home"),
            View::Register => write!(f, "register"),
            View::Login => write!(f, "login"),
            View::Apply => write!(f, "apply"),
            View::Applicant => write!(f, "applicant"),
            View::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for View {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(View::Home),
            "register" | "signup" => Ok(View::Register),
            "login" => Ok(View::Login),
            "apply" => Ok(View::Apply),
            "applicant" | "dashboard" => Ok(View::Applicant),
            "admin" => Ok(View::Admin),
            _ => Err(TrackerError::parse("view", s)),
        }
    }
}
