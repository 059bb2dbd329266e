//! Session identity
//!
//! The signed-in user is built from whatever was typed into the login or
//! register form. Nothing is verified: an `hr@` email is the only thing that
//! makes a user an admin. This is a prototype stand-in, not a security model.

use serde::{Deserialize, Serialize};

use crate::session::view::View;
use crate::tracker::error::{require, validate_email};
use crate::tracker::{Role, TrackerResult};

/// Marker that grants the admin flag at login
pub const ADMIN_EMAIL_MARKER: &str = "hr@";

/// Display name given to admin sessions
pub const ADMIN_DISPLAY_NAME: &str = "HR Team";

/// The currently signed-in identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub admin: bool,
}

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Only the email is required
    pub fn validate(&self) -> TrackerResult<()> {
        require("email", &self.email)
    }
}

/// Register form contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    /// Collected but never used
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

impl Registration {
    /// Full name and a well-formed email are required
    pub fn validate(&self) -> TrackerResult<()> {
        require("full name", &self.full_name)?;
        validate_email(&self.email)
    }
}

/// Sign in and pick the landing screen
///
/// No password check of any kind is performed.
pub fn login(creds: &Credentials) -> (SessionUser, View) {
    let email = creds.email.trim();

    if email.contains(ADMIN_EMAIL_MARKER) {
        let user = SessionUser {
            name: ADMIN_DISPLAY_NAME.to_string(),
            email: email.to_string(),
            role: None,
            admin: true,
        };
        return (user, View::Admin);
    }

    let name = email.split('@').next().unwrap_or(email);
    let user = SessionUser {
        name: name.to_string(),
        email: email.to_string(),
        role: None,
        admin: false,
    };
    (user, View::Applicant)
}

/// Create the session user straight from the register form
pub fn register(form: &Registration) -> (SessionUser, View) {
    let user = SessionUser {
        name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
        role: Some(form.role),
        admin: false,
    };
    (user, View::Applicant)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: String::new(),
        }
    }

    #[test]
    fn test_hr_login_is_admin() {
        let (user, view) = login(&creds("hr@veridia.com"));
        assert!(user.admin);
        assert_eq!(user.name, "HR Team");
        assert_eq!(user.email, "hr@veridia.com");
        assert_eq!(view, View::Admin);
    }

    #[test]
    fn test_hr_marker_anywhere_in_email() {
        let (user, view) = login(&creds("chr@example.com"));
        assert!(user.admin);
        assert_eq!(view, View::Admin);
    }

    #[test]
    fn test_applicant_login_uses_local_part() {
        let (user, view) = login(&creds("aarav@example.com"));
        assert!(!user.admin);
        assert_eq!(user.name, "aarav");
        assert_eq!(view, View::Applicant);
    }

    #[test]
    fn test_login_without_at_sign() {
        let (user, _) = login(&creds("aarav"));
        assert_eq!(user.name, "aarav");
    }

    #[test]
    fn test_password_is_ignored() {
        let a = login(&Credentials {
            email: "neha@example.com".to_string(),
            password: "secret".to_string(),
        });
        let b = login(&creds("neha@example.com"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_register() {
        let (user, view) = register(&Registration {
            full_name: "Neha Patil".to_string(),
            email: "neha@example.com".to_string(),
            password: "unused".to_string(),
            role: Role::DataScientist,
        });
        assert_eq!(user.name, "Neha Patil");
        assert_eq!(user.role, Some(Role::DataScientist));
        assert!(!user.admin);
        assert_eq!(view, View::Applicant);
    }
}
