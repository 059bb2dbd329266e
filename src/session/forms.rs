//! Form State Holders
//!
//! Each form owns an isolated buffer of its fields, starts from a default
//! template, and is handed off whole on submit. Required fields are checked
//! at hand-off.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::session::user::{Credentials, Registration};
use crate::tracker::{ApplicationDraft, Role, TrackerError, TrackerResult};

/// Every editable field across the three forms
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Email,
    Password,
    Phone,
    Role,
    Experience,
    ResumeUrl,
    CoverLetter,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Password => "password",
            Field::Phone => "phone",
            Field::Role => "role",
            Field::Experience => "experience",
            Field::ResumeUrl => "resume_url",
            Field::CoverLetter => "cover_letter",
        };
        f.write_str(name)
    }
}

impl FromStr for Field {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "full_name" | "fullname" | "name" => Ok(Field::FullName),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "phone" => Ok(Field::Phone),
            "role" => Ok(Field::Role),
            "experience" => Ok(Field::Experience),
            "resume_url" | "resume" => Ok(Field::ResumeUrl),
            "cover_letter" | "cover" => Ok(Field::CoverLetter),
            _ => Err(TrackerError::parse("field", s)),
        }
    }
}

fn not_on_form(form: &str, field: Field) -> TrackerError {
    TrackerError::Validation(format!("the {} form has no '{}' field", form, field))
}

/// Register form buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegisterForm {
    pub fn set(&mut self, field: Field, value: &str) -> TrackerResult<()> {
        match field {
            Field::FullName => self.full_name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Password => self.password = value.to_string(),
            Field::Role => self.role = value.parse()?,
            other => return Err(not_on_form("register", other)),
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Hand the buffer off; full name and email are required
    pub fn submit(&self) -> TrackerResult<Registration> {
        let registration = Registration {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: self.role,
        };
        registration.validate()?;
        Ok(registration)
    }
}

/// Login form buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn set(&mut self, field: Field, value: &str) -> TrackerResult<()> {
        match field {
            Field::Email => self.email = value.to_string(),
            Field::Password => self.password = value.to_string(),
            other => return Err(not_on_form("login", other)),
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Hand the buffer off; only the email is required
    pub fn submit(&self) -> TrackerResult<Credentials> {
        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        credentials.validate()?;
        Ok(credentials)
    }
}

/// Application form buffer
///
/// Phone, experience, resume URL and cover letter are collected but the
/// stored record keeps only name, email and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub experience: String,
    pub resume_url: String,
    pub cover_letter: String,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: Role::FrontendDev,
            experience: "0".to_string(),
            resume_url: String::new(),
            cover_letter: String::new(),
        }
    }
}

impl ApplicationForm {
    pub fn set(&mut self, field: Field, value: &str) -> TrackerResult<()> {
        match field {
            Field::FullName => self.full_name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::Role => self.role = value.parse()?,
            Field::Experience => self.experience = value.to_string(),
            Field::ResumeUrl => self.resume_url = value.to_string(),
            Field::CoverLetter => self.cover_letter = value.to_string(),
            other => return Err(not_on_form("application", other)),
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Hand the buffer off as a draft; full name and email are required
    pub fn submit(&self) -> TrackerResult<ApplicationDraft> {
        let draft = ApplicationDraft::new(self.full_name.clone(), self.email.clone(), self.role);
        draft.validate()?;
        Ok(draft)
    }
}
