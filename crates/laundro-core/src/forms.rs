//! Website form payloads and their validation rules.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

const MIN_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 8;
const MIN_MESSAGE_CHARS: usize = 10;
const MIN_CITY_CHARS: usize = 2;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{} field(s) failed validation", .fields.len())]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn min_chars(&mut self, field: &'static str, value: &str, min: usize) -> &mut Self {
        if value.trim().chars().count() < min {
            self.errors.push(FieldError {
                field,
                message: format!("must be at least {min} characters"),
            });
        }
        self
    }

    fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if !EMAIL_RE.is_match(value.trim()) {
            self.errors.push(FieldError {
                field,
                message: "must be a valid email address".to_string(),
            });
        }
        self
    }

    fn required(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError {
                field,
                message: "is required".to_string(),
            });
        }
        self
    }

    fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                fields: std::mem::take(&mut self.errors),
            })
        }
    }
}

fn check_contact_fields<'a>(
    checker: &'a mut Checker,
    name: &str,
    email: &str,
    phone: &str,
) -> &'a mut Checker {
    checker
        .min_chars("name", name, MIN_NAME_CHARS)
        .email("email", email)
        .min_chars("phone", phone, MIN_PHONE_CHARS)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing every field that fails its rule.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::default();
        check_contact_fields(&mut checker, &self.name, &self.email, &self.phone)
            .min_chars("message", &self.message, MIN_MESSAGE_CHARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// City or district where the applicant wants to open a branch.
    pub city: String,
    /// Free-text investment range, e.g. `"100-200 сая ₮"`.
    pub investment: String,
    pub message: String,
}

impl FranchiseForm {
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing every field that fails its rule.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::default();
        check_contact_fields(&mut checker, &self.name, &self.email, &self.phone)
            .min_chars("city", &self.city, MIN_CITY_CHARS)
            .required("investment", &self.investment)
            .min_chars("message", &self.message, MIN_MESSAGE_CHARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: String,
    pub message: String,
}

impl JobApplication {
    /// # Errors
    ///
    /// Returns `ValidationErrors` listing every field that fails its rule.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::default();
        check_contact_fields(&mut checker, &self.name, &self.email, &self.phone)
            .required("position", &self.position)
            .required("experience", &self.experience)
            .min_chars("message", &self.message, MIN_MESSAGE_CHARS)
            .finish()
    }
}

/// Any form the site can forward to the mail service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Contact(ContactForm),
    Franchise(FranchiseForm),
    JobApplication(JobApplication),
}

impl Submission {
    /// # Errors
    ///
    /// Returns `ValidationErrors` from the wrapped form.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Submission::Contact(form) => form.validate(),
            Submission::Franchise(form) => form.validate(),
            Submission::JobApplication(form) => form.validate(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Contact(_) => "contact",
            Submission::Franchise(_) => "franchise",
            Submission::JobApplication(_) => "job_application",
        }
    }

    /// Subject line for the outgoing email.
    #[must_use]
    pub fn subject(&self) -> String {
        match self {
            Submission::Contact(form) => format!("Website contact: {}", form.name.trim()),
            Submission::Franchise(form) => format!(
                "Franchise inquiry: {} ({})",
                form.name.trim(),
                form.city.trim()
            ),
            Submission::JobApplication(form) => format!(
                "Job application: {} for {}",
                form.name.trim(),
                form.position.trim()
            ),
        }
    }

    #[must_use]
    pub fn reply_to(&self) -> &str {
        match self {
            Submission::Contact(form) => form.email.trim(),
            Submission::Franchise(form) => form.email.trim(),
            Submission::JobApplication(form) => form.email.trim(),
        }
    }
}
