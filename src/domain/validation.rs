//! Form field rules for the contact and enrollment forms.
//!
//! Each [`FieldKind`] owns its predicate and its message, so a rule never
//! depends on how a page happens to name its inputs.

use crate::error::FeeError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

static EMAIL: OnceLock<Regex> = OnceLock::new();
static TEN_DIGITS: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

fn ten_digits_regex() -> &'static Regex {
    TEN_DIGITS.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("valid phone pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Contact form name.
    Name,
    Email,
    /// Contact form phone; optional, but exactly ten digits when given.
    Phone,
    Subject,
    Message,
    /// Enrollment form name.
    FullName,
    /// Enrollment form phone; punctuation is ignored when counting digits.
    ContactNumber,
}

impl FieldKind {
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Self::Name => value.chars().count() >= 2,
            Self::Email => email_regex().is_match(value),
            Self::Phone => value.is_empty() || ten_digits_regex().is_match(value),
            Self::Subject => !value.is_empty(),
            Self::Message => value.chars().count() >= 10,
            Self::FullName => !value.trim().is_empty(),
            Self::ContactNumber => {
                let kept = value
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .count();
                !value.is_empty() && kept >= 7
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Name => "Name must be at least 2 characters long",
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Phone number must be 10 digits",
            Self::Subject => "Please select a subject",
            Self::Message => "Message must be at least 10 characters long",
            Self::FullName => "Please enter your full name",
            Self::ContactNumber => "Please enter a valid phone number",
        }
    }

    pub fn check(self, value: &str) -> Result<(), FieldError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(FieldError { kind: self })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: FieldKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.message())
    }
}

impl std::error::Error for FieldError {}

impl From<FieldError> for FeeError {
    fn from(err: FieldError) -> Self {
        FeeError::ValidationError(err.to_string())
    }
}

pub const CONTACT_SENT: &str = "Message sent successfully! We'll get back to you soon.";
pub const CONTACT_REJECTED: &str = "Please check the form for errors.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Returns every failing field, in form order.
    pub fn validate(&self) -> Vec<FieldError> {
        [
            (FieldKind::Name, &self.name),
            (FieldKind::Email, &self.email),
            (FieldKind::Phone, &self.phone),
            (FieldKind::Subject, &self.subject),
            (FieldKind::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(kind, value)| kind.check(value).err())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl EnrollmentForm {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
        }
    }

    /// Stops at the first failing field.
    pub fn validate(&self) -> Result<(), FieldError> {
        FieldKind::FullName.check(&self.name)?;
        FieldKind::Email.check(&self.email)?;
        FieldKind::ContactNumber.check(&self.phone)?;
        Ok(())
    }
}
