// models/src/errors.rs

use std::collections::BTreeMap;
use std::fmt;

pub use thiserror::Error;

use crate::identifiers::ReferenceId;
use crate::medical::Field;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Failed to fetch {collection}: {message}")]
    Fetch { collection: String, message: String },
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Deserialization error: {0}")]
    Deserialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No {kind} with id {id}")]
    UnknownReference { kind: &'static str, id: ReferenceId },

    // Submission outcomes
    #[error("Form is invalid: {0}")]
    Invalid(FormErrors),
    #[error("Form has not been modified")]
    Pristine,

    #[cfg(feature = "sled-errors")]
    #[error(transparent)]
    Sled(#[from] sled::Error),
    #[cfg(feature = "http-errors")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Deserialization(format!("JSON processing error: {}", err))
    }
}

/// A single failed validation rule. The display text is what the form shows
/// next to the offending field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name should not contain numbers")]
    NameContainsDigits,
    #[error("Birthday Date is required")]
    BirthdayRequired,
    #[error("Sex is required")]
    SexRequired,
    #[error("City is required")]
    CityRequired,
    #[error("Doctor is required")]
    DoctorRequired,
    #[error("Email or mobile number is required")]
    ContactRequired,
    #[error("Invalid email address or mobile number")]
    ContactInvalid,
}

/// Per-field validation errors, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

/// A type alias for a `Result` that returns an `IntakeError` on failure.
pub type IntakeResult<T> = Result<T, IntakeError>;
