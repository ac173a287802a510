// lib/src/validation.rs

use once_cell::sync::Lazy;
use regex::Regex;

use intake_models::{Field, FieldError, FormErrors, FormValues};

// Case folding is ASCII-only; U+212A KELVIN SIGN is not a 'k'.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

// Digits only, at least ten of them.
static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10,}$").expect("mobile pattern compiles"));

/// Runs every rule and collects the first failure per field.
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::new();
    for field in Field::ALL {
        if let Some(error) = validate_field(field, values) {
            errors.insert(field, error);
        }
    }
    errors
}

pub fn validate_field(field: Field, values: &FormValues) -> Option<FieldError> {
    match field {
        Field::Name => validate_name(&values.name),
        Field::Birthday => values.birthday.is_none().then_some(FieldError::BirthdayRequired),
        Field::Sex => values.sex.is_none().then_some(FieldError::SexRequired),
        Field::City => values.city.is_none().then_some(FieldError::CityRequired),
        Field::Speciality => None,
        Field::Doctor => values.doctor.is_none().then_some(FieldError::DoctorRequired),
        Field::Contact => validate_contact(&values.contact),
    }
}

fn validate_name(name: &str) -> Option<FieldError> {
    if name.is_empty() {
        Some(FieldError::NameRequired)
    } else if name.chars().any(|c| c.is_ascii_digit()) {
        Some(FieldError::NameContainsDigits)
    } else {
        None
    }
}

/// An email address or a mobile number. The "required" message wins over the
/// format message for empty input.
fn validate_contact(contact: &str) -> Option<FieldError> {
    if contact.is_empty() {
        return Some(FieldError::ContactRequired);
    }
    if EMAIL_REGEX.is_match(contact) || MOBILE_REGEX.is_match(contact) {
        return None;
    }
    Some(FieldError::ContactInvalid)
}
