// models/src/medical/intake.rs

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::IntakeError;
use crate::identifiers::ReferenceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Exact match against the wire spelling used by the specialities
    /// endpoint ("Male" / "Female").
    pub fn from_exact(value: &str) -> Option<Self> {
        match value {
            "Male" => Some(Sex::Male),
            "Female" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl FromStr for Sex {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(IntakeError::InvalidInput("Sex must be Male or Female".to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// The fields of the intake form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Birthday,
    Sex,
    City,
    Speciality,
    Doctor,
    Contact,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Birthday,
        Field::Sex,
        Field::City,
        Field::Speciality,
        Field::Doctor,
        Field::Contact,
    ];

    /// The caption shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Birthday => "Birthday Date",
            Field::Sex => "Sex",
            Field::City => "City",
            Field::Speciality => "Doctor Speciality",
            Field::Doctor => "Doctor",
            Field::Contact => "Email / Mobile number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Birthday => "birthday",
            Field::Sex => "sex",
            Field::City => "city",
            Field::Speciality => "speciality",
            Field::Doctor => "doctor",
            Field::Contact => "contact",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Field {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "birthday" | "birthdate" => Ok(Field::Birthday),
            "sex" => Ok(Field::Sex),
            "city" => Ok(Field::City),
            "speciality" | "specialty" => Ok(Field::Speciality),
            "doctor" => Ok(Field::Doctor),
            "contact" | "email" | "mobile" => Ok(Field::Contact),
            other => Err(IntakeError::InvalidInput(format!("Unknown field: {}", other))),
        }
    }
}

/// Everything the patient has entered so far. Unset selects are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub sex: Option<Sex>,
    pub city: Option<ReferenceId>,
    pub speciality: Option<ReferenceId>,
    pub doctor: Option<ReferenceId>,
    pub contact: String,
}
