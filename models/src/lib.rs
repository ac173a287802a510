// models/src/lib.rs

//! Shared types for the patient intake form: reference data (cities,
//! specialities, doctors), the form values a patient fills in, the filter set
//! that narrows the doctor list, and the error taxonomy used across the
//! workspace.

pub mod errors;
pub mod filters;
pub mod identifiers;
pub mod medical;
pub mod options;

pub use errors::{FieldError, FormErrors, IntakeError, IntakeResult};
pub use filters::FilterSet;
pub use identifiers::ReferenceId;
pub use medical::{
    City, Doctor, Field, FormValues, ReferenceCollection, ReferenceData, Sex, Speciality,
};
pub use options::{SelectOption, ToSelectOption};
