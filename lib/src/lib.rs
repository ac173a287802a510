// lib/src/lib.rs

//! Patient intake engine.
//!
//! The pieces, bottom-up:
//! - [`caching`]: key-value stores for the raw reference JSON.
//! - [`loader`]: cache-first loading of cities, specialities and doctors.
//! - [`validation`]: per-field rules and the contact-format rule.
//! - [`cascade`]: the reducer that narrows specialities and doctors as
//!   upstream fields change.
//! - [`form`]: the form controller tying values, touched flags, validity and
//!   submission together.

pub mod caching;
pub mod cascade;
pub mod config;
pub mod form;
pub mod input;
pub mod loader;
pub mod validation;

pub use intake_models::errors::*;
pub use intake_models::{
    City, Doctor, Field, FilterSet, FormValues, ReferenceCollection, ReferenceData, ReferenceId,
    SelectOption, Sex, Speciality, ToSelectOption,
};

pub use crate::caching::{MemoryCache, ReferenceCache, SledCache};
pub use crate::cascade::{
    calendar_age, filter_doctors, reduce, visible_specialities, CascadeContext, CascadeState,
    DisplayOverrides, FieldChange,
};
pub use crate::config::{CacheBackend, IntakeConfig};
pub use crate::form::{AcceptedIntake, IntakeForm};
pub use crate::loader::{HttpFetcher, ReferenceFetcher, ReferenceLoader};
pub use crate::validation::{validate, validate_field};
