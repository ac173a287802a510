// lib/src/form.rs

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, Utc};
use log::{debug, info};
use serde::Serialize;

use intake_models::{
    Doctor, Field, FieldError, FilterSet, FormErrors, FormValues, IntakeError, IntakeResult,
    ReferenceData, ReferenceId, Speciality,
};

use crate::cascade::{
    filter_doctors, reduce, visible_specialities, CascadeContext, CascadeState, FieldChange,
};
use crate::config::{FormConfig, DEFAULT_ADULT_AGE};
use crate::validation::{validate, validate_field};

pub const SELECT_PLACEHOLDER: &str = "Select";
pub const SUBMIT_CONFIRMATION: &str = "Form Submit";

/// The accepted output of a submission. Nothing is sent anywhere; this is
/// the hand-off point for whatever consumes intakes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedIntake {
    pub values: FormValues,
    pub accepted_at: DateTime<Utc>,
    pub confirmation: &'static str,
}

/// Form state controller: current values, touched flags, derived filters and
/// the submit gate.
#[derive(Debug, Clone)]
pub struct IntakeForm {
    refs: Arc<ReferenceData>,
    initial: FormValues,
    state: CascadeState,
    touched: BTreeSet<Field>,
    pinned_today: Option<NaiveDate>,
    adult_age: u32,
}

impl IntakeForm {
    pub fn new(refs: Arc<ReferenceData>) -> Self {
        let initial = FormValues::default();
        IntakeForm {
            refs,
            state: CascadeState {
                values: initial.clone(),
                ..CascadeState::default()
            },
            initial,
            touched: BTreeSet::new(),
            pinned_today: None,
            adult_age: DEFAULT_ADULT_AGE,
        }
    }

    pub fn with_config(refs: Arc<ReferenceData>, config: &FormConfig) -> Self {
        Self::new(refs).with_adult_age(config.adult_age)
    }

    pub fn with_adult_age(mut self, adult_age: u32) -> Self {
        self.adult_age = adult_age;
        self
    }

    /// Fixes "today" for age calculations instead of reading the clock.
    pub fn pin_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn refs(&self) -> &ReferenceData {
        &self.refs
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn filters(&self) -> &FilterSet {
        &self.state.filters
    }

    /// Applies a change after checking that any referenced id is one the
    /// select currently offers.
    pub fn change(&mut self, change: FieldChange) -> IntakeResult<()> {
        self.check_offered(&change)?;
        debug!("Applying change to {}: {:?}", change.field(), change);

        let today = self.today();
        let ctx = CascadeContext::new(&self.refs, today).with_adult_age(self.adult_age);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, change, &ctx);
        Ok(())
    }

    /// Marks a field as visited; only touched fields show their errors.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn errors(&self) -> FormErrors {
        validate(&self.state.values)
    }

    /// The error to show next to `field`: present only once it was touched.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.is_touched(field) {
            validate_field(field, &self.state.values)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn is_dirty(&self) -> bool {
        self.state.values != self.initial
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.is_dirty()
    }

    pub fn visible_specialities(&self) -> Vec<&Speciality> {
        visible_specialities(&self.refs.specialities, self.state.values.sex)
    }

    pub fn visible_doctors(&self) -> Vec<&Doctor> {
        filter_doctors(&self.refs.doctors, &self.state.filters)
    }

    pub fn city_placeholder(&self) -> &str {
        self.state
            .overrides
            .city
            .as_ref()
            .map(|city| city.name.as_str())
            .unwrap_or(SELECT_PLACEHOLDER)
    }

    pub fn speciality_placeholder(&self) -> &str {
        self.state
            .overrides
            .speciality
            .as_ref()
            .map(|speciality| speciality.name.as_str())
            .unwrap_or(SELECT_PLACEHOLDER)
    }

    /// Accepts the current values if the form is dirty and valid, then
    /// resets. A rejected submission marks every field touched so all
    /// errors become visible.
    pub fn submit(&mut self) -> IntakeResult<AcceptedIntake> {
        self.touched.extend(Field::ALL);

        if !self.is_dirty() {
            return Err(IntakeError::Pristine);
        }
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(IntakeError::Invalid(errors));
        }

        let accepted = AcceptedIntake {
            values: self.state.values.clone(),
            accepted_at: Utc::now(),
            confirmation: SUBMIT_CONFIRMATION,
        };
        match serde_json::to_string(&accepted.values) {
            Ok(json) => info!("Accepted intake: {}", json),
            Err(_) => info!("Accepted intake: {:?}", accepted.values),
        }

        self.reset();
        Ok(accepted)
    }

    /// Back to initial values; filters, overrides and touched flags clear.
    pub fn reset(&mut self) {
        self.state = CascadeState {
            values: self.initial.clone(),
            ..CascadeState::default()
        };
        self.touched.clear();
    }

    fn check_offered(&self, change: &FieldChange) -> IntakeResult<()> {
        match change {
            FieldChange::City(Some(id)) => {
                if self.refs.city(*id).is_none() {
                    return Err(unknown("city", *id));
                }
            }
            FieldChange::Speciality(Some(id)) => {
                if self.refs.speciality(*id).is_none() {
                    return Err(unknown("speciality", *id));
                }
                if !self.visible_specialities().iter().any(|s| s.id == *id) {
                    return Err(IntakeError::InvalidInput(format!(
                        "Speciality {} is not offered for the selected sex",
                        id
                    )));
                }
            }
            FieldChange::Doctor(Some(id)) => {
                if self.refs.doctor(*id).is_none() {
                    return Err(unknown("doctor", *id));
                }
                if !self.visible_doctors().iter().any(|d| d.id == *id) {
                    return Err(IntakeError::InvalidInput(format!(
                        "Doctor {} does not match the current city, speciality or age",
                        id
                    )));
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn unknown(kind: &'static str, id: ReferenceId) -> IntakeError {
    IntakeError::UnknownReference { kind, id }
}
