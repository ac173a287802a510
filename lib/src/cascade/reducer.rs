// lib/src/cascade/reducer.rs

use chrono::NaiveDate;
use serde::Serialize;

use intake_models::{
    City, Doctor, Field, FilterSet, FormValues, ReferenceData, ReferenceId, Sex, Speciality,
};

use crate::cascade::age::calendar_age;
use crate::config::DEFAULT_ADULT_AGE;

/// A single edit to one form field. `None` clears a select or the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Name(String),
    Birthday(Option<NaiveDate>),
    Sex(Option<Sex>),
    City(Option<ReferenceId>),
    Speciality(Option<ReferenceId>),
    Doctor(Option<ReferenceId>),
    Contact(String),
}

impl FieldChange {
    pub fn field(&self) -> Field {
        match self {
            FieldChange::Name(_) => Field::Name,
            FieldChange::Birthday(_) => Field::Birthday,
            FieldChange::Sex(_) => Field::Sex,
            FieldChange::City(_) => Field::City,
            FieldChange::Speciality(_) => Field::Speciality,
            FieldChange::Doctor(_) => Field::Doctor,
            FieldChange::Contact(_) => Field::Contact,
        }
    }

    /// The change that empties `field`.
    pub fn clear(field: Field) -> Self {
        match field {
            Field::Name => FieldChange::Name(String::new()),
            Field::Birthday => FieldChange::Birthday(None),
            Field::Sex => FieldChange::Sex(None),
            Field::City => FieldChange::City(None),
            Field::Speciality => FieldChange::Speciality(None),
            Field::Doctor => FieldChange::Doctor(None),
            Field::Contact => FieldChange::Contact(String::new()),
        }
    }
}

/// Placeholder labels for the city and speciality selects, taken from the
/// selected doctor. Display only; they never feed the filter set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayOverrides {
    pub city: Option<City>,
    pub speciality: Option<Speciality>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CascadeState {
    pub values: FormValues,
    pub filters: FilterSet,
    pub overrides: DisplayOverrides,
}

/// What a transition may consult besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct CascadeContext<'a> {
    pub refs: &'a ReferenceData,
    pub today: NaiveDate,
    pub adult_age: u32,
}

impl<'a> CascadeContext<'a> {
    pub fn new(refs: &'a ReferenceData, today: NaiveDate) -> Self {
        CascadeContext {
            refs,
            today,
            adult_age: DEFAULT_ADULT_AGE,
        }
    }

    pub fn with_adult_age(mut self, adult_age: u32) -> Self {
        self.adult_age = adult_age;
        self
    }
}

/// Applies one field change and every dependent reset it implies.
///
/// - sex: clears speciality (and its filter key) and doctor.
/// - birthday: sets `is_pediatrician` from the calendar age, clears doctor.
/// - city / speciality: sets the matching filter key, clears doctor.
/// - doctor: refreshes the display overrides from the chosen doctor.
///
/// Whenever the doctor is cleared the overrides go with it.
pub fn reduce(state: CascadeState, change: FieldChange, ctx: &CascadeContext<'_>) -> CascadeState {
    let CascadeState {
        mut values,
        mut filters,
        mut overrides,
    } = state;

    match change {
        FieldChange::Name(name) => values.name = name,
        FieldChange::Contact(contact) => values.contact = contact,
        FieldChange::Sex(sex) => {
            values.sex = sex;
            values.speciality = None;
            filters.speciality_id = None;
            values.doctor = None;
            overrides = DisplayOverrides::default();
        }
        FieldChange::Birthday(birthday) => {
            values.birthday = birthday;
            let adult_age = i32::try_from(ctx.adult_age).unwrap_or(i32::MAX);
            filters.is_pediatrician =
                birthday.map(|date| calendar_age(date, ctx.today) < adult_age);
            values.doctor = None;
            overrides = DisplayOverrides::default();
        }
        FieldChange::City(city) => {
            values.city = city;
            filters.city_id = city;
            values.doctor = None;
            overrides = DisplayOverrides::default();
        }
        FieldChange::Speciality(speciality) => {
            values.speciality = speciality;
            filters.speciality_id = speciality;
            values.doctor = None;
            overrides = DisplayOverrides::default();
        }
        FieldChange::Doctor(doctor) => {
            values.doctor = doctor;
            let selected = doctor.and_then(|id| ctx.refs.doctor(id));
            overrides = DisplayOverrides {
                city: selected.and_then(|d| ctx.refs.city(d.city_id)).cloned(),
                speciality: selected.and_then(|d| ctx.refs.speciality(d.speciality_id)).cloned(),
            };
        }
    }

    CascadeState {
        values,
        filters,
        overrides,
    }
}

/// Specialities a patient of `sex` may choose from, in reference order.
pub fn visible_specialities(specialities: &[Speciality], sex: Option<Sex>) -> Vec<&Speciality> {
    specialities.iter().filter(|speciality| speciality.allows(sex)).collect()
}

/// Doctors matching every key present in `filters`, in reference order.
pub fn filter_doctors<'a>(doctors: &'a [Doctor], filters: &FilterSet) -> Vec<&'a Doctor> {
    doctors.iter().filter(|doctor| filters.matches(doctor)).collect()
}
