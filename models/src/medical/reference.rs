// models/src/medical/reference.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::ReferenceId;
use crate::medical::{City, Doctor, Speciality};

/// The three lookup collections the form needs. The cache key of each
/// collection is its lowercase plural name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceCollection {
    Cities,
    Specialities,
    Doctors,
}

impl ReferenceCollection {
    pub const ALL: [ReferenceCollection; 3] = [
        ReferenceCollection::Cities,
        ReferenceCollection::Specialities,
        ReferenceCollection::Doctors,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReferenceCollection::Cities => "cities",
            ReferenceCollection::Specialities => "specialities",
            ReferenceCollection::Doctors => "doctors",
        }
    }
}

impl fmt::Display for ReferenceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Reference data as loaded for one session. Lists are never mutated after
/// load; narrowing happens on derived views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub cities: Vec<City>,
    pub specialities: Vec<Speciality>,
    pub doctors: Vec<Doctor>,
}

impl ReferenceData {
    pub fn city(&self, id: ReferenceId) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    pub fn speciality(&self, id: ReferenceId) -> Option<&Speciality> {
        self.specialities.iter().find(|speciality| speciality.id == id)
    }

    pub fn doctor(&self, id: ReferenceId) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty() && self.specialities.is_empty() && self.doctors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_find_records_by_id() {
        let data = ReferenceData {
            cities: vec![City { id: ReferenceId(3), name: "Lublin".to_string() }],
            ..ReferenceData::default()
        };
        assert!(!data.is_empty());
        assert_eq!(data.city(ReferenceId(3)).map(|c| c.name.as_str()), Some("Lublin"));
        assert!(data.city(ReferenceId(4)).is_none());
        assert!(data.doctor(ReferenceId(3)).is_none());
        assert!(ReferenceData::default().is_empty());
    }

    #[test]
    fn cache_keys_are_plural_names() {
        let keys: Vec<_> = ReferenceCollection::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["cities", "specialities", "doctors"]);
    }
}
