// models/src/filters.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::ReferenceId;
use crate::medical::Doctor;

/// Constraints on the doctor list. Each present key must match the doctor's
/// field exactly; absent keys do not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pediatrician: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<ReferenceId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speciality_id: Option<ReferenceId>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.is_pediatrician.is_none() && self.city_id.is_none() && self.speciality_id.is_none()
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        self.is_pediatrician.map_or(true, |flag| doctor.is_pediatrician == flag)
            && self.city_id.map_or(true, |id| doctor.city_id == id)
            && self.speciality_id.map_or(true, |id| doctor.speciality_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(city: i64, speciality: i64, pediatrician: bool) -> Doctor {
        Doctor {
            id: ReferenceId(1),
            name: "Jan".to_string(),
            surname: "Nowak".to_string(),
            city_id: ReferenceId(city),
            speciality_id: ReferenceId(speciality),
            is_pediatrician: pediatrician,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filters = FilterSet::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&doctor(1, 1, false)));
        assert!(filters.matches(&doctor(2, 3, true)));
    }

    #[test]
    fn every_present_key_must_match() {
        let filters = FilterSet {
            is_pediatrician: Some(true),
            city_id: Some(ReferenceId(1)),
            speciality_id: None,
        };
        assert!(filters.matches(&doctor(1, 5, true)));
        assert!(!filters.matches(&doctor(1, 5, false)));
        assert!(!filters.matches(&doctor(2, 5, true)));
    }

    #[test]
    fn pediatrician_false_excludes_pediatricians() {
        let filters = FilterSet {
            is_pediatrician: Some(false),
            ..FilterSet::default()
        };
        assert!(!filters.matches(&doctor(1, 1, true)));
        assert!(filters.matches(&doctor(1, 1, false)));
    }

    #[test]
    fn serializes_only_present_keys() {
        let filters = FilterSet {
            city_id: Some(ReferenceId(4)),
            ..FilterSet::default()
        };
        assert_eq!(serde_json::to_string(&filters).unwrap(), r#"{"cityId":4}"#);
    }
}
