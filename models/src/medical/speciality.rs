// models/src/medical/speciality.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifiers::ReferenceId;
use crate::medical::intake::Sex;
use crate::options::{SelectOption, ToSelectOption};

/// A medical speciality. Some specialities only apply to one sex
/// (e.g. gynecology); `gender_restriction` records which.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSpeciality", into = "RawSpeciality")]
pub struct Speciality {
    pub id: ReferenceId,
    pub name: String,
    pub gender_restriction: Option<Sex>,
}

impl Speciality {
    /// Whether a patient of the given sex may pick this speciality. With no
    /// sex selected every speciality is allowed.
    pub fn allows(&self, sex: Option<Sex>) -> bool {
        match (sex, self.gender_restriction) {
            (Some(sex), Some(restriction)) => sex == restriction,
            _ => true,
        }
    }
}

impl ToSelectOption for Speciality {
    fn to_select_option(&self) -> SelectOption {
        SelectOption {
            value: self.id,
            label: self.name.clone(),
        }
    }
}

// Wire shape: {"id": 1, "name": "...", "params": {"gender": "Female"}}.
// `gender` shows up as a string or a number; only "Male" and "Female" restrict.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSpeciality {
    id: ReferenceId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<RawSpecialityParams>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawSpecialityParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Value>,
}

impl From<RawSpeciality> for Speciality {
    fn from(raw: RawSpeciality) -> Self {
        let gender_restriction = raw
            .params
            .and_then(|params| params.gender)
            .and_then(|gender| match gender {
                Value::String(text) => Sex::from_exact(&text),
                _ => None,
            });

        Speciality {
            id: raw.id,
            name: raw.name,
            gender_restriction,
        }
    }
}

impl From<Speciality> for RawSpeciality {
    fn from(speciality: Speciality) -> Self {
        RawSpeciality {
            id: speciality.id,
            name: speciality.name,
            params: speciality.gender_restriction.map(|sex| RawSpecialityParams {
                gender: Some(Value::String(sex.to_string())),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_gender_restriction_from_params() {
        let raw = r#"[
            {"id": 1, "name": "Gynecologist", "params": {"gender": "Female"}},
            {"id": 2, "name": "Urologist", "params": {"gender": "Male"}},
            {"id": 3, "name": "Cardiologist", "params": {"gender": 0}},
            {"id": 4, "name": "Dentist"}
        ]"#;
        let specialities: Vec<Speciality> = serde_json::from_str(raw).unwrap();

        assert_eq!(specialities[0].gender_restriction, Some(Sex::Female));
        assert_eq!(specialities[1].gender_restriction, Some(Sex::Male));
        assert_eq!(specialities[2].gender_restriction, None);
        assert_eq!(specialities[3].gender_restriction, None);
    }

    #[test]
    fn restriction_only_excludes_the_other_sex() {
        let gyn = Speciality {
            id: ReferenceId(1),
            name: "Gynecologist".to_string(),
            gender_restriction: Some(Sex::Female),
        };
        assert!(gyn.allows(Some(Sex::Female)));
        assert!(!gyn.allows(Some(Sex::Male)));
        assert!(gyn.allows(None));
    }

    #[test]
    fn should_write_restriction_back_into_params() {
        let uro = Speciality {
            id: ReferenceId(2),
            name: "Urologist".to_string(),
            gender_restriction: Some(Sex::Male),
        };
        let json = serde_json::to_value(&uro).unwrap();
        assert_eq!(json["params"]["gender"], "Male");
    }
}
