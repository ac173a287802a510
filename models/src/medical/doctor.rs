// models/src/medical/doctor.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::ReferenceId;
use crate::options::{SelectOption, ToSelectOption};

/// A doctor as served by the doctors endpoint. Keys the form does not use
/// are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: ReferenceId,
    pub name: String,
    pub surname: String,
    pub city_id: ReferenceId,
    pub speciality_id: ReferenceId,
    #[serde(default)]
    pub is_pediatrician: bool,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl ToSelectOption for Doctor {
    fn to_select_option(&self) -> SelectOption {
        SelectOption {
            value: self.id,
            label: self.full_name(),
        }
    }
}
