// models/src/medical/city.rs

use serde::{Deserialize, Serialize};

use crate::identifiers::ReferenceId;
use crate::options::{SelectOption, ToSelectOption};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: ReferenceId,
    pub name: String,
}

impl ToSelectOption for City {
    fn to_select_option(&self) -> SelectOption {
        SelectOption {
            value: self.id,
            label: self.name.clone(),
        }
    }
}
