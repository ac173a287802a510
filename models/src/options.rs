// models/src/options.rs

use serde::Serialize;

use crate::identifiers::ReferenceId;

/// One entry of a select control: the id submitted with the form and the text
/// shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: ReferenceId,
    pub label: String,
}

/// Implemented by reference records that can be offered in a select.
pub trait ToSelectOption {
    fn to_select_option(&self) -> SelectOption;
}
