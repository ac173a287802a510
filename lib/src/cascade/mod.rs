// lib/src/cascade/mod.rs

//! The filter cascade: how a change to one field narrows or invalidates the
//! fields downstream of it.

pub mod age;
pub mod reducer;

pub use age::calendar_age;
pub use reducer::{
    filter_doctors, reduce, visible_specialities, CascadeContext, CascadeState, DisplayOverrides,
    FieldChange,
};
