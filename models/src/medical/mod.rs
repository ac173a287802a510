// models/src/medical/mod.rs

pub mod city;
pub mod doctor;
pub mod intake;
pub mod reference;
pub mod speciality;

pub use city::City;
pub use doctor::Doctor;
pub use intake::{Field, FormValues, Sex};
pub use reference::{ReferenceCollection, ReferenceData};
pub use speciality::Speciality;
