// lib/src/config/config_defaults.rs

use std::path::PathBuf;

use crate::config::config_constants::*;

pub fn default_cities_endpoint() -> String {
    DEFAULT_CITIES_ENDPOINT.to_string()
}

pub fn default_specialities_endpoint() -> String {
    DEFAULT_SPECIALITIES_ENDPOINT.to_string()
}

pub fn default_doctors_endpoint() -> String {
    DEFAULT_DOCTORS_ENDPOINT.to_string()
}

pub fn default_cache_path() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_PATH)
}

pub fn default_adult_age() -> u32 {
    DEFAULT_ADULT_AGE
}
