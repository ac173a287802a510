// lib/src/config/config_constants.rs

// Mock endpoints serving the reference collections as JSON arrays.
pub const DEFAULT_CITIES_ENDPOINT: &str = "https://run.mocky.io/v3/9fcb58ca-d3dd-424b-873b-dd3c76f000f4";
pub const DEFAULT_SPECIALITIES_ENDPOINT: &str = "https://run.mocky.io/v3/e8897b19-46a0-4124-8454-0938225ee9ca";
pub const DEFAULT_DOCTORS_ENDPOINT: &str = "https://run.mocky.io/v3/3d1c993c-cd8e-44c3-b1cb-585222859c21";

pub const DEFAULT_CONFIG_FILE: &str = "intake.toml";
pub const DEFAULT_CACHE_PATH: &str = ".intake_cache";
pub const CACHE_TREE_NAME: &str = "reference_cache";

// Environment overrides look like INTAKE__CACHE__BACKEND=memory
pub const ENV_PREFIX: &str = "INTAKE";
pub const ENV_SEPARATOR: &str = "__";

/// Patients younger than this are steered to pediatricians.
pub const DEFAULT_ADULT_AGE: u32 = 18;
