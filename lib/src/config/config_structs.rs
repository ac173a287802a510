// lib/src/config/config_structs.rs

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use log::debug;
use serde::{Deserialize, Serialize};

use intake_models::{IntakeError, IntakeResult, ReferenceCollection};

use crate::config::config_constants::*;
use crate::config::config_defaults::*;

/// Top-level configuration. Every section has defaults, so an empty file (or
/// no file at all) yields a working setup against the mock endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeConfig {
    pub endpoints: EndpointConfig,
    pub cache: CacheConfig,
    pub http: HttpConfig,
    pub form: FormConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub cities: String,
    pub specialities: String,
    pub doctors: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        EndpointConfig {
            cities: default_cities_endpoint(),
            specialities: default_specialities_endpoint(),
            doctors: default_doctors_endpoint(),
        }
    }
}

impl EndpointConfig {
    pub fn url_for(&self, collection: ReferenceCollection) -> &str {
        match collection {
            ReferenceCollection::Cities => &self.cities,
            ReferenceCollection::Specialities => &self.specialities,
            ReferenceCollection::Doctors => &self.doctors,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// On-disk cache that survives restarts.
    #[default]
    Sled,
    /// Process-scoped cache.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            backend: CacheBackend::default(),
            path: default_cache_path(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// No timeout unless set; a hung endpoint leaves its list empty.
    pub request_timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub adult_age: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            adult_age: default_adult_age(),
        }
    }
}

impl IntakeConfig {
    /// Loads configuration from, in increasing precedence: built-in defaults,
    /// the config file, and `INTAKE__`-prefixed environment variables.
    ///
    /// An explicit `path` must exist; without one, `intake.toml` in the
    /// working directory is used if present.
    pub fn load(path: Option<&Path>) -> IntakeResult<Self> {
        let file_source = match path {
            Some(path) => File::from(path).required(true),
            None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let config = Config::builder()
            .add_source(file_source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| IntakeError::Config(format!("Failed to read configuration: {}", e)))?;

        let loaded: IntakeConfig = config
            .try_deserialize()
            .map_err(|e| IntakeError::Config(format!("Failed to parse configuration: {}", e)))?;

        debug!("Loaded intake configuration: {:?}", loaded);
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn defaults_point_at_mock_endpoints() {
        let config = IntakeConfig::default();
        assert_eq!(config.endpoints.url_for(ReferenceCollection::Doctors), DEFAULT_DOCTORS_ENDPOINT);
        assert_eq!(config.cache.backend, CacheBackend::Sled);
        assert_eq!(config.form.adult_age, 18);
        assert!(config.http.request_timeout().is_none());
    }

    #[test]
    fn should_load_partial_file_over_defaults() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[cache]\nbackend = \"memory\"\n\n[http]\nrequest_timeout_secs = 5\n\n[endpoints]\ncities = \"http://localhost:9000/cities\""
        )
        .unwrap();

        let config = IntakeConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.http.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.endpoints.cities, "http://localhost:9000/cities");
        assert_eq!(config.endpoints.doctors, DEFAULT_DOCTORS_ENDPOINT);
        assert_eq!(config.form.adult_age, DEFAULT_ADULT_AGE);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = IntakeConfig::load(Some(Path::new("/definitely/not/here/intake.toml")));
        assert!(matches!(result, Err(IntakeError::Config(_))));
    }
}
