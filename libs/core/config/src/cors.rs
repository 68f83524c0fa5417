use crate::{env_or_default, ConfigError, FromEnv};

pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

/// Browser origins allowed to call the API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    fn parse(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(vec![DEFAULT_ALLOWED_ORIGIN.to_string()])
    }
}

impl FromEnv for CorsConfig {
    /// `CORS_ALLOWED_ORIGIN`: comma-separated origins, defaults to the local frontend.
    fn from_env() -> Result<Self, ConfigError> {
        let origins = Self::parse(&env_or_default("CORS_ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN));
        if origins.is_empty() {
            return Err(ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: "at least one origin is required".to_string(),
            });
        }
        Ok(Self::new(origins))
    }
}
