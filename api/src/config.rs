//! Backend endpoint configuration.
//!
//! The backend base URL is baked in at build time via the `BACKEND_URL`
//! environment variable, falling back to the local development backend.

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the external REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`.
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve from the build environment.
    pub fn from_env() -> Self {
        Self::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BASE_URL))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("https://api.example.com/");
        assert_eq!(config.base_url, "https://api.example.com");
    }

    #[test]
    fn test_from_env_has_a_base_url() {
        assert!(!ApiConfig::from_env().base_url.is_empty());
    }
}
