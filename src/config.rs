use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "grade-predictor";
const ENV_PREFIX: &str = "GRADE_PREDICTOR";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: i64 = 30;

/// Gateway configuration.
///
/// Sources, later ones winning: built-in defaults, `grade-predictor.toml` in
/// the working directory, `GRADE_PREDICTOR_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the gateway listens on
    pub bind_address: String,
    /// Base URL of the prediction backend
    pub upstream_url: String,
    /// Compiled frontend to serve; API only when unset
    pub static_dir: Option<PathBuf>,
    /// Timeout for incoming requests and upstream calls
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from `.env`, the optional config file and the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(Path::new(CONFIG_FILE), false)
    }

    /// Load configuration with `file` as the config file.
    pub fn load_from(file: &Path, required: bool) -> Result<Self> {
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("upstream_url", DEFAULT_UPSTREAM_URL)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(File::from(file).required(required))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            static_dir: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "upstream_url = \"http://predictions.internal:9000\"\nstatic_dir = \"dist\"\nrequest_timeout_secs = 5"
        )
        .unwrap();

        let config = AppConfig::load_from(file.path(), true).unwrap();

        assert_eq!(config.upstream_url, "http://predictions.internal:9000");
        assert_eq!(config.static_dir, Some(PathBuf::from("dist")));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"), false).unwrap();

        assert!(!config.bind_address.is_empty());
        assert!(!config.upstream_url.is_empty());
    }

    #[test]
    fn test_missing_required_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("absent.toml"), true).is_err());
    }
}
