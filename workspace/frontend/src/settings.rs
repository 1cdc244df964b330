use log::Level;
use web_sys::window;

const STORAGE_API_BASE_URL: &str = "grade_predictor_api_base_url";
const STORAGE_LOG_LEVEL: &str = "grade_predictor_log_level";

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the API, absolute or relative to the page (e.g. "/api/v1")
    pub api_base_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: common::API_PREFIX.to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Custom settings persisted by a developer
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(api_base_url)) = storage.get_item(STORAGE_API_BASE_URL) {
                    settings.api_base_url = api_base_url.trim_end_matches('/').to_string();
                }

                if let Ok(Some(log_level)) = storage.get_item(STORAGE_LOG_LEVEL) {
                    settings.log_level = match log_level.to_lowercase().as_str() {
                        "error" => Level::Error,
                        "warn" => Level::Warn,
                        "info" => Level::Info,
                        "debug" => Level::Debug,
                        "trace" => Level::Trace,
                        _ => settings.log_level,
                    };
                }
            }
        }

        settings
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
