use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub suggestion_debounce: Duration,
    pub search_result_limit: u32,
    pub suggestion_limit: u32,
    pub home_shelf_limit: u32,
    pub keyring_fallback: bool,
    pub session_file: PathBuf,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(15),
            suggestion_debounce: Duration::from_millis(300),
            search_result_limit: 40,
            suggestion_limit: 5,
            home_shelf_limit: 12,
            keyring_fallback: false,
            session_file: PathBuf::from("data").join("bookify_session.json"),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            api_base_url: env::var("BOOKIFY_API_URL").unwrap_or(defaults.api_base_url),
            request_timeout: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            suggestion_debounce: env::var("SUGGESTION_DEBOUNCE_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.suggestion_debounce),
            search_result_limit: env::var("SEARCH_RESULT_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.search_result_limit),
            suggestion_limit: env::var("SUGGESTION_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.suggestion_limit),
            home_shelf_limit: env::var("HOME_SHELF_LIMIT").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.home_shelf_limit),
            keyring_fallback: env::var("KEYRING_FALLBACK").map(|v| v == "true" || v == "1").unwrap_or(false),
            session_file: env::var("SESSION_FILE").map(PathBuf::from).unwrap_or(defaults.session_file),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}
