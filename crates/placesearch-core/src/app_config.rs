pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";
pub const DEFAULT_LANGUAGE: &str = "de";
pub const DEFAULT_USER_AGENT: &str = "placesearch/0.1";

#[derive(Clone)]
pub struct AppConfig {
    /// Key sent as the `key` parameter on every request.
    pub api_key: String,
    /// Result language sent as the `language` parameter.
    pub language: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl AppConfig {
    /// Builds a config with defaults for everything except the API key.
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"[redacted]")
            .field("language", &self.language)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
