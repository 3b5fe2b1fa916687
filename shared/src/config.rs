//! API endpoint and key configuration.

/// Header carrying the static API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Hosted feedback service used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "https://feedback-api-3-xt6r.onrender.com";

/// Key accepted by the hosted service.
pub const DEFAULT_API_KEY: &str = "123456feedback";

// 编译时从环境变量读取，未设置时使用默认服务
const BUILD_API_BASE: Option<&str> = option_env!("FEEDBACK_API_BASE");
const BUILD_API_KEY: Option<&str> = option_env!("FEEDBACK_API_KEY");

/// Where the feedback API lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Value of the [`API_KEY_HEADER`] header.
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_API_KEY)
    }
}

impl ApiConfig {
    /// Builds a config, dropping trailing slashes from `base_url`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Config baked in at compile time through `FEEDBACK_API_BASE` and
    /// `FEEDBACK_API_KEY`, falling back to the hosted service.
    pub fn from_build_env() -> Self {
        Self::new(
            non_empty(BUILD_API_BASE).unwrap_or(DEFAULT_API_BASE),
            non_empty(BUILD_API_KEY).unwrap_or(DEFAULT_API_KEY),
        )
    }

    /// `GET` target listing every record.
    pub fn feedbacks_url(&self) -> String {
        self.endpoint("/feedbacks")
    }

    /// `POST` target creating a record.
    pub fn create_url(&self) -> String {
        self.endpoint("/feedbacks/add")
    }

    /// `PATCH` target updating the status of record `id`.
    pub fn status_url(&self, id: i64) -> String {
        self.endpoint(&format!("/feedbacks/{id}/status"))
    }

    /// `POST` target producing an AI summary.
    pub fn summary_url(&self) -> String {
        self.endpoint("/feedbacks/summary")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn endpoints_join_without_double_slashes() {
        let config = ApiConfig::new("http://localhost:8080/ ", "key");
        assert_eq!(config.feedbacks_url(), "http://localhost:8080/feedbacks");
        assert_eq!(config.create_url(), "http://localhost:8080/feedbacks/add");
        assert_eq!(config.status_url(42), "http://localhost:8080/feedbacks/42/status");
        assert_eq!(config.summary_url(), "http://localhost:8080/feedbacks/summary");
    }

    #[test]
    fn build_env_config_is_never_empty() {
        let config = ApiConfig::from_build_env();
        assert!(!config.base_url.is_empty());
        assert!(!config.api_key.is_empty());
    }
}
