//! Client configuration.
//!
//! A [`Configuration`] carries the base path, credentials and per-request
//! transport settings. One instance is kept process-wide; clients built with
//! [`ApiClient::from_global`](crate::ApiClient::from_global) read it again at
//! every request, so a replacement installed with [`Configuration::set_global`]
//! applies to the next call.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `INTRINIO_API_KEY` | `api_key` | none |
//! | `INTRINIO_BASE_PATH` | `base_path` | `https://api-v2.intrinio.com` |
//! | `INTRINIO_TIMEOUT_MS` | `timeout_ms` | `30000` |

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::error::ConfigError;
use crate::http_client::HttpRequest;

pub const DEFAULT_BASE_PATH: &str = "https://api-v2.intrinio.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

const ENV_API_KEY: &str = "INTRINIO_API_KEY";
const ENV_BASE_PATH: &str = "INTRINIO_BASE_PATH";
const ENV_TIMEOUT_MS: &str = "INTRINIO_TIMEOUT_MS";

static GLOBAL: OnceLock<RwLock<Arc<Configuration>>> = OnceLock::new();

/// Where the API key travels on each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyLocation {
    Query { name: String },
    Header { name: String },
}

impl Default for ApiKeyLocation {
    fn default() -> Self {
        Self::Query {
            name: String::from("api_key"),
        }
    }
}

impl ApiKeyLocation {
    pub fn apply(&self, api_key: &str, request: HttpRequest) -> HttpRequest {
        match self {
            Self::Query { name } => request.with_query(name.clone(), api_key),
            Self::Header { name } => request.with_header(name.clone(), api_key),
        }
    }

    /// Query key that must be hidden when a URL is logged.
    pub fn query_name(&self) -> Option<&str> {
        match self {
            Self::Query { name } => Some(name),
            Self::Header { .. } => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Configuration {
    pub base_path: String,
    pub api_key: Option<String>,
    pub api_key_location: ApiKeyLocation,
    pub default_headers: BTreeMap<String, String>,
    pub user_agent: String,
    pub timeout_ms: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_path: String::from(DEFAULT_BASE_PATH),
            api_key: None,
            api_key_location: ApiKeyLocation::default(),
            default_headers: BTreeMap::new(),
            user_agent: format!("intrinio-rust/{}", env!("CARGO_PKG_VERSION")),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Debug for Configuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_location", &self.api_key_location)
            .field("default_headers", &self.default_headers)
            .field("user_agent", &self.user_agent)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Configuration {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Read settings from `INTRINIO_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(key) = lookup(ENV_API_KEY).filter(|key| !key.trim().is_empty()) {
            config.api_key = Some(key.trim().to_owned());
        }

        if let Some(base_path) = lookup(ENV_BASE_PATH) {
            config = config.with_base_path(base_path)?;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            let parsed = raw.trim().parse::<u64>().ok().filter(|value| *value > 0);
            config.timeout_ms = parsed.ok_or(ConfigError::InvalidVariable {
                name: ENV_TIMEOUT_MS,
                value: raw,
            })?;
        }

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Result<Self, ConfigError> {
        let base_path = base_path.into();
        let trimmed = base_path.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBasePath { value: base_path });
        }
        self.base_path = trimmed.to_owned();
        Ok(self)
    }

    pub fn with_api_key_location(mut self, location: ApiKeyLocation) -> Self {
        self.api_key_location = location;
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Snapshot of the process-wide configuration.
    pub fn global() -> Arc<Configuration> {
        let lock = global_lock();
        let guard = lock.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the process-wide configuration. In-flight requests keep the
    /// snapshot they started with.
    pub fn set_global(config: Configuration) {
        let lock = global_lock();
        let mut guard = lock.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(config);
    }
}

fn global_lock() -> &'static RwLock<Arc<Configuration>> {
    GLOBAL.get_or_init(|| {
        let initial = Configuration::from_env().unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring invalid INTRINIO_* environment; using defaults");
            Configuration::default()
        });
        RwLock::new(Arc::new(initial))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'static str, &'static str)]) -> impl Fn(&'static str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn reads_key_base_path_and_timeout_from_environment() {
        let vars = [
            ("INTRINIO_API_KEY", " key-123 "),
            ("INTRINIO_BASE_PATH", "https://sandbox.example.test/"),
            ("INTRINIO_TIMEOUT_MS", "1500"),
        ];
        let config = Configuration::from_lookup(lookup(&vars)).expect("valid environment");

        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.base_path, "https://sandbox.example.test");
        assert_eq!(config.timeout_ms, 1500);
    }

    #[test]
    fn missing_environment_falls_back_to_defaults() {
        let config = Configuration::from_lookup(lookup(&[])).expect("defaults");
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.api_key, None);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn rejects_non_numeric_timeout() {
        let vars = [("INTRINIO_TIMEOUT_MS", "soon")];
        let error = Configuration::from_lookup(lookup(&vars)).expect_err("must fail");
        assert!(matches!(error, ConfigError::InvalidVariable { .. }));
    }

    #[test]
    fn rejects_base_path_without_scheme() {
        let error = Configuration::default()
            .with_base_path("api-v2.intrinio.com")
            .expect_err("must fail");
        assert!(matches!(error, ConfigError::InvalidBasePath { .. }));
    }

    #[test]
    fn debug_output_never_shows_the_api_key() {
        let config = Configuration::new("very-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn header_location_moves_key_out_of_query() {
        let request = ApiKeyLocation::Header {
            name: String::from("X-Authorization-Public-Key"),
        }
        .apply("abc", HttpRequest::get("https://example.test/companies"));

        assert!(!request.has_query("api_key"));
        assert_eq!(
            request
                .headers
                .get("x-authorization-public-key")
                .map(String::as_str),
            Some("abc")
        );
    }
}
