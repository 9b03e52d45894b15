// Seed run configuration: where the backend lives and how to authenticate.

use std::fmt;
use std::time::Duration;

use crate::util::env::env_opt;

pub const BASE_URL_ENV: &str = "API_BASE_URL";
pub const TOKEN_ENV: &str = "ADMIN_TOKEN";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
/// Every call, read or write, gets the same fixed budget.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fatal configuration problems, reported before any request is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingToken,
    InvalidBaseUrl { value: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingToken => write!(
                f,
                "{TOKEN_ENV} environment variable is not set. \
                 Export it in your shell (or add it to .env), e.g.:\n  \
                 export {TOKEN_ENV}='your_jwt_here'"
            ),
            ConfigError::InvalidBaseUrl { value, reason } => write!(
                f,
                "{BASE_URL_ENV}='{value}' is not a valid http(s) URL ({reason}); \
                 expected something like {DEFAULT_BASE_URL}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolved once at process start and handed to the client explicitly.
#[derive(Clone)]
pub struct SeedConfig {
    pub base_url: String,
    token: String,
    pub timeout: Duration,
}

// Hand-written so the token never lands in a log line via `{:?}`.
impl fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedConfig")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SeedConfig {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, ConfigError> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingToken)?;
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            token: token.to_string(),
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Create config from environment variables, with an optional base URL override
    /// (typically from the command line).
    pub fn from_env(base_url_override: Option<&str>) -> Result<Self, ConfigError> {
        let token = env_opt(TOKEN_ENV);
        let base_url = base_url_override
            .map(str::to_string)
            .or_else(|| env_opt(BASE_URL_ENV))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url, token.as_deref())
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `{base}/{path}` without doubled slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let parsed = url::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
