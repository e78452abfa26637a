//! Server configuration
//!
//! All settings come from environment variables with sensible defaults:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | AUTH_MODE | local | local \| delegated |
//! | UPSTREAM_AUTH_URL | http://localhost:3001 | identity authority base URL |
//! | REQUEST_TIMEOUT_MS | 30000 | upstream request timeout |
//! | LOG_DIR | (unset) | directory for rolling log files |

/// How the auth gateway validates credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Exact credential match against the local user store
    #[default]
    Local,
    /// Forward credentials to the external identity authority
    Delegated,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Credential validation mode
    pub auth_mode: AuthMode,
    /// Identity authority base URL (delegated mode)
    pub upstream_auth_url: String,
    /// Upstream request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            auth_mode: match std::env::var("AUTH_MODE").as_deref() {
                Ok("delegated") => AuthMode::Delegated,
                _ => AuthMode::Local,
            },
            upstream_auth_url: std::env::var("UPSTREAM_AUTH_URL")
                .unwrap_or_else(|_| "http://localhost:3001".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the pieces tests care about
    pub fn with_overrides(http_port: u16, auth_mode: AuthMode) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.auth_mode = auth_mode;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
