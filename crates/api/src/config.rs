use devmatch_core::matching::config::DEFAULT_HOURS_PER_MONTH;
use devmatch_core::matching::MatchingConfig;

use crate::auth::jwt::JwtConfig;

/// Default number of ranked matches returned per request.
pub const DEFAULT_MATCH_RESULT_LIMIT: usize = 20;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT validation settings.
    pub jwt: JwtConfig,
    /// Scoring parameters passed to the match scorer.
    pub matching: MatchingConfig,
    /// Top-N cut applied to ranked matches when the request gives no `limit`.
    pub match_result_limit: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `MATCH_HOURS_PER_MONTH` | `160`                      |
    /// | `MATCH_RESULT_LIMIT`    | `20`                       |
    ///
    /// # Panics
    ///
    /// Panics on unparsable values or an invalid matching configuration, so
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let hours_per_month: f64 = std::env::var("MATCH_HOURS_PER_MONTH")
            .unwrap_or_else(|_| DEFAULT_HOURS_PER_MONTH.to_string())
            .parse()
            .expect("MATCH_HOURS_PER_MONTH must be a number");

        let matching = MatchingConfig::with_hours_per_month(hours_per_month);
        if let Err(e) = matching.validate() {
            panic!("{e}");
        }

        let match_result_limit: usize = std::env::var("MATCH_RESULT_LIMIT")
            .unwrap_or_else(|_| DEFAULT_MATCH_RESULT_LIMIT.to_string())
            .parse()
            .expect("MATCH_RESULT_LIMIT must be a valid usize");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            matching,
            match_result_limit,
        }
    }
}
