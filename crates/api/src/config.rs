/// Default connection string when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/persons?sslmode=disable";

/// Error raised when an environment variable is present but unusable.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Maximum pooled database connections (default: `20`).
    pub database_max_connections: u32,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                             |
    /// |----------------------------|-----------------------------------------------------|
    /// | `DATABASE_URL`             | `postgres://localhost:5432/persons?sslmode=disable` |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                                                |
    /// | `HOST`                     | `0.0.0.0`                                           |
    /// | `PORT`                     | `8080`                                              |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`                             |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                                |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let database_max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 20, "u32")?;

        let host = lookup("HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or(&lookup, "PORT", 8080, "u16")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30, "u64")?;

        Ok(Self {
            database_url,
            database_max_connections,
            host,
            port,
            cors_origins,
            request_timeout_secs,
        })
    }
}

/// Parse `var` if it is set and non-empty, otherwise fall back to `default`.
fn parse_or<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
    }
}
