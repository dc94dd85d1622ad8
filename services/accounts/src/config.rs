use std::time::Duration;

/// Accounts service configuration loaded from environment variables.
#[derive(Debug)]
pub struct AccountsConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `ACCOUNTS_PORT`.
    pub accounts_port: u16,
    /// Base URL of the auth service (e.g. "http://auth:3112").
    pub auth_service_url: String,
    /// Timeout for outbound auth calls (default 5s). Env var: `AUTH_HTTP_TIMEOUT_SECS`.
    pub auth_http_timeout: Duration,
}

impl AccountsConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            accounts_port: std::env::var("ACCOUNTS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3114),
            auth_service_url: std::env::var("AUTH_SERVICE_URL").expect("AUTH_SERVICE_URL"),
            auth_http_timeout: Duration::from_secs(
                std::env::var("AUTH_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}
