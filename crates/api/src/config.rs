use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding the built front end (default: `static`).
    pub static_dir: PathBuf,
    /// Session cookie settings.
    pub session: SessionConfig,
    /// Admin account to create at startup, if configured.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Session cookie configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cookie name (default: `forensic_session`).
    pub cookie_name: String,
    /// Server-side session lifetime in hours (default: `12`).
    pub ttl_hours: i64,
    /// Set the `Secure` attribute on the cookie (default: `false`).
    pub secure: bool,
}

/// Credentials for the startup admin account.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "forensic_session".into(),
            ttl_hours: 12,
            secure: false,
        }
    }
}

impl SessionConfig {
    /// Load session settings from the environment.
    ///
    /// | Env Var                 | Default            |
    /// |-------------------------|--------------------|
    /// | `SESSION_COOKIE_NAME`   | `forensic_session` |
    /// | `SESSION_TTL_HOURS`     | `12`               |
    /// | `SESSION_COOKIE_SECURE` | `false`            |
    pub fn from_env() -> Self {
        let cookie_name =
            std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "forensic_session".into());

        let ttl_hours: i64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "12".into())
            .parse()
            .expect("SESSION_TTL_HOURS must be a valid i64");
        assert!(ttl_hours > 0, "SESSION_TTL_HOURS must be positive");

        let secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        Self {
            cookie_name,
            ttl_hours,
            secure,
        }
    }
}

impl BootstrapAdmin {
    /// Read `BOOTSTRAP_ADMIN_EMAIL` / `BOOTSTRAP_ADMIN_PASSWORD`.
    ///
    /// Returns `None` unless both are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let email = std::env::var("BOOTSTRAP_ADMIN_EMAIL").ok()?;
        let password = std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok()?;
        if email.trim().is_empty() || password.is_empty() {
            return None;
        }
        let full_name =
            std::env::var("BOOTSTRAP_ADMIN_NAME").unwrap_or_else(|_| "Administrator".into());
        Some(Self {
            full_name,
            email: email.trim().to_string(),
            password,
        })
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `static`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5001".into())
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

        let static_dir =
            PathBuf::from(std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            session: SessionConfig::from_env(),
            bootstrap_admin: BootstrapAdmin::from_env(),
        }
    }
}
