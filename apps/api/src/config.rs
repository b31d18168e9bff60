use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. Saved résumés are kept in memory when unset.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Editor sessions untouched for this long are dropped.
    pub session_idle_ttl_secs: u64,
    pub session_sweep_interval_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            database_max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 10)?,
            session_idle_ttl_secs: parse_env("SESSION_IDLE_TTL_SECS", 3600)?,
            session_sweep_interval_secs: parse_env("SESSION_SWEEP_INTERVAL_SECS", 60)?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            database_max_connections: 10,
            session_idle_ttl_secs: 3600,
            session_sweep_interval_secs: 60,
            port: 8080,
            rust_log: "info".to_string(),
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let port: u16 = parse_env("VITAE_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("VITAE_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("VITAE_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }
}
