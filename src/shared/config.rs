use std::env;
use std::time::Duration;

use crate::modules::auth::application::domain::entities::DemoPolicy;

const DEFAULT_DEDUPE_WINDOW_SECS: u64 = 5;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Connection settings for the hosted table/auth backend.
#[derive(Debug, Clone)]
pub struct RemoteStoreConfig {
    pub url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

/// Which `RemoteStore` implementation the process runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Remote,
    /// Process-local tables; content is lost on restart.
    Memory,
    /// No backend configured: empty results, no network calls.
    Null,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub store_mode: StoreMode,
    pub remote: Option<RemoteStoreConfig>,
    /// Secret used to verify access tokens issued by the hosted auth service.
    pub jwt_secret: Option<String>,
    pub visit_dedupe_window: Duration,
    pub demo: DemoPolicy,
    /// Signs the demo sign-in flag. Unset means a per-process secret.
    pub demo_token_secret: Option<String>,
    pub cookie_secure: bool,
}

impl AppConfig {
    /// Try `.env.{RUST_ENV}` first, then fall back to `.env`.
    pub fn load_env_files() {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = get("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("PORT", get("PORT"), 8080u16)?;

        let timeout_secs = parse_or(
            "REMOTE_STORE_TIMEOUT_SECS",
            get("REMOTE_STORE_TIMEOUT_SECS"),
            DEFAULT_STORE_TIMEOUT_SECS,
        )?;
        let remote = match (get("SUPABASE_URL"), get("SUPABASE_ANON_KEY")) {
            (Some(url), Some(api_key)) => Some(RemoteStoreConfig {
                url,
                api_key,
                timeout_secs,
            }),
            _ => None,
        };

        let store_mode = match get("REMOTE_STORE_MODE").as_deref() {
            Some("memory") => StoreMode::Memory,
            Some("remote") if remote.is_none() => return Err(ConfigError::Missing("SUPABASE_URL")),
            Some("remote") | None if remote.is_some() => StoreMode::Remote,
            Some("null") | None => StoreMode::Null,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "REMOTE_STORE_MODE",
                    value: other.to_string(),
                })
            }
        };

        let window_secs = parse_or(
            "VISIT_DEDUPE_WINDOW_SECS",
            get("VISIT_DEDUPE_WINDOW_SECS"),
            DEFAULT_DEDUPE_WINDOW_SECS,
        )?;

        let defaults = DemoPolicy::default();
        let demo = DemoPolicy {
            enabled: parse_or("DEMO_MODE_ENABLED", get("DEMO_MODE_ENABLED"), defaults.enabled)?,
            username: get("DEMO_USERNAME").unwrap_or(defaults.username),
            password: get("DEMO_PASSWORD").unwrap_or(defaults.password),
        };

        let cookie_secure = parse_or(
            "COOKIE_SECURE",
            get("COOKIE_SECURE"),
            environment == "production",
        )?;

        Ok(Self {
            environment,
            host,
            port,
            store_mode,
            remote,
            jwt_secret: get("SUPABASE_JWT_SECRET"),
            visit_dedupe_window: Duration::from_secs(window_secs),
            demo,
            demo_token_secret: get("DEMO_TOKEN_SECRET"),
            cookie_secure,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_null_store_without_backend_settings() {
        let cfg = config(&[]).unwrap();

        assert_eq!(cfg.store_mode, StoreMode::Null);
        assert!(cfg.remote.is_none());
        assert_eq!(cfg.visit_dedupe_window, Duration::from_secs(5));
        assert_eq!(cfg.bind_address(), "127.0.0.1:8080");
        assert!(cfg.demo.enabled);
        assert!(!cfg.cookie_secure);
    }

    #[test]
    fn selects_remote_store_when_url_and_key_are_set() {
        let cfg = config(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ])
        .unwrap();

        assert_eq!(cfg.store_mode, StoreMode::Remote);
        assert_eq!(cfg.remote.unwrap().timeout_secs, 10);
    }

    #[test]
    fn explicit_remote_mode_requires_backend_settings() {
        assert_eq!(
            config(&[("REMOTE_STORE_MODE", "remote")]).unwrap_err(),
            ConfigError::Missing("SUPABASE_URL")
        );
    }

    #[test]
    fn memory_mode_wins_over_backend_settings() {
        let cfg = config(&[
            ("REMOTE_STORE_MODE", "memory"),
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ])
        .unwrap();
        assert_eq!(cfg.store_mode, StoreMode::Memory);
    }

    #[test]
    fn dedupe_window_and_demo_pair_are_configurable() {
        let cfg = config(&[
            ("VISIT_DEDUPE_WINDOW_SECS", "30"),
            ("DEMO_USERNAME", "guest"),
            ("DEMO_PASSWORD", "letmein"),
            ("DEMO_MODE_ENABLED", "false"),
        ])
        .unwrap();

        assert_eq!(cfg.visit_dedupe_window, Duration::from_secs(30));
        assert_eq!(cfg.demo.username, "guest");
        assert_eq!(cfg.demo.password, "letmein");
        assert!(!cfg.demo.enabled);
    }

    #[test]
    fn demo_token_secret_is_optional() {
        assert_eq!(config(&[]).unwrap().demo_token_secret, None);

        let cfg = config(&[("DEMO_TOKEN_SECRET", "  ")]).unwrap();
        assert_eq!(cfg.demo_token_secret, None);

        let cfg = config(&[("DEMO_TOKEN_SECRET", "s3cret-s3cret")]).unwrap();
        assert_eq!(cfg.demo_token_secret.as_deref(), Some("s3cret-s3cret"));
    }

    #[test]
    fn rejects_unparseable_values() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { name: "PORT", .. })
        ));
        assert!(matches!(
            config(&[("REMOTE_STORE_MODE", "sqlite")]),
            Err(ConfigError::Invalid { name: "REMOTE_STORE_MODE", .. })
        ));
    }

    #[test]
    fn production_defaults_to_secure_cookies() {
        let cfg = config(&[("RUST_ENV", "production")]).unwrap();
        assert!(cfg.cookie_secure);
    }
}
