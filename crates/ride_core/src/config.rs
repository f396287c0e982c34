//! Runtime configuration for the remote store and the reachability probes.
//!
//! Values come from the process environment, optionally seeded from
//! `.env.local` / `.env` files. A missing backend URL or access key is not an
//! error: a placeholder is substituted so the rest of the app can still be
//! constructed, and [`StoreConfig::misconfiguration`] reports what is missing
//! so the UI can show the setup guide instead of a dashboard.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, RideError};

pub const ENV_BACKEND_URL: &str = "SUPABASE_URL";
pub const ENV_ACCESS_KEY: &str = "SUPABASE_ANON_KEY";
/// Names used by the web project's `.env.local`; read when the plain names are unset.
pub const ENV_BACKEND_URL_PUBLIC: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const ENV_ACCESS_KEY_PUBLIC: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";
pub const ENV_PROBE_URL: &str = "RIDECONNECT_PROBE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "RIDECONNECT_REQUEST_TIMEOUT_SECS";

pub const DEFAULT_PROBE_URL: &str = "https://www.google.com";
pub const PLACEHOLDER_BACKEND_URL: &str = "https://your-project-id.supabase.co";
pub const PLACEHOLDER_ACCESS_KEY: &str = "your-anon-key";

/// Files probed, in order, by [`load_env_files`].
pub const ENV_FILE_NAMES: [&str; 2] = [".env.local", ".env"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend_url: String,
    pub access_key: String,
    pub probe_url: String,
    /// `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
    missing: Vec<&'static str>,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve from the process environment, with explicit values (command
    /// line flags) taking precedence over the variable of the same name.
    pub fn from_env_with_overrides(
        overrides: &[(&'static str, Option<&str>)],
    ) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| {
            overrides
                .iter()
                .find(|(key, _)| *key == name)
                .and_then(|(_, value)| value.map(str::to_string))
                .or_else(|| std::env::var(name).ok())
        })
    }

    /// Resolve configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let backend_url = read(ENV_BACKEND_URL).or_else(|| read(ENV_BACKEND_URL_PUBLIC));
        let access_key = read(ENV_ACCESS_KEY).or_else(|| read(ENV_ACCESS_KEY_PUBLIC));
        let mut config = Self::from_values(backend_url, access_key);

        if let Some(probe_url) = read(ENV_PROBE_URL) {
            config.probe_url = probe_url.trim().to_string();
        }
        if let Some(raw) = read(ENV_REQUEST_TIMEOUT_SECS) {
            config.request_timeout = Some(parse_timeout_secs(&raw)?);
        }
        Ok(config)
    }

    /// Build from explicit values, substituting placeholders for absent ones.
    pub fn from_values(backend_url: Option<String>, access_key: Option<String>) -> Self {
        let backend_url = backend_url.filter(|value| !value.trim().is_empty());
        let access_key = access_key.filter(|value| !value.trim().is_empty());

        let mut missing = Vec::new();
        if backend_url.is_none() {
            missing.push(ENV_BACKEND_URL);
        }
        if access_key.is_none() {
            missing.push(ENV_ACCESS_KEY);
        }
        if !missing.is_empty() {
            tracing::warn!(
                missing = %missing.join(", "),
                "backend environment variables not set, using placeholder values"
            );
        }

        Self {
            backend_url: backend_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| PLACEHOLDER_BACKEND_URL.to_string()),
            access_key: access_key
                .map(|key| key.trim().to_string())
                .unwrap_or_else(|| PLACEHOLDER_ACCESS_KEY.to_string()),
            probe_url: DEFAULT_PROBE_URL.to_string(),
            request_timeout: None,
            missing,
        }
    }

    pub fn with_probe_url(mut self, probe_url: impl Into<String>) -> Self {
        self.probe_url = probe_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn missing_variables(&self) -> &[&'static str] {
        &self.missing
    }

    pub fn is_misconfigured(&self) -> bool {
        !self.missing.is_empty()
    }

    pub fn misconfiguration(&self) -> Option<RideError> {
        if self.missing.is_empty() {
            return None;
        }
        Some(RideError::MisconfiguredEnvironment {
            missing: self.missing.clone(),
        })
    }
}

pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        name: ENV_REQUEST_TIMEOUT_SECS,
        value: raw.to_string(),
    };
    let secs: f64 = raw.trim().parse().map_err(|_| invalid())?;
    // Rejects negative, non-finite and overflowing values.
    let timeout = Duration::try_from_secs_f64(secs).map_err(|_| invalid())?;
    if timeout.is_zero() {
        return Err(invalid());
    }
    Ok(timeout)
}

/// Load `.env.local` and `.env` from `dir` into the process environment.
///
/// Variables already set in the environment win. Returns the files that were
/// actually read; absent files are skipped silently.
pub fn load_env_files(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let mut loaded = Vec::new();
    for name in ENV_FILE_NAMES {
        let path = dir.join(name);
        if !path.is_file() {
            continue;
        }
        dotenvy::from_path(&path).map_err(|source| ConfigError::EnvFile {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded environment file");
        loaded.push(path);
    }
    Ok(loaded)
}
