use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Driver configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    /// Optional when `prefill` is set.
    pub draft_path: Option<PathBuf>,
    pub cookies: String,
    pub terms_accepted: bool,
    pub prefill: bool,
    pub request_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let draft_path = std::env::var("PROFILE_DRAFT_PATH").ok().map(PathBuf::from);
        let prefill = bool_env("PROFILE_PREFILL")?;
        if draft_path.is_none() && !prefill {
            bail!("Set PROFILE_DRAFT_PATH, or PROFILE_PREFILL=true to resubmit the existing profile");
        }

        Ok(Config {
            api_base_url: require_env("PROFILE_API_BASE_URL")?,
            draft_path,
            cookies: std::env::var("PROFILE_COOKIES").unwrap_or_default(),
            terms_accepted: bool_env("PROFILE_TERMS_ACCEPTED")?,
            prefill,
            request_timeout: Duration::from_secs(
                std::env::var("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset means false.
fn bool_env(key: &str) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => parse_bool(&raw).with_context(|| format!("{key} must be true or false")),
        Err(_) => Ok(false),
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("invalid boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for raw in ["true", "TRUE", "1", "yes", " on "] {
            assert!(parse_bool(raw).unwrap(), "{raw}");
        }
        for raw in ["false", "0", "no", "off", ""] {
            assert!(!parse_bool(raw).unwrap(), "{raw}");
        }
        assert!(parse_bool("maybe").is_err());
    }
}
