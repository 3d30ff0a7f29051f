//! Server configuration
//!
//! Read from Shuttle secrets (Secrets.toml) through a key lookup, so tests
//! can feed plain maps.

use chrono::Duration;
use thiserror::Error;

pub const TOKEN_SECRET_KEY: &str = "CHARSHEET_TOKEN_SECRET";
pub const TOKEN_TTL_KEY: &str = "CHARSHEET_TOKEN_TTL_SECS";
pub const MALFORMED_ID_KEY: &str = "CHARSHEET_MALFORMED_ID";

const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
const MAX_TOKEN_TTL_SECS: i64 = 30 * 24 * 3600;
const MIN_SECRET_LEN: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// How `GET /api/characters/:id` answers an id that is not a valid UUID
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedIdPolicy {
    /// 200 with a not-found style envelope
    #[default]
    NotFound,
    /// 400 carrying the same envelope body
    BadRequest,
}

impl std::str::FromStr for MalformedIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not_found" => Ok(MalformedIdPolicy::NotFound),
            "bad_request" => Ok(MalformedIdPolicy::BadRequest),
            _ => Err(format!("expected not_found or bad_request, got '{s}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub token_secret: String,
    pub token_ttl: Duration,
    pub malformed_id: MalformedIdPolicy,
}

impl ServerConfig {
    /// Build from any key/value source (Shuttle `SecretStore`, env, a map)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token_secret = lookup(TOKEN_SECRET_KEY)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(TOKEN_SECRET_KEY))?;
        if token_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: TOKEN_SECRET_KEY,
                reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
            });
        }

        let token_ttl_secs = match lookup(TOKEN_TTL_KEY) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|secs| (1..=MAX_TOKEN_TTL_SECS).contains(secs))
                .ok_or_else(|| ConfigError::Invalid {
                    key: TOKEN_TTL_KEY,
                    reason: format!(
                        "expected between 1 and {MAX_TOKEN_TTL_SECS} seconds, got '{raw}'"
                    ),
                })?,
            None => DEFAULT_TOKEN_TTL_SECS,
        };

        let malformed_id = match lookup(MALFORMED_ID_KEY) {
            Some(raw) => raw.parse::<MalformedIdPolicy>().map_err(|reason| ConfigError::Invalid {
                key: MALFORMED_ID_KEY,
                reason,
            })?,
            None => MalformedIdPolicy::default(),
        };

        Ok(Self {
            token_secret,
            token_ttl: Duration::seconds(token_ttl_secs),
            malformed_id,
        })
    }
}
