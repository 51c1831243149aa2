use std::env;

use anyhow::{Context, bail};
use auth::JwtSettings;
use chrono::TimeDelta;
use jsonwebtoken::Algorithm;

/// Session token and cookie settings.
///
/// Environment variables:
/// - JWT_SECRET_KEY: HMAC signing secret (required)
/// - JWT_EXPIRES_IN: token lifetime, `<n>s|m|h|d` or bare seconds (default: "1d")
/// - JWT_ALGORITHM: HS256, HS384 or HS512 (default: "HS256")
/// - APP_ENV: `production` marks cookies `Secure`
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt: JwtSettings,
    pub secure_cookies: bool,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET_KEY").context("JWT_SECRET_KEY must be set")?;
        if secret.is_empty() {
            bail!("JWT_SECRET_KEY must not be empty");
        }
        let expires_in = parse_lifetime(
            &env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "1d".to_string()),
        )?;
        let algorithm =
            parse_algorithm(&env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()))?;
        let secure_cookies = env::var("APP_ENV").is_ok_and(|v| v == "production");

        Ok(Self {
            jwt: JwtSettings {
                secret,
                expires_in,
                algorithm,
            },
            secure_cookies,
        })
    }
}

pub fn parse_lifetime(raw: &str) -> anyhow::Result<TimeDelta> {
    let raw = raw.trim();
    let (digits, unit) = match raw.char_indices().last() {
        Some((index, unit)) if unit.is_ascii_alphabetic() => (&raw[..index], unit),
        _ => (raw, 's'),
    };
    let value: i64 = digits
        .parse()
        .with_context(|| format!("invalid JWT_EXPIRES_IN: {raw}"))?;
    if value <= 0 {
        bail!("JWT_EXPIRES_IN must be positive: {raw}");
    }

    let lifetime = match unit {
        's' => TimeDelta::try_seconds(value),
        'm' => TimeDelta::try_minutes(value),
        'h' => TimeDelta::try_hours(value),
        'd' => TimeDelta::try_days(value),
        other => bail!("unsupported JWT_EXPIRES_IN unit '{other}'"),
    };
    lifetime.with_context(|| format!("JWT_EXPIRES_IN out of range: {raw}"))
}

/// Only HMAC algorithms are accepted since tokens are signed with a shared secret.
pub fn parse_algorithm(raw: &str) -> anyhow::Result<Algorithm> {
    match raw.trim() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => bail!("unsupported JWT_ALGORITHM '{other}'"),
    }
}
