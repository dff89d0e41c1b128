use std::env;
use std::time::Duration;

use chrono::FixedOffset;
use classbell_schedule::Locale;
use tracing::debug;

use crate::errors::{ClassbellError, ConfigError};

/// Default re-evaluation cadence of the refresh driver.
pub const DEFAULT_REFRESH_SECS: u64 = 60;

/// Runtime environment used by the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn from_str(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Development,
        }
    }
}

/// Process configuration for the Classbell services.
#[derive(Debug, Clone)]
pub struct ClassbellConfig {
    pub environment: Environment,
    pub locale: Locale,
    pub refresh_interval: Duration,
    /// Fixed UTC offset used to read the wall clock. `None` means the host's
    /// local zone.
    pub utc_offset: Option<FixedOffset>,
    pub log_level: String,
}

impl Default for ClassbellConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            locale: Locale::Korean,
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            utc_offset: None,
            log_level: "info".to_string(),
        }
    }
}

impl ClassbellConfig {
    /// Loads configuration from the process environment (`CLASSBELL_*`),
    /// reading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env_with_prefix("CLASSBELL_")
    }

    /// Loads configuration from env vars prefixed with the provided value
    /// (e.g. `KIOSK_`). Unset keys keep their defaults; malformed ones are
    /// rejected.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        let key = |suffix: &str| format!("{}{}", prefix, suffix);
        let lookup = |name: &str| match env::var(name) {
            Ok(raw) => Some(raw),
            Err(_) => {
                debug!(key = name, "configuration key unset, using default");
                None
            }
        };
        let defaults = Self::default();

        let environment = lookup(&key("ENV"))
            .map(|raw| Environment::from_str(&raw))
            .unwrap_or_default();

        let locale_key = key("LOCALE");
        let locale = match lookup(&locale_key) {
            Some(raw) => raw.parse::<Locale>().map_err(|source| ConfigError::InvalidLocale {
                key: locale_key.clone(),
                source,
            })?,
            None => defaults.locale,
        };

        let refresh_key = key("REFRESH_SECS");
        let refresh_interval = match lookup(&refresh_key) {
            Some(raw) => parse_refresh_secs(&refresh_key, &raw)?,
            None => defaults.refresh_interval,
        };

        let offset_key = key("UTC_OFFSET");
        let utc_offset = match lookup(&offset_key) {
            Some(raw) => Some(parse_utc_offset(&offset_key, &raw)?),
            None => None,
        };

        let log_level = lookup(&key("LOG_LEVEL")).unwrap_or(defaults.log_level);

        debug!(
            prefix,
            environment = ?environment,
            locale = %locale,
            refresh_secs = refresh_interval.as_secs(),
            utc_offset = ?utc_offset,
            "configuration loaded"
        );

        Ok(Self {
            environment,
            locale,
            refresh_interval,
            utc_offset,
            log_level,
        })
    }

    /// Whether the service is running in production.
    pub fn is_production(&self) -> bool {
        matches!(self.environment, Environment::Production)
    }
}

fn parse_refresh_secs(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(key, raw, "expected a whole number of seconds"))?;
    if secs == 0 {
        return Err(ConfigError::invalid(key, raw, "interval must be positive"));
    }
    Ok(Duration::from_secs(secs))
}

/// Parses `Z`, `UTC`, `+09:00`, `-0530` or `+9`.
fn parse_utc_offset(key: &str, raw: &str) -> Result<FixedOffset, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0)
            .ok_or_else(|| ConfigError::invalid(key, raw, "offset out of range"));
    }

    let invalid = || ConfigError::invalid(key, raw, "expected an offset like +09:00");
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(invalid()),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| ConfigError::invalid(key, raw, "offset out of range"))
}

/// Helper that loads config and converts to the canonical Classbell error type.
pub fn load_config() -> Result<ClassbellConfig, ClassbellError> {
    Ok(ClassbellConfig::from_env()?)
}
