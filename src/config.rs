use std::{path::PathBuf, time::Duration};

use url::Url;

use crate::{error::ConfigError, DEFAULT_OUTPUT, DEFAULT_TIMEOUT, DEFAULT_URL};

pub const URL_VAR: &str = "SPEEDLOG_URL";
pub const TIMEOUT_VAR: &str = "SPEEDLOG_TIMEOUT_SECS";
pub const OUTPUT_VAR: &str = "SPEEDLOG_OUTPUT";
pub const REQUIRE_SUCCESS_VAR: &str = "SPEEDLOG_REQUIRE_SUCCESS";

#[derive(Debug, Clone)]
pub struct Config {
    pub url: Url,
    pub timeout: Duration,
    pub output: PathBuf,
    /// Treat a non-2xx response as a failed probe. Off by default: any response
    /// whose body is read to the end counts as a measurement.
    pub require_success_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("built-in URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            output: PathBuf::from(DEFAULT_OUTPUT),
            require_success_status: false,
        }
    }
}

impl Config {
    /// Reads `.env` if one exists, then applies `SPEEDLOG_*` overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(URL_VAR) {
            config.url = parse_url(URL_VAR, raw.trim())?;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            config.timeout = parse_timeout(TIMEOUT_VAR, raw.trim())?;
        }
        if let Some(raw) = lookup(OUTPUT_VAR) {
            if !raw.trim().is_empty() {
                config.output = PathBuf::from(raw.trim());
            }
        }
        if let Some(raw) = lookup(REQUIRE_SUCCESS_VAR) {
            config.require_success_status = parse_flag(REQUIRE_SUCCESS_VAR, raw.trim())?;
        }
        Ok(config)
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::Url { var, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Scheme {
            var,
            scheme: other.to_string(),
        }),
    }
}

fn parse_timeout(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Timeout {
            var,
            value: raw.to_string(),
        }),
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::Flag {
            var,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.url.as_str(), DEFAULT_URL);
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.output, PathBuf::from("speedtest.csv"));
        assert!(!config.require_success_status);
    }

    #[test]
    fn overrides_every_field() {
        let config = Config::from_lookup(lookup(&[
            (URL_VAR, "https://speed.example.net/10MB.bin"),
            (TIMEOUT_VAR, " 15 "),
            (OUTPUT_VAR, "/var/log/speed.csv"),
            (REQUIRE_SUCCESS_VAR, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.url.host_str(), Some("speed.example.net"));
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.output, PathBuf::from("/var/log/speed.csv"));
        assert!(config.require_success_status);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_lookup(lookup(&[(URL_VAR, "not a url")])),
            Err(ConfigError::Url { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(URL_VAR, "ftp://example.com/file")])),
            Err(ConfigError::Scheme { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])),
            Err(ConfigError::Timeout { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(TIMEOUT_VAR, "two minutes")])),
            Err(ConfigError::Timeout { .. })
        ));
        assert!(matches!(
            Config::from_lookup(lookup(&[(REQUIRE_SUCCESS_VAR, "maybe")])),
            Err(ConfigError::Flag { .. })
        ));
    }

    #[test]
    fn blank_output_keeps_default() {
        let config = Config::from_lookup(lookup(&[(OUTPUT_VAR, "  ")])).unwrap();
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
