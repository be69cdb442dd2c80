use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MIN_TEXT_LENGTH: usize = 50;
const DEFAULT_CONFIDENTIAL_MARKERS: &str = "internal use only";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Minimum character count for both résumé and job description.
    pub min_text_length: usize,
    /// Lower-cased phrases that mark a job posting as confidential.
    pub confidential_markers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
            confidential_markers: parse_markers(DEFAULT_CONFIDENTIAL_MARKERS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the process env.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let min_text_length = match lookup("MIN_TEXT_LENGTH") {
            Some(v) => v
                .parse::<usize>()
                .context("MIN_TEXT_LENGTH must be a non-negative integer")?,
            None => DEFAULT_MIN_TEXT_LENGTH,
        };

        let confidential_markers = parse_markers(
            &lookup("CONFIDENTIAL_MARKERS")
                .unwrap_or_else(|| DEFAULT_CONFIDENTIAL_MARKERS.to_string()),
        );

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            min_text_length,
            confidential_markers,
        })
    }
}

fn parse_markers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|m| m.trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.min_text_length, 50);
        assert_eq!(config.confidential_markers, vec!["internal use only"]);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("RUST_LOG", "debug"),
            ("MIN_TEXT_LENGTH", "10"),
            ("CONFIDENTIAL_MARKERS", "Internal Use Only, DO NOT DISTRIBUTE ,,"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.min_text_length, 10);
        assert_eq!(
            config.confidential_markers,
            vec!["internal use only", "do not distribute"]
        );
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_min_length_is_error() {
        assert!(Config::from_lookup(lookup_from(&[("MIN_TEXT_LENGTH", "-1")])).is_err());
    }

    #[test]
    fn test_default_matches_empty_env() {
        let from_env = Config::from_lookup(lookup_from(&[])).unwrap();
        let default = Config::default();
        assert_eq!(from_env.port, default.port);
        assert_eq!(from_env.min_text_length, default.min_text_length);
        assert_eq!(from_env.confidential_markers, default.confidential_markers);
    }
}
