use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use finboard_core::constants::DEFAULT_BASE_CURRENCY;

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub user_id: String,
    /// Reference date for every computation
    pub as_of: NaiveDate,
    pub base_currency: String,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_file = lookup("FINBOARD_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("finboard.json"));
        let user_id = lookup("FINBOARD_USER_ID").context("FINBOARD_USER_ID must be set")?;
        let as_of = match lookup("FINBOARD_AS_OF") {
            Some(value) => NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                .with_context(|| format!("FINBOARD_AS_OF '{}' is not a YYYY-MM-DD date", value))?,
            None => Local::now().date_naive(),
        };
        let base_currency = lookup("FINBOARD_BASE_CURRENCY")
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());
        let log_format = lookup("FINBOARD_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            data_file,
            user_id,
            as_of,
            base_currency,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_lookup(lookup_from(&[
            ("FINBOARD_DATA_FILE", "/tmp/data.json"),
            ("FINBOARD_USER_ID", "alex"),
            ("FINBOARD_AS_OF", "2024-03-10"),
            ("FINBOARD_BASE_CURRENCY", "eur"),
            ("FINBOARD_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/data.json"));
        assert_eq!(config.user_id, "alex");
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(config.base_currency, "EUR");
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("FINBOARD_USER_ID", "alex")])).unwrap();

        assert_eq!(config.data_file, PathBuf::from("finboard.json"));
        assert_eq!(config.base_currency, "USD");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_missing_user_is_an_error() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
    }

    #[test]
    fn test_bad_date_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[
            ("FINBOARD_USER_ID", "alex"),
            ("FINBOARD_AS_OF", "10/03/2024"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("FINBOARD_AS_OF"));
    }
}
