use clap::Parser;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::{Result, RosterError};

pub const DEFAULT_SOURCE: &str = "data/celebrities.json";
pub const DEFAULT_LOG_FILE: &str = "celebdesk.log";
pub const DEFAULT_NOTICE_SECS: u64 = 3;

#[derive(Debug, Default, Parser)]
#[command(name = "celebdesk", version, about = "Browse, search, edit and delete celebrity profiles")]
pub struct Cli {
    /// JSON file path or http(s) URL of the profile list
    #[arg(long)]
    pub source: Option<String>,

    /// File that receives the log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Seconds before the ineligibility notice clears itself
    #[arg(long)]
    pub notice_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: String,
    pub log_file: PathBuf,
    pub notice_ttl: Duration,
}

impl AppConfig {
    /// Flags win over `CELEBDESK_*` environment variables, which win over
    /// the defaults.
    pub fn from_cli_and_env(cli: Cli) -> Result<Self> {
        Self::resolve(cli, |key| env::var(key).ok())
    }

    fn resolve(cli: Cli, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let source = cli
            .source
            .or_else(|| lookup("CELEBDESK_SOURCE"))
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        if source.trim().is_empty() {
            return Err(RosterError::config("source must not be empty"));
        }

        let log_file = cli
            .log_file
            .or_else(|| lookup("CELEBDESK_LOG_FILE").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let notice_secs = match cli.notice_secs {
            Some(secs) => secs,
            None => match lookup("CELEBDESK_NOTICE_SECS") {
                Some(raw) => raw.parse::<u64>().map_err(|_| {
                    RosterError::config("CELEBDESK_NOTICE_SECS must be a whole number of seconds")
                })?,
                None => DEFAULT_NOTICE_SECS,
            },
        };

        Ok(Self {
            source,
            log_file,
            notice_ttl: Duration::from_secs(notice_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(Cli::default(), env_of(&[])).unwrap();
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(config.notice_ttl, Duration::from_secs(3));
    }

    #[test]
    fn test_env_fallback() {
        let env = env_of(&[
            ("CELEBDESK_SOURCE", "https://example.com/c.json"),
            ("CELEBDESK_NOTICE_SECS", "5"),
        ]);
        let config = AppConfig::resolve(Cli::default(), env).unwrap();
        assert_eq!(config.source, "https://example.com/c.json");
        assert_eq!(config.notice_ttl, Duration::from_secs(5));
    }

    #[test]
    fn test_flags_win() {
        let cli = Cli::parse_from(["celebdesk", "--source", "local.json", "--notice-secs", "1"]);
        let env = env_of(&[("CELEBDESK_SOURCE", "other.json")]);
        let config = AppConfig::resolve(cli, env).unwrap();
        assert_eq!(config.source, "local.json");
        assert_eq!(config.notice_ttl, Duration::from_secs(1));
    }

    #[test]
    fn test_bad_values() {
        let env = env_of(&[("CELEBDESK_NOTICE_SECS", "soon")]);
        assert!(matches!(
            AppConfig::resolve(Cli::default(), env),
            Err(RosterError::Config(_))
        ));

        let cli = Cli::parse_from(["celebdesk", "--source", " "]);
        assert!(AppConfig::resolve(cli, env_of(&[])).is_err());
    }
}
