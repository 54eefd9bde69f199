//! Command line and environment configuration for the report binary.
//!
//! Precedence: CLI flag, then environment variable (a `.env` file is loaded
//! first by `main`), then the default.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

/// Default number of rows per page.
pub const PAGE_SIZE: u64 = 8;

/// Default log4rs configuration file.
pub const LOG_CONFIG: &str = "log4rs.yml";

pub const ENV_PAGE_SIZE: &str = "SUBNET_PAGE_SIZE";
pub const ENV_LOG_CONFIG: &str = "SUBNET_LOG_CONFIG";

/// Inspect an IPv4 address or CIDR block: classification, sub-blocks and hosts.
#[derive(Debug, Parser)]
#[command(name = "ipv4-subnet-explorer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Address, e.g. "192.168.1.1/24" or "10.0.0.5"
    pub address: String,

    /// Dotted-decimal subnet mask, used when the address has no /prefix
    #[arg(long, short)]
    pub mask: Option<String>,

    /// List sub-blocks of this prefix length
    #[arg(long = "subnet-prefix", short = 's')]
    pub subnet_prefix: Option<u8>,

    /// Page to show (0-based)
    #[arg(long, default_value_t = 0)]
    pub page: u64,

    /// Rows per page
    #[arg(long = "page-size")]
    pub page_size: Option<u64>,

    /// Also list usable hosts
    #[arg(long)]
    pub hosts: bool,

    /// Print the classification as JSON instead of CSV
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Path to the log4rs configuration file
    #[arg(long = "log-config")]
    pub log_config: Option<PathBuf>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: String,
    pub mask: Option<String>,
    pub subnet_prefix: Option<u8>,
    pub page: u64,
    pub page_size: u64,
    pub hosts: bool,
    pub json: bool,
    pub color: bool,
    pub log_config: PathBuf,
}

impl Config {
    /// Resolve settings from the process environment.
    pub fn load(cli: Cli) -> Result<Config, Box<dyn Error>> {
        Config::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup.
    pub fn resolve(
        cli: Cli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Config, Box<dyn Error>> {
        let page_size = match (cli.page_size, env(ENV_PAGE_SIZE)) {
            (Some(size), _) => size,
            (None, Some(value)) => value
                .trim()
                .parse()
                .map_err(|e| format!("Invalid {ENV_PAGE_SIZE} '{value}': {e}"))?,
            (None, None) => PAGE_SIZE,
        };
        if page_size == 0 {
            return Err("Page size must be greater than zero".into());
        }

        let log_config = cli
            .log_config
            .or_else(|| env(ENV_LOG_CONFIG).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(LOG_CONFIG));

        Ok(Config {
            address: cli.address,
            mask: cli.mask,
            subnet_prefix: cli.subnet_prefix,
            page: cli.page,
            page_size,
            hosts: cli.hosts,
            json: cli.json,
            color: !cli.no_color,
            log_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("ipv4-subnet-explorer").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(cli(&["10.0.0.1"]), |_| None).unwrap();
        assert_eq!(config.address, "10.0.0.1");
        assert_eq!(config.page_size, PAGE_SIZE);
        assert_eq!(config.log_config, PathBuf::from(LOG_CONFIG));
        assert!(config.color);
        assert!(!config.hosts);
    }

    #[test]
    fn test_env_overrides_default() {
        let env = |key: &str| match key {
            ENV_PAGE_SIZE => Some("16".to_string()),
            ENV_LOG_CONFIG => Some("/tmp/log.yml".to_string()),
            _ => None,
        };
        let config = Config::resolve(cli(&["10.0.0.1"]), env).unwrap();
        assert_eq!(config.page_size, 16);
        assert_eq!(config.log_config, PathBuf::from("/tmp/log.yml"));
    }

    #[test]
    fn test_cli_overrides_env() {
        let env = |_: &str| Some("16".to_string());
        let config = Config::resolve(
            cli(&["10.0.0.0/8", "--page-size", "4", "-s", "10", "--hosts", "--no-color"]),
            env,
        )
        .unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.subnet_prefix, Some(10));
        assert!(config.hosts);
        assert!(!config.color);
    }

    #[test]
    fn test_invalid_page_size() {
        assert!(Config::resolve(cli(&["10.0.0.1"]), |_| Some("abc".to_string())).is_err());
        assert!(Config::resolve(cli(&["10.0.0.1", "--page-size", "0"]), |_| None).is_err());
    }
}
