//! Command-line and build-time configuration.
//!
//! The API key and base URL are normally baked in at compile time
//! (`NEWS_API_KEY=... NEWS_BASE_URL=... cargo build`).  Both can be overridden
//! at runtime with a flag or the same-named environment variable.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use url::Url;

/// Used when neither the build nor the command line names a base URL.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Country fetched when `--country` is not given.
pub const DEFAULT_COUNTRY: &str = "hu";

const BUILD_API_KEY: Option<&str> = option_env!("NEWS_API_KEY");
const BUILD_BASE_URL: Option<&str> = option_env!("NEWS_BASE_URL");

#[derive(Parser, Debug)]
#[command(name = "headlines", version, about = "Top news headlines in the terminal")]
pub struct Cli {
    /// Two-letter country code to fetch headlines for.
    #[arg(short, long, default_value = DEFAULT_COUNTRY)]
    pub country: String,

    /// API key; overrides the key baked in at build time.
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL; overrides the one baked in at build time.
    #[arg(long, env = "NEWS_BASE_URL")]
    pub base_url: Option<String>,

    /// Print the raw JSON response to stdout and exit.
    #[arg(long)]
    pub raw: bool,

    /// Write logs to this file (the TUI logs nowhere otherwise).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Fully-resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub country: String,
    pub api_key: String,
    pub base_url: String,
    pub raw: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Resolve settings from parsed arguments and build-time defaults.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        Self::resolve(cli, BUILD_API_KEY, BUILD_BASE_URL)
    }

    fn resolve(cli: Cli, build_key: Option<&str>, build_base: Option<&str>) -> Result<Self> {
        let country = normalize_country(&cli.country)?;

        let api_key = cli
            .api_key
            .or_else(|| build_key.map(String::from))
            .filter(|k| !k.trim().is_empty())
            .context("no API key configured: pass --api-key or set NEWS_API_KEY")?;

        let base_url = cli
            .base_url
            .or_else(|| build_base.map(String::from))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).with_context(|| format!("invalid base URL {base_url:?}"))?;

        Ok(Self {
            country,
            api_key,
            base_url,
            raw: cli.raw,
            log_file: cli.log_file,
        })
    }
}

/// Validate an ISO 3166-1 alpha-2 code and lower-case it.
fn normalize_country(code: &str) -> Result<String> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("country must be a two-letter code, got {code:?}");
    }
    Ok(code.to_ascii_lowercase())
}
