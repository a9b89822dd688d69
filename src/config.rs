//! Runtime settings
//!
//! Layered: built-in defaults, then an optional TOML file, then `WORDLE_*`
//! environment variables. Command-line flags are applied last by the binary.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "wordle.toml";

pub const DEFAULT_API_BASE_URL: &str = "https://words.dev-apis.com";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where target words and dictionary checks come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The word-of-the-day and validate-word web services
    #[default]
    Remote,
    /// Word lists compiled into the binary
    Offline,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "offline" => Ok(Self::Offline),
            other => Err(format!("unknown word source '{other}' (expected remote or offline)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub source: SourceKind,
    /// Per-request timeout for the HTTP services
    pub request_timeout: Duration,
    /// Log destination; `None` means stderr (or nowhere in the TUI)
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            source: SourceKind::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    api_base_url: Option<String>,
    source: Option<SourceKind>,
    request_timeout_secs: Option<u64>,
    log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path` (or `wordle.toml` if present) and the environment
    ///
    /// # Errors
    /// Returns an error if an explicitly given file cannot be read, or if the
    /// file or an environment variable holds a malformed value.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = Self::default();

        match path {
            Some(path) => settings.apply_file(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    settings.apply_file(fallback)?;
                }
            }
        }

        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    /// Defaults overlaid with a TOML document
    ///
    /// # Errors
    /// Returns an error if the document is not valid settings TOML.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut settings = Self::default();
        settings.apply_toml(raw)?;
        Ok(settings)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        self.apply_toml(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    fn apply_toml(&mut self, raw: &str) -> Result<()> {
        let file: FileSettings = toml::from_str(raw)?;

        if let Some(url) = file.api_base_url {
            self.api_base_url = url;
        }
        if let Some(source) = file.source {
            self.source = source;
        }
        if let Some(secs) = file.request_timeout_secs {
            self.request_timeout = timeout_from_secs(secs)?;
        }
        if let Some(path) = file.log_file {
            self.log_file = Some(path);
        }
        Ok(())
    }

    /// Overlay `WORDLE_*` variables read through `lookup`
    ///
    /// # Errors
    /// Returns an error if a variable is set to a malformed value.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("WORDLE_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(source) = lookup("WORDLE_SOURCE") {
            self.source = source
                .parse()
                .map_err(|e: String| anyhow::anyhow!("WORDLE_SOURCE: {e}"))?;
        }
        if let Some(secs) = lookup("WORDLE_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("WORDLE_REQUEST_TIMEOUT_SECS: not a number: {secs}"))?;
            self.request_timeout = timeout_from_secs(secs)?;
        }
        if let Some(path) = lookup("WORDLE_LOG_FILE") {
            self.log_file = Some(PathBuf::from(path));
        }
        Ok(())
    }
}

fn timeout_from_secs(secs: u64) -> Result<Duration> {
    if secs == 0 {
        bail!("request timeout must be at least one second");
    }
    Ok(Duration::from_secs(secs))
}
