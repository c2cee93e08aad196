//! Layered settings for the `rds` binary.
//!
//! Priority, lowest to highest:
//! 1. built-in defaults
//! 2. a TOML file: `--config`, else `RDS_COMMANDS_CONFIG`, else
//!    `./rds-commands.toml` or `./.rds-commands.toml`
//! 3. `RDS_COMMANDS_*` environment variables
//! 4. command-line flags, applied by the caller

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fmt, fs, str};

/// Prefix of every environment override.
pub const ENV_PREFIX: &str = "RDS_COMMANDS_";

const DEFAULT_FILES: [&str; 2] = ["rds-commands.toml", ".rds-commands.toml"];

/// Source of environment overrides, so tests do not touch the process environment.
pub trait EnvSource {
    /// Look up `key` with [`ENV_PREFIX`] prepended.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        env::var(format!("{ENV_PREFIX}{key}")).ok()
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unknown log format `{other}`, expected `text` or `json`")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Settings shared by every command.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// AWS region; the SDK's own resolution applies when unset.
    pub region: Option<String>,
    /// Named profile from the shared AWS config files.
    pub profile: Option<String>,
    /// Endpoint override, for example a local RDS emulator.
    pub endpoint_url: Option<String>,
    /// `tracing` filter directive, such as `warn` or `rds_commands=debug`.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::default(),
            pretty: false,
        }
    }
}

impl Settings {
    /// Load defaults, the config file and environment overrides.
    ///
    /// The result is not validated; command-line flags may still replace a bad
    /// value, so call [`Settings::validate`] once every layer is applied.
    pub fn load(path: Option<&Path>, env: &impl EnvSource) -> Result<Self> {
        Self::load_from(path, env, Path::new("."))
    }

    pub(crate) fn load_from(
        path: Option<&Path>,
        env: &impl EnvSource,
        dir: &Path,
    ) -> Result<Self> {
        let mut settings = match find_file(path, env, dir) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env_overrides(env)?;
        Ok(settings)
    }

    /// Parse a TOML settings file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply `RDS_COMMANDS_*` overrides.
    pub fn apply_env_overrides(&mut self, env: &impl EnvSource) -> Result<()> {
        if let Some(region) = get_env_string(env, "REGION") {
            self.region = Some(region);
        }
        if let Some(profile) = get_env_string(env, "PROFILE") {
            self.profile = Some(profile);
        }
        if let Some(endpoint_url) = get_env_string(env, "ENDPOINT_URL") {
            self.endpoint_url = Some(endpoint_url);
        }
        if let Some(log_level) = get_env_string(env, "LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Some(log_format) = get_env_string(env, "LOG_FORMAT") {
            self.log_format = log_format
                .parse()
                .with_context(|| format!("Failed to parse {ENV_PREFIX}LOG_FORMAT"))?;
        }
        if let Some(pretty) = get_env_string(env, "PRETTY") {
            self.pretty = pretty.parse().map_err(|e| {
                anyhow!("Failed to parse {ENV_PREFIX}PRETTY (expected bool): {e}")
            })?;
        }
        Ok(())
    }

    /// Reject settings the binary cannot start with.
    pub fn validate(&self) -> Result<()> {
        tracing_subscriber::EnvFilter::try_new(&self.log_level)
            .map_err(|e| anyhow!("invalid log_level `{}`: {e}", self.log_level))?;
        if let Some(endpoint_url) = &self.endpoint_url {
            if endpoint_url.trim().is_empty() {
                bail!("endpoint_url must not be empty");
            }
            if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
                bail!("endpoint_url `{endpoint_url}` must start with http:// or https://");
            }
        }
        Ok(())
    }
}

fn get_env_string(env: &impl EnvSource, key: &str) -> Option<String> {
    env.get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn find_file(path: Option<&Path>, env: &impl EnvSource, dir: &Path) -> Option<PathBuf> {
    if let Some(path) = path {
        return Some(path.to_path_buf());
    }
    if let Some(path) = get_env_string(env, "CONFIG") {
        return Some(PathBuf::from(path));
    }
    DEFAULT_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Resolve the AWS SDK configuration with the region, profile and endpoint overrides.
pub async fn load_sdk_config(settings: &Settings) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &settings.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(profile) = &settings.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint_url) = &settings.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    loader.load().await
}
