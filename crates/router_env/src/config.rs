//!
//! Logger-specific config.
//!

use std::path::PathBuf;

use serde::Deserialize;

use crate::env;

/// Prefix of environment variables that override file configuration.
pub const ENV_PREFIX: &str = "CLIENT_SDK";

/// Config settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Logging to a console.
    pub log: Log,
}

/// Log config settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Log {
    /// What you see in your terminal.
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
    /// Directive which sets the log level for one or more crates/modules.
    /// Takes precedence over `level` when present.
    pub filter: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::Default,
            filter: None,
        }
    }
}

/// Describes the level of verbosity of a span or event.
#[derive(Debug, Clone, Copy)]
pub struct LogLevel(pub(super) tracing::Level);

impl LogLevel {
    /// Returns the most verbose [`tracing::Level`]
    pub fn into_level(self) -> tracing::Level {
        self.0
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self(tracing::Level::INFO)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::str::FromStr as _;

        let s = String::deserialize(deserializer)?;
        tracing::Level::from_str(&s)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}

/// Telemetry / tracing.
#[derive(Default, Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default pretty log format
    #[default]
    Default,
    /// JSON based structured logging
    Json,
}

impl Config {
    /// Default constructor.
    pub fn new() -> Result<Self, ::config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Constructor expecting config path set explicitly.
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, ::config::ConfigError> {
        let environment = env::which();
        let config_path = Self::config_path(environment, explicit_config_path);

        let config = Self::builder(environment)?
            .add_source(::config::File::from(config_path).required(false))
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Builder with the built-in defaults applied.
    pub fn builder(
        environment: env::Env,
    ) -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ::config::ConfigError> {
        let default_level = match environment {
            env::Env::Development => "DEBUG",
            env::Env::Sandbox | env::Env::Production => "INFO",
        };

        ::config::Config::builder()
            .set_default("log.level", default_level)?
            .set_default("log.format", "default")
    }

    /// Config path.
    pub fn config_path(environment: env::Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            config_path.push(env::workspace_path());
            config_path.push("config");
            config_path.push(format!("{}.toml", environment.config_file_stem()));
        }
        config_path
    }
}
