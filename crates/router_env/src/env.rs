//!
//! Current environment related stuff.
//!

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Parent dir where Cargo.toml is stored
pub const CARGO_MANIFEST_DIR: &str = "CARGO_MANIFEST_DIR";
/// Env variable that sets Development/Production env
pub const RUN_ENV: &str = "RUN_ENV";

///
/// Current environment.
///

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Env {
    /// Development environment.
    #[default]
    Development,
    /// Sandbox environment.
    Sandbox,
    /// Production environment.
    Production,
}

impl Env {
    /// Name of the configuration file for this environment, without extension.
    pub fn config_file_stem(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

/// Name of current environment. Either "Development", "Sandbox" or "Production".
pub fn which() -> Env {
    #[cfg(debug_assertions)]
    let default_env = Env::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Env::Production;

    std::env::var(RUN_ENV).map_or_else(|_| default_env, |v| v.parse().unwrap_or(default_env))
}

///
/// Base path to look for the `config/` directory.
///
/// When run through cargo this is the crate directory, so the same files are found whether the
/// binary or a test is started from the workspace root or from the crate itself. Outside cargo
/// the current working directory is used.
///
pub fn workspace_path() -> PathBuf {
    std::env::var(CARGO_MANIFEST_DIR).map_or_else(|_| PathBuf::from("."), PathBuf::from)
}
