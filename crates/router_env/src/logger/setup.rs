//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config;

/// Keeps the non-blocking log writer alive; logs are flushed when it is dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
    installed: bool,
}

impl TelemetryGuard {
    /// Whether this call installed the global subscriber. `false` when one was already set.
    pub fn is_installed(&self) -> bool {
        self.installed
    }
}

fn env_filter(conf: &config::Log) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(conf.level.into_level().into());

    // `RUST_LOG` overrides the config settings
    if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        return builder.from_env_lossy();
    }

    match &conf.filter {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.parse_lossy(""),
    }
}

///
/// Setup logging sub-system.
///
/// Installs a global subscriber writing to stdout in the configured format. Calling it again
/// after a subscriber is installed leaves the existing one in place.
///
pub fn setup(conf: &config::Log, service_name: &str) -> TelemetryGuard {
    let mut guards = Vec::new();

    let (console_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    guards.push(guard);

    let subscriber = tracing_subscriber::registry().with(env_filter(conf));

    let installed = match conf.format {
        config::LogFormat::Default => subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(console_writer),
            )
            .try_init(),
        config::LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(console_writer),
            )
            .try_init(),
    }
    .is_ok();

    if installed {
        tracing::debug!(service = service_name, "logger installed");
    }

    TelemetryGuard {
        _log_guards: guards,
        installed,
    }
}
