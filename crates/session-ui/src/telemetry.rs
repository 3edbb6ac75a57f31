//! Logging setup.
//!
//! `RUST_LOG` wins over the configured level. Output goes to the log file
//! when one is set, otherwise to stderr if console output is enabled.
//! Terminal front-ends disable console output so log lines never land on
//! the drawn screen.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;
use crate::error::TelemetryError;

fn build_filter(config: &LogConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Filter(e.to_string()))
}

/// Pick the log sink. `None` means logging is silenced.
fn make_writer(config: &LogConfig) -> Result<Option<BoxMakeWriter>, TelemetryError> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        return Ok(Some(BoxMakeWriter::new(Mutex::new(file))));
    }

    if config.console_output {
        return Ok(Some(BoxMakeWriter::new(std::io::stderr)));
    }

    Ok(None)
}

/// Install the global tracing subscriber. Call once at startup.
pub fn init_logging(config: &LogConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;
    let install = |e: tracing_subscriber::util::TryInitError| TelemetryError::Install(e.to_string());

    let Some(writer) = make_writer(config)? else {
        return tracing_subscriber::registry()
            .with(env_filter)
            .try_init()
            .map_err(install);
    };

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(writer);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(install)?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_ansi(config.log_file.is_none())
            .with_writer(writer);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(install)?;
    }

    tracing::debug!(
        log_level = %config.log_level,
        json_logs = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
