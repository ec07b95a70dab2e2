//! Subscriber construction and installation.

use tracing::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    fmt::layer,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::{errors::LoggingError, types::LoggerConfig};

/// Builds the env filter, INFO unless overridden through `RUST_LOG`.
fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
}

/// Initializes the global subscriber with the provided config.
///
/// Fails if the log directory cannot be used or a global subscriber was
/// already installed. Nothing is installed on failure.
pub fn init(config: LoggerConfig) -> Result<(), LoggingError> {
    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(env_filter())
            .boxed()
    } else {
        layer()
            .compact()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(env_filter())
            .boxed()
    };

    let file_layer = match &config.file_logging_config {
        Some(file_config) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(file_config.rotation.clone())
                .filename_prefix(&file_config.file_name_prefix)
                .build(&file_config.directory)?;

            let layer = if file_config.json_format {
                layer()
                    .json()
                    .with_writer(file_appender)
                    .with_ansi(false) // No color codes in files
                    .with_filter(env_filter())
                    .boxed()
            } else {
                layer()
                    .compact()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_filter(env_filter())
                    .boxed()
            };
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()?;

    info!(service_name = %config.service_name, "logging initialized");
    Ok(())
}
