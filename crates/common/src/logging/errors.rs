use thiserror::Error;
use tracing_appender::rolling::InitError as AppenderInitError;
use tracing_subscriber::util::TryInitError;

#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory or file could not be created or opened.
    #[error("file logging: {0}")]
    FileAppender(#[from] AppenderInitError),

    /// A global subscriber was already installed.
    #[error("subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}
