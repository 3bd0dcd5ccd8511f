pub mod pretty_formatter;

use error_stack::ResultExt;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::adapters::config::logging_config::LoggingConfig;
use pretty_formatter::PrettyFormatter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to create log file '{0}'")]
    LogFile(String),
    #[error("Failed to install the tracing subscriber")]
    Install,
}

/// Logs the crate and request spans to stderr and to the configured log file.
pub fn setup_tracing(config: &LoggingConfig) -> error_stack::Result<(), LoggingError> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(std::io::stderr);

    let log_file = std::fs::File::create(&*config.file)
        .change_context_lazy(|| LoggingError::LogFile(config.file.to_string()))?;
    let log_file_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(false))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("sheets_proxy", tracing::Level::TRACE)
                .with_target("tower_http", tracing::Level::DEBUG),
        )
        .with(log_file_layer)
        .with(stderr_layer)
        .try_init()
        .change_context(LoggingError::Install)
}

pub fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
