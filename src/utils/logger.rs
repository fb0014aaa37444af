use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::Validate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger(verbose: bool) -> Result<()> {
    let config = LoggingConfig {
        level: if verbose { "debug" } else { "info" }.to_string(),
        format: LogFormat::Compact,
    };
    init_from_config(&config)
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `config.level`.
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lostandfound={}", config.level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    };

    installed.map_err(|e| CalcError::ConfigError {
        field: "logging".to_string(),
        message: format!("failed to install subscriber: {}", e),
    })
}
