//! Tracing subscriber setup.

use std::env::{self, VarError};

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the result.
///
/// # Errors
///
/// Returns an error if the filter directives are invalid or a subscriber is
/// already installed.
pub fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let subscriber = subscriber(cfg.format, filter(cfg)?, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// `RUST_LOG` when set, the configured level otherwise. A malformed
/// `RUST_LOG` is an error rather than a silent fallback.
fn filter(cfg: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).map_err(|e| {
            anyhow::anyhow!("invalid {}='{directives}': {e}", EnvFilter::DEFAULT_ENV)
        }),
        Err(VarError::NotPresent) => EnvFilter::try_new(&cfg.level)
            .map_err(|e| anyhow::anyhow!("invalid log level '{}': {e}", cfg.level)),
        Err(e @ VarError::NotUnicode(_)) => {
            Err(anyhow::anyhow!("invalid {}: {e}", EnvFilter::DEFAULT_ENV))
        }
    }
}

fn subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    match format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}
