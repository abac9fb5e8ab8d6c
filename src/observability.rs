use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize logging.
///
/// Builds an `EnvFilter` from `RUST_LOG` when set, the configured level
/// otherwise, and installs either a pretty console layer or a JSON layer
/// depending on the configured format.
pub fn init_observability(log_level: &str, log_format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(env_filter))
            .try_init()?;
    }

    tracing::debug!(
        log.level = log_level,
        log.format = log_format,
        "observability initialized"
    );

    Ok(())
}
