use tracing_subscriber::EnvFilter;

use crate::error::{DietError, Result};

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_level` when it is set.
pub fn init_logging(default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| DietError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| DietError::Logging(e.to_string()))
}
