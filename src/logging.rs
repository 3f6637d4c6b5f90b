use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::trace;
use tracing_subscriber::{prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "hangterm=info";

/// Send logs to `path`. `RUST_LOG` overrides the default filter.
pub fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("couldn't create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("invalid log filter")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .try_init()
        .context("logging was already initialised")?;

    trace!("finished");
    Ok(())
}
