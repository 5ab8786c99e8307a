use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Фильтр строится только из уровня, выбранного в `Settings`.
/// Логи пишутся в stderr: stdout занят выводом страниц.
pub(crate) fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
