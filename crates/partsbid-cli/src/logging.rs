// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::config::{APP_NAME, Config};
use anyhow::{Context, Result, anyhow};
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "PARTSBID_LOG";

/// Installs the file subscriber. The returned guard flushes the writer on
/// drop, so keep it alive until the terminal is restored.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    if !config.logging_enabled() {
        return Ok(None);
    }

    let filter = resolve_filter(std::env::var(LOG_ENV).ok().as_deref(), config.log_level())?;
    let dir = config.log_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, format!("{APP_NAME}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|error| anyhow!("install log subscriber: {error}"))?;

    tracing::info!(dir = %dir.display(), "logging to file");
    Ok(Some(guard))
}

// PARTSBID_LOG wins over the configured level.
fn resolve_filter(env_value: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    match env_value.map(str::trim).filter(|value| !value.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("{LOG_ENV}={directives:?} is not a valid log filter")),
        None => EnvFilter::try_new(config_level)
            .with_context(|| format!("logging.level {config_level:?} is not a valid log filter")),
    }
}

pub fn log_file_hint(config: &Config) -> Option<PathBuf> {
    if !config.logging_enabled() {
        return None;
    }
    config.log_dir().ok()
}

#[cfg(test)]
mod tests {
    use super::resolve_filter;
    use anyhow::Result;

    #[test]
    fn env_filter_overrides_config_level() -> Result<()> {
        let filter = resolve_filter(Some("partsbid_api=trace"), "info")?;
        assert_eq!(filter.to_string(), "partsbid_api=trace");
        Ok(())
    }

    #[test]
    fn blank_env_value_falls_back_to_config_level() -> Result<()> {
        let filter = resolve_filter(Some("  "), "debug")?;
        assert_eq!(filter.to_string(), "debug");
        let filter = resolve_filter(None, "warn")?;
        assert_eq!(filter.to_string(), "warn");
        Ok(())
    }

    #[test]
    fn malformed_env_value_names_the_variable() {
        let error = resolve_filter(Some("partsbid=verbose"), "info")
            .expect_err("bad directive should fail");
        assert!(error.to_string().contains("PARTSBID_LOG"));
    }
}
