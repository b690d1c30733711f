use crate::{Error, LogConfig, Result};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `tracing` subscriber for the crate's diagnostics.
///
/// `cli_verbose` raises this crate's level above the configured one.
/// A non-empty `RUST_LOG` overrides both.
pub fn init_logging(config: &LogConfig, cli_verbose: Option<u8>) -> Result<()> {
    config.validate()?;

    let log_spec = effective_log_spec(config, cli_verbose);
    let env_filter = EnvFilter::try_new(&log_spec).map_err(|e| Error::Init(e.to_string()))?;

    if config.console {
        init_console(config, env_filter)
    } else {
        init_no_logging(env_filter)
    }
}

fn init_console(config: &LogConfig, env_filter: EnvFilter) -> Result<()> {
    let fmt_layer_builder = tracing_subscriber::fmt::layer()
        .with_target(config.target)
        .with_thread_ids(config.thread_ids)
        .with_thread_names(config.thread_names);

    let fmt_layer = if config.is_json() {
        fmt_layer_builder.json().boxed()
    } else {
        fmt_layer_builder.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(())
}

/// Initialize with no output (for testing or when diagnostics are disabled).
fn init_no_logging(env_filter: EnvFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter)
        .try_init()
        .map_err(|e| Error::Init(e.to_string()))?;

    Ok(())
}

/// Determine the effective filter, considering `RUST_LOG` and CLI overrides.
fn effective_log_spec(config: &LogConfig, cli_verbose: Option<u8>) -> String {
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && !rust_log.is_empty()
    {
        return rust_log;
    }

    if let Some(verbose) = cli_verbose {
        return match verbose {
            0 => config.level.clone(),
            1 => format!("{},faultlog=debug", config.level),
            2 => format!("{},faultlog=trace", config.level),
            _ => "trace".to_string(),
        };
    }

    format!("{},faultlog={}", config.level, config.level)
}
