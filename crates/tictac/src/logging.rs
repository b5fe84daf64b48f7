//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Standard error, for line-oriented front-ends.
    Stderr,
    /// A file, for front-ends that own the terminal or a window.
    File(PathBuf),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise stderr logs at `warn` and file logs
/// at `info`. A second call is a no-op.
pub fn init(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter_or("warn"))
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::File(path) => {
            let log_file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter_or("info"))
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
