//! Logging utilities.
//!
//! Two layers: a `fern` dispatch writing to a file under the platform cache
//! directory (wired through the `log` facade), and a small shared in-memory
//! buffer the demo surface can show on screen.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::LoggingConfig;

/// Install the file logger. Call once at startup, before any `log` macro.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("opening log file {}", path.display()))?)
        .apply()
        .context("installing logger")?;
    Ok(())
}

fn log_file_path() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("no platform cache directory")?;
    Ok(base.join("blockpalette").join("blockpalette.log"))
}

/// Shared in-memory logger for the on-screen event trace.
#[derive(Clone, Default)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");
        let stamped = format!("[{}] {}", Utc::now().format("%H:%M:%S%.3f"), message);
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(stamped);
        }
    }

    /// All entries, newest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => {
                let mut out = entries.clone();
                out.reverse();
                out
            }
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_come_back_newest_first() {
        let logger = Logger::new();
        logger.log("first");
        logger.log("second");
        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].ends_with("second"));
        assert!(entries[1].ends_with("first"));
    }

    #[test]
    fn test_clear_empties_the_buffer() {
        let logger = Logger::new();
        logger.log("something");
        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
