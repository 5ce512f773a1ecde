//! Log setup for the binary.
//!
//! The terminal belongs to the panel while it runs, so records are appended
//! to a file instead of stderr. `RUST_LOG` still wins over the configured
//! level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::app_dirs;

pub const DEFAULT_LEVEL: &str = "warn";
pub const LOG_FILE_NAME: &str = "prefpanel.log";

/// Level names accepted by `logging.level`.
pub const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// `<data dir>/prefpanel.log`.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Returns `true` when `level` names a known filter level.
pub fn is_known_level(level: &str) -> bool {
	LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
}

/// Install the global logger, appending to `file`.
pub fn initialize(level: &str, file: &Path) -> Result<()> {
	if let Some(parent) = file.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let sink = OpenOptions::new()
		.create(true)
		.append(true)
		.open(file)
		.with_context(|| format!("failed to open log file {}", file.display()))?;

	env_logger::Builder::from_env(Env::default().default_filter_or(level))
		.target(Target::Pipe(Box::new(sink)))
		.try_init()
		.context("logger already initialised")?;
	Ok(())
}
