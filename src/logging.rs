use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "procos.log";
const LOG_ENV: &str = "PROCOS_LOG";

/// Installs the global subscriber. The terminal belongs to the dashboard, so
/// output goes to `<state_dir>/procos.log`, or nowhere if that cannot be opened.
pub fn init_logging(state_dir: &Path, default_directive: &str) -> Option<PathBuf> {
	let filter = EnvFilter::try_from_env(LOG_ENV)
		.or_else(|_| EnvFilter::try_new(default_directive))
		.unwrap_or_else(|_| EnvFilter::new("info"));

	let path = state_dir.join(LOG_FILE);
	let file = fs::create_dir_all(state_dir).and_then(|_| {
		OpenOptions::new()
			.create(true)
			.append(true)
			.open(&path)
	});

	match file {
		Ok(file) => {
			let _ = tracing_subscriber::fmt()
				.with_env_filter(filter)
				.with_ansi(false)
				.with_writer(file)
				.try_init();
			Some(path)
		}
		Err(_) => {
			let _ = tracing_subscriber::fmt()
				.with_env_filter(filter)
				.with_writer(io::sink)
				.try_init();
			None
		}
	}
}
