use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{DEFAULT_MINUTES, PaletteColor};

const APP_DIR: &str = "procos";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_TICK_MILLIS: u64 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("io error on {path}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},
	#[error("failed to parse config {path}: {source}")]
	Decode {
		path: PathBuf,
		source: toml::de::Error,
	},
	#[error("failed to encode config: {0}")]
	Encode(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Milliseconds between clock ticks.
	pub tick_millis: u64,
	/// Minutes used when a task is committed without a duration.
	pub default_minutes: u64,
	pub default_color: PaletteColor,
	/// Tracing filter directive, overridden by `PROCOS_LOG`.
	pub log_level: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			tick_millis: DEFAULT_TICK_MILLIS,
			default_minutes: DEFAULT_MINUTES,
			default_color: PaletteColor::default(),
			log_level: "info".to_string(),
		}
	}
}

impl AppConfig {
	pub fn tick_interval(&self) -> Duration {
		Duration::from_millis(self.tick_millis)
	}

	/// Reads the config at `path`; a missing file yields defaults.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let raw = match fs::read_to_string(path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
			Err(source) => {
				return Err(ConfigError::Io {
					path: path.to_path_buf(),
					source,
				});
			}
		};

		toml::from_str(&raw).map_err(|source| ConfigError::Decode {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
		if let Some(parent) = path.parent() {
			if !parent.as_os_str().is_empty() {
				fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
					path: parent.to_path_buf(),
					source,
				})?;
			}
		}

		let raw = self.to_toml()?;
		fs::write(path, raw).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn to_toml(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string_pretty(self)?)
	}

	/// Replaces values the dashboard cannot run with.
	pub fn sanitized(mut self) -> Self {
		if self.tick_millis == 0 {
			warn!(fallback = DEFAULT_TICK_MILLIS, "tick_millis must be positive, using default");
			self.tick_millis = DEFAULT_TICK_MILLIS;
		}
		self
	}
}

pub fn resolve_config_path(cli_path: Option<PathBuf>) -> PathBuf {
	if let Some(path) = cli_path {
		return path;
	}

	if let Some(path) = non_empty_path(env::var_os("PROCOS_CONFIG")) {
		return path;
	}

	if let Some(path) = non_empty_path(env::var_os("XDG_CONFIG_HOME")) {
		return path.join(APP_DIR).join(CONFIG_FILE);
	}

	if let Some(path) = non_empty_path(env::var_os("HOME")) {
		return path
			.join(".config")
			.join(APP_DIR)
			.join(CONFIG_FILE);
	}

	PathBuf::from(format!(".{APP_DIR}")).join(CONFIG_FILE)
}

pub fn state_dir() -> PathBuf {
	if let Some(path) = non_empty_path(env::var_os("PROCOS_STATE_DIR")) {
		return path;
	}

	#[cfg(target_os = "windows")]
	{
		if let Some(path) = non_empty_path(env::var_os("LOCALAPPDATA")) {
			return path.join(APP_DIR);
		}
	}

	if let Some(path) = non_empty_path(env::var_os("XDG_STATE_HOME")) {
		return path.join(APP_DIR);
	}

	if let Some(path) = non_empty_path(env::var_os("HOME")) {
		return path
			.join(".local")
			.join("state")
			.join(APP_DIR);
	}

	PathBuf::from(format!(".{APP_DIR}"))
}

/// An unset and an empty variable both mean "not configured".
fn non_empty_path(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
	use std::ffi::OsString;
	use std::fs;
	use std::path::PathBuf;

	use crate::domain::PaletteColor;

	use super::{AppConfig, ConfigError, non_empty_path, resolve_config_path};

	fn temp_file(name: &str) -> PathBuf {
		let mut path = std::env::temp_dir();
		path.push(format!("{}_{}", name, std::process::id()));
		path
	}

	#[test]
	fn missing_file_yields_defaults() {
		let path = temp_file("procos_config_missing.toml");
		let config = AppConfig::load(&path).expect("load should succeed");
		assert_eq!(config, AppConfig::default());
		assert_eq!(config.tick_interval().as_millis(), 1000);
	}

	#[test]
	fn partial_file_keeps_other_defaults() {
		let path = temp_file("procos_config_partial.toml");
		fs::write(&path, "default_minutes = 25\ndefault_color = \"purple\"\n").expect("write should succeed");

		let config = AppConfig::load(&path).expect("load should succeed");
		assert_eq!(config.default_minutes, 25);
		assert_eq!(config.default_color, PaletteColor::Purple);
		assert_eq!(config.tick_millis, 1000);
		assert_eq!(config.log_level, "info");
		let _ = fs::remove_file(path);
	}

	#[test]
	fn zero_tick_falls_back() {
		let path = temp_file("procos_config_zero_tick.toml");
		fs::write(&path, "tick_millis = 0\n").expect("write should succeed");
		let config = AppConfig::load(&path).expect("load should succeed");
		assert_eq!(config.tick_millis, 0);
		assert_eq!(config.sanitized().tick_millis, 1000);
		let _ = fs::remove_file(path);
	}

	#[test]
	fn rejects_unknown_color() {
		let path = temp_file("procos_config_bad_color.toml");
		fs::write(&path, "default_color = \"teal\"\n").expect("write should succeed");
		let result = AppConfig::load(&path);
		assert!(matches!(result, Err(ConfigError::Decode { .. })));
		let _ = fs::remove_file(path);
	}

	#[test]
	fn saves_and_reloads() {
		let path = temp_file("procos_config_saved.toml");
		let config = AppConfig {
			tick_millis: 250,
			default_minutes: 15,
			default_color: PaletteColor::Brown,
			log_level: "debug".to_string(),
		};
		config.save(&path).expect("save should succeed");
		let loaded = AppConfig::load(&path).expect("load should succeed");
		assert_eq!(loaded, config);
		let _ = fs::remove_file(path);
	}

	#[test]
	fn explicit_path_wins() {
		let explicit = PathBuf::from("/tmp/procos-explicit.toml");
		assert_eq!(resolve_config_path(Some(explicit.clone())), explicit);
	}

	#[test]
	fn empty_env_value_counts_as_unset() {
		assert_eq!(non_empty_path(None), None);
		assert_eq!(non_empty_path(Some(OsString::new())), None);
		assert_eq!(
			non_empty_path(Some(OsString::from("/xdg/config"))),
			Some(PathBuf::from("/xdg/config"))
		);
	}
}
