mod config;
mod domain;
mod logging;
mod navigation;
mod store;
mod ui;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{AppConfig, resolve_config_path, state_dir};
use crate::domain::format_time;
use crate::logging::init_logging;
use crate::ui::run_dashboard;

#[derive(Debug, Parser)]
#[command(name = "procos", about = "Countdown tasks and a to-do list in the terminal")]
struct Cli {
	#[arg(long)]
	config: Option<PathBuf>,
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
	Dashboard,
	InitConfig,
	ShowConfig,
	FormatTime {
		seconds: u64,
		#[arg(long)]
		no_seconds: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<(), Box<dyn Error>> {
	let cli = Cli::parse();

	let config_path = resolve_config_path(cli.config);
	let config = AppConfig::load(&config_path)?;
	let log_path = init_logging(&state_dir(), &config.log_level);
	let config = config.sanitized();
	info!(config = %config_path.display(), log = ?log_path, "procos starting");

	match cli.command.unwrap_or(Command::Dashboard) {
		Command::Dashboard => {
			run_dashboard(&config)?;
		}
		Command::InitConfig => {
			if config_path.exists() {
				println!("config already exists at {}", config_path.display());
			} else {
				config.save(&config_path)?;
				println!("wrote default config to {}", config_path.display());
			}
		}
		Command::ShowConfig => {
			println!("# {}", config_path.display());
			print!("{}", config.to_toml()?);
			if let Some(path) = log_path {
				println!("# log file: {}", path.display());
			}
		}
		Command::FormatTime { seconds, no_seconds } => {
			println!("{}", format_time(seconds, !no_seconds));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::{Cli, Command};

	#[test]
	fn parses_format_time_subcommand() {
		let cli = Cli::try_parse_from(["procos", "format-time", "90", "--no-seconds"])
			.expect("format-time should parse");
		assert!(matches!(
			cli.command,
			Some(Command::FormatTime {
				seconds: 90,
				no_seconds: true
			})
		));
	}

	#[test]
	fn no_subcommand_defaults_to_dashboard() {
		let cli = Cli::try_parse_from(["procos"]).expect("bare invocation should parse");
		assert!(cli.command.is_none());
	}
}
