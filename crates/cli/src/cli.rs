use std::path::PathBuf;

use clap::{Parser, Subcommand};
use twconf_config::Format;

#[derive(Parser, Debug)]
#[command(name = "twconf")]
#[command(about = "Inspect and lint the utility-CSS build configuration")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Load the config and report lint findings
	Check {
		/// Config file (defaults to tailwind.config.json in the current directory)
		path: Option<PathBuf>,

		/// Exit with failure when any warning is reported
		#[arg(long)]
		deny_warnings: bool,
	},
	/// Print the normalized config
	Print {
		/// Config file (defaults to tailwind.config.json in the current directory)
		path: Option<PathBuf>,

		/// Output encoding (json or toml)
		#[arg(long, short, default_value = "json")]
		format: Format,
	},
	/// List flattened color tokens
	Colors {
		/// Config file (defaults to tailwind.config.json in the current directory)
		path: Option<PathBuf>,
	},
}
