//! `twconf`: inspect and lint the utility-CSS build configuration.

mod cli;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use twconf_config::{ConfigDescriptor, find_config, load, load_report};

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::Check { path, deny_warnings } => check(&resolve_path(path)?, deny_warnings, &mut std::io::stdout().lock()),
		Command::Print { path, format } => {
			let descriptor = load_descriptor(&resolve_path(path)?)?;
			print!("{}", descriptor.to_string_pretty(format)?);
			Ok(ExitCode::SUCCESS)
		}
		Command::Colors { path } => {
			let descriptor = load_descriptor(&resolve_path(path)?)?;
			for token in descriptor.theme.extend.color_tokens() {
				println!("{} {}", token.token(), token.value);
			}
			Ok(ExitCode::SUCCESS)
		}
	}
}

fn check(path: &Path, deny_warnings: bool, out: &mut impl Write) -> anyhow::Result<ExitCode> {
	let report = load_report(path);
	if let Some(error) = report.error {
		return Err(error).with_context(|| format!("checking {}", path.display()));
	}

	for warning in &report.warnings {
		writeln!(out, "{}: warning: {warning}", path.display())?;
	}

	if report.warnings.is_empty() {
		writeln!(out, "{}: ok", path.display())?;
		Ok(ExitCode::SUCCESS)
	} else if deny_warnings {
		writeln!(out, "{}: {} warning(s), failing", path.display(), report.warnings.len())?;
		Ok(ExitCode::FAILURE)
	} else {
		Ok(ExitCode::SUCCESS)
	}
}

fn resolve_path(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
	match path {
		Some(path) => Ok(path),
		None => {
			let cwd = std::env::current_dir().context("reading current directory")?;
			Ok(find_config(cwd)?)
		}
	}
}

fn load_descriptor(path: &Path) -> anyhow::Result<ConfigDescriptor> {
	let parsed = load(path).with_context(|| format!("loading {}", path.display()))?;
	for warning in &parsed.warnings {
		tracing::warn!(path = %path.display(), "{warning}");
	}
	Ok(parsed.descriptor)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("twconf=debug,twconf_config=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

#[cfg(test)]
mod tests {
	use tempfile::TempDir;

	use super::*;

	fn write_config(dir: &TempDir, content: &str) -> PathBuf {
		let path = dir.path().join("tailwind.config.json");
		std::fs::write(&path, content).expect("file should be writable");
		path
	}

	fn run_check(path: &Path, deny_warnings: bool) -> (ExitCode, String) {
		let mut out = Vec::new();
		let code = check(path, deny_warnings, &mut out).expect("check runs");
		(code, String::from_utf8(out).expect("output is utf-8"))
	}

	#[test]
	fn check_passes_clean_config() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let path = write_config(&dir, r#"{ "content": ["./templates/**/*.html"], "plugins": [] }"#);
		let (code, output) = run_check(&path, true);
		assert_eq!(code, ExitCode::SUCCESS);
		assert!(output.ends_with(": ok\n"), "{output}");
	}

	#[test]
	fn check_denies_warnings_on_request() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let path = write_config(&dir, r#"{ "content": [] }"#);
		assert_eq!(run_check(&path, false).0, ExitCode::SUCCESS);
		assert_eq!(run_check(&path, true).0, ExitCode::FAILURE);
	}

	#[test]
	fn check_reports_each_warning_once() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let path = write_config(&dir, r#"{ "content": [], "darkMode": "class" }"#);
		let (_, output) = run_check(&path, false);
		assert_eq!(output.matches("unknown key 'darkMode'").count(), 1, "{output}");
		assert_eq!(output.matches("'content' is empty").count(), 1, "{output}");
		assert_eq!(output.lines().count(), 2, "{output}");
	}

	#[test]
	fn check_fails_on_parse_error() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let path = write_config(&dir, r#"{ "content": ["#);
		assert!(check(&path, false, &mut Vec::new()).is_err());
	}
}
