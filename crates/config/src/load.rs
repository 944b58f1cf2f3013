//! Descriptor file loading.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigWarning, Result};
use crate::format::{CONFIG_FILE_NAMES, Format};
use crate::{ConfigDescriptor, ParsedConfig, parse_str};

/// Outcome of loading and linting one descriptor file.
#[derive(Debug)]
pub struct LoadReport {
	/// File that was read.
	pub path: PathBuf,
	/// The descriptor, if the file read and parsed.
	pub descriptor: Option<ConfigDescriptor>,
	/// Parse-time and lint warnings, in that order.
	pub warnings: Vec<ConfigWarning>,
	/// Read or parse failure.
	pub error: Option<ConfigError>,
}

impl LoadReport {
	/// Loaded with no warnings.
	pub fn is_clean(&self) -> bool {
		self.error.is_none() && self.warnings.is_empty()
	}
}

/// Locate the descriptor in `dir`.
///
/// Tries [`CONFIG_FILE_NAMES`] in order; JSON wins over TOML.
pub fn find_config(dir: impl AsRef<Path>) -> Result<PathBuf> {
	let dir = dir.as_ref();
	CONFIG_FILE_NAMES
		.iter()
		.map(|name| dir.join(name))
		.find(|path| path.is_file())
		.ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))
}

/// Read and parse a descriptor file. The encoding follows the extension.
pub fn load(path: impl AsRef<Path>) -> Result<ParsedConfig> {
	let path = path.as_ref();
	let format = Format::from_path(path)?;
	let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
		path: path.to_path_buf(),
		error: e,
	})?;

	let parsed = parse_str(&content, format)?;
	tracing::info!(
		path = %path.display(),
		%format,
		globs = parsed.descriptor.content.len(),
		colors = parsed.descriptor.theme.extend.colors.len(),
		"loaded tailwind config",
	);
	Ok(parsed)
}

/// Load then lint, collecting every finding instead of failing.
///
/// Findings are returned for the caller to present and only logged at debug.
pub fn load_report(path: impl AsRef<Path>) -> LoadReport {
	let path = path.as_ref().to_path_buf();
	match load(&path) {
		Ok(ParsedConfig { descriptor, mut warnings }) => {
			warnings.extend(descriptor.lint());
			for warning in &warnings {
				tracing::debug!(path = %path.display(), "{warning}");
			}
			LoadReport {
				path,
				descriptor: Some(descriptor),
				warnings,
				error: None,
			}
		}
		Err(error) => {
			tracing::debug!(path = %path.display(), %error, "failed to load tailwind config");
			LoadReport {
				path,
				descriptor: None,
				warnings: Vec::new(),
				error: Some(error),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use tempfile::TempDir;

	use super::*;

	fn write_file(path: &Path, content: &str) {
		std::fs::write(path, content).expect("file should be writable");
	}

	#[test]
	fn find_prefers_json_over_toml() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		write_file(&dir.path().join("tailwind.config.toml"), "content = []");
		assert_eq!(find_config(dir.path()).expect("toml found"), dir.path().join("tailwind.config.toml"));

		write_file(&dir.path().join("tailwind.config.json"), "{}");
		assert_eq!(find_config(dir.path()).expect("json found"), dir.path().join("tailwind.config.json"));
	}

	#[test]
	fn find_reports_missing_config() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let err = find_config(dir.path()).expect_err("empty dir");
		assert!(matches!(err, ConfigError::NotFound(p) if p == dir.path()));
	}

	#[test]
	fn load_reads_toml() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let path = dir.path().join("tailwind.config.toml");
		write_file(
			&path,
			r##"
content = ["./templates/**/*.html"]
plugins = []

[theme.extend.colors.primary]
DEFAULT = "#e14d2a"
dark = "#c43e1d"

[theme.extend.fontFamily]
sans = ["Inter", "sans-serif"]
"##,
		);

		let parsed = load(&path).expect("toml config should load");
		let primary = parsed.descriptor.theme.extend.colors.get("primary").expect("primary color");
		assert_eq!(primary.variant("dark").map(|c| c.as_str()), Some("#c43e1d"));
		assert!(parsed.warnings.is_empty());
	}

	#[test]
	fn load_missing_file_is_io_error() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let err = load(dir.path().join("tailwind.config.json")).expect_err("missing file");
		assert!(matches!(err, ConfigError::Io { .. }));
	}

	#[test]
	fn report_combines_parse_and_lint_warnings() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let path = dir.path().join("tailwind.config.json");
		write_file(&path, r#"{ "content": [], "darkMode": "class" }"#);

		let report = load_report(&path);
		assert!(report.error.is_none());
		assert!(report.descriptor.is_some());
		assert_eq!(
			report.warnings,
			vec![ConfigWarning::UnknownKey { path: "darkMode".into() }, ConfigWarning::EmptyContent]
		);
		assert!(!report.is_clean());
	}

	#[test]
	fn report_keeps_parse_error_without_descriptor() {
		let dir = TempDir::new().expect("temp dir should be creatable");
		let path = dir.path().join("tailwind.config.json");
		write_file(&path, r#"{ "content": ["./templates/**/*.html""#);

		let report = load_report(&path);
		assert!(report.descriptor.is_none());
		assert!(matches!(report.error, Some(ConfigError::Parse { .. })));
	}
}
