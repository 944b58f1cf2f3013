//! Text encodings a descriptor can be written in.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ConfigDescriptor;
use crate::error::{ConfigError, Result};

/// File names tried by [`crate::find_config`], in precedence order.
pub const CONFIG_FILE_NAMES: &[&str] = &["tailwind.config.json", "tailwind.config.toml"];

/// Descriptor encoding.
///
/// JSON is canonical; TOML carries the same keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
	/// `.json`
	#[default]
	Json,
	/// `.toml`
	Toml,
}

impl Format {
	/// Detect the encoding from a file extension.
	pub fn from_path(path: &Path) -> Result<Self> {
		match path.extension().and_then(|ext| ext.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
			Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Format::Toml),
			_ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
		}
	}

	/// Deserialize text in this encoding.
	///
	/// Errors carry the line and column reported by the underlying parser.
	pub(crate) fn deserialize<T: DeserializeOwned>(self, input: &str) -> Result<T> {
		match self {
			Format::Json => serde_json::from_str(input).map_err(ConfigError::from_json),
			Format::Toml => toml::from_str(input).map_err(|e| ConfigError::from_toml(e, input)),
		}
	}

	pub(crate) fn serialize(self, descriptor: &ConfigDescriptor) -> Result<String> {
		match self {
			Format::Json => serde_json::to_string_pretty(descriptor)
				.map(|mut text| {
					text.push('\n');
					text
				})
				.map_err(|e| ConfigError::Serialize(e.to_string())),
			Format::Toml => write_toml(descriptor),
		}
	}
}

/// Write a descriptor as a TOML document.
///
/// Palette and font entries are emitted as key-value pairs under fixed table
/// headers, with variant maps as inline tables. A generic serializer would
/// hoist variant maps into sub-tables after every single-valued color, which
/// loses declaration order.
fn write_toml(descriptor: &ConfigDescriptor) -> Result<String> {
	let mut out = String::new();
	let _ = writeln!(out, "content = {}", toml_value(&descriptor.content)?);
	let _ = writeln!(out, "plugins = {}", toml_value(&descriptor.plugins)?);

	let extend = &descriptor.theme.extend;
	out.push_str("\n[theme.extend.colors]\n");
	for (name, entry) in &extend.colors {
		let _ = writeln!(out, "{} = {}", toml_key(name), toml_value(entry)?);
	}
	out.push_str("\n[theme.extend.fontFamily]\n");
	for (role, stack) in &extend.font_family {
		let _ = writeln!(out, "{} = {}", toml_key(role), toml_value(stack)?);
	}
	Ok(out)
}

fn toml_value<T: Serialize + ?Sized>(value: &T) -> Result<toml::Value> {
	toml::Value::try_from(value).map_err(|e| ConfigError::Serialize(e.to_string()))
}

fn toml_key(key: &str) -> String {
	if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
		key.to_string()
	} else {
		toml::Value::String(key.to_string()).to_string()
	}
}

impl std::fmt::Display for Format {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Format::Json => "JSON",
			Format::Toml => "TOML",
		})
	}
}

impl std::str::FromStr for Format {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"json" => Ok(Format::Json),
			"toml" => Ok(Format::Toml),
			other => Err(format!("unknown format '{other}' (expected 'json' or 'toml')")),
		}
	}
}
