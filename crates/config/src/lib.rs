//! Build configuration for the utility-CSS step.
//!
//! This crate models the descriptor the external CSS build tool reads once per
//! run: which files to scan for class names, and how the default theme is
//! extended. Descriptors are written in JSON (canonical) or TOML and contain:
//!
//! - **content**: glob patterns selecting templates and scripts to scan
//! - **theme.extend.colors**: palette entries, single values or variant maps
//! - **theme.extend.fontFamily**: font fallback stacks per role
//! - **plugins**: plugin references passed through to the tool
//!
//! # Example
//!
//! ```json
//! {
//!   "content": ["./templates/**/*.html", "./static/js/**/*.js"],
//!   "theme": {
//!     "extend": {
//!       "colors": {
//!         "primary": { "DEFAULT": "#e14d2a", "dark": "#c43e1d", "light": "#f56b42" }
//!       },
//!       "fontFamily": { "sans": ["Inter", "system-ui", "sans-serif"] }
//!     }
//!   },
//!   "plugins": []
//! }
//! ```
//!
//! # Unknown keys
//!
//! The build tool grows options over time, so unrecognized keys at the top
//! level, under `theme`, and under `theme.extend` are ignored rather than
//! rejected. They are reported as [`ConfigWarning::UnknownKey`] in
//! [`ParsedConfig::warnings`].
//!
//! # Lint
//!
//! [`ConfigDescriptor::lint`] flags data that loads fine but will not do what
//! the author likely meant, such as an empty `content` list (every utility
//! class would be purged) or a variant map without `DEFAULT`.

pub mod content;
pub mod error;
pub mod format;
mod lint;
pub mod load;
pub mod theme;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use content::ContentMatcher;
pub use error::{ConfigError, ConfigWarning, Result};
pub use format::Format;
pub use load::{LoadReport, find_config, load, load_report};
pub use theme::{ColorEntry, ColorToken, ColorValue, FontStack, Theme, ThemeExtension};

const TOP_LEVEL_KEYS: &[&str] = &["content", "theme", "plugins"];
const THEME_KEYS: &[&str] = &["extend"];
const EXTEND_KEYS: &[&str] = &["colors", "fontFamily"];

/// The build descriptor.
///
/// Constructed once per load and not mutated afterwards; every query takes
/// `&self`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDescriptor {
	/// Glob patterns scanned for class-name usage, in declaration order.
	#[serde(default)]
	pub content: Vec<String>,
	/// Theme overrides.
	#[serde(default)]
	pub theme: Theme,
	/// Plugins loaded by the build tool.
	#[serde(default)]
	pub plugins: Vec<PluginRef>,
}

/// A plugin reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
	/// `"@tailwindcss/forms"`
	Named(String),
	/// `{ "name": "@tailwindcss/typography", "options": { ... } }`
	Configured {
		/// Plugin package name.
		name: String,
		/// Options handed to the plugin verbatim.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		options: Option<Value>,
	},
}

impl PluginRef {
	pub fn name(&self) -> &str {
		match self {
			PluginRef::Named(name) | PluginRef::Configured { name, .. } => name,
		}
	}
}

/// A descriptor together with the warnings noticed while parsing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfig {
	pub descriptor: ConfigDescriptor,
	/// Unknown keys that were ignored.
	pub warnings: Vec<ConfigWarning>,
}

/// Parse descriptor text.
///
/// Fails with [`ConfigError::Parse`] on malformed text or a recognized key of
/// the wrong shape. Unknown keys are tolerated and reported as warnings.
pub fn parse_str(input: &str, format: Format) -> Result<ParsedConfig> {
	let value: Value = format.deserialize(input)?;
	let Value::Object(root) = &value else {
		return Err(ConfigError::Parse {
			format,
			line: 1,
			column: 1,
			message: format!("expected an object at the top level, found {}", value_kind(&value)),
		});
	};

	let mut warnings = Vec::new();
	collect_unknown_keys(root, TOP_LEVEL_KEYS, "", &mut warnings);
	if let Some(Value::Object(theme)) = root.get("theme") {
		collect_unknown_keys(theme, THEME_KEYS, "theme", &mut warnings);
		if let Some(Value::Object(extend)) = theme.get("extend") {
			collect_unknown_keys(extend, EXTEND_KEYS, "theme.extend", &mut warnings);
		}
	}

	let descriptor: ConfigDescriptor = format.deserialize(input)?;
	Ok(ParsedConfig { descriptor, warnings })
}

impl ConfigDescriptor {
	/// Serialize to text in the given encoding.
	pub fn to_string_pretty(&self, format: Format) -> Result<String> {
		format.serialize(self)
	}

	/// Run lint checks. An empty result means the descriptor is clean.
	pub fn lint(&self) -> Vec<ConfigWarning> {
		lint::lint(self)
	}

	/// Compile `content` into a path matcher.
	pub fn content_matcher(&self) -> Result<ContentMatcher> {
		ContentMatcher::new(&self.content)
	}
}

impl std::str::FromStr for ConfigDescriptor {
	type Err = ConfigError;

	/// Parse JSON text, discarding unknown-key warnings.
	fn from_str(s: &str) -> Result<Self> {
		parse_str(s, Format::Json).map(|parsed| parsed.descriptor)
	}
}

fn collect_unknown_keys(object: &Map<String, Value>, known: &[&str], parent: &str, warnings: &mut Vec<ConfigWarning>) {
	for key in object.keys().filter(|key| !known.contains(&key.as_str())) {
		let path = if parent.is_empty() { key.clone() } else { format!("{parent}.{key}") };
		tracing::debug!(key = %path, "ignoring unrecognized config key");
		warnings.push(ConfigWarning::UnknownKey { path });
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
