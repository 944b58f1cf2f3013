//! Error and warning types for descriptor parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::Format;

/// Errors that can occur when loading a descriptor.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The text is not well-formed, or a recognized key holds the wrong shape.
	///
	/// Parsing is all-or-nothing: no partial descriptor accompanies this error.
	#[error("{format} parse error at {line}:{column}: {message}")]
	Parse {
		/// Encoding the text was parsed as.
		format: Format,
		/// 1-based line of the failure, 0 when unknown.
		line: usize,
		/// 1-based column of the failure, 0 when unknown.
		column: usize,
		/// Parser message.
		message: String,
	},

	/// Error reading a descriptor file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The file extension does not name a supported encoding.
	#[error("unsupported config format: {0} (expected .json or .toml)")]
	UnsupportedFormat(PathBuf),

	/// No descriptor file exists in the searched directory.
	#[error("no tailwind config found in {0}")]
	NotFound(PathBuf),

	/// A content pattern could not be compiled into a glob.
	#[error("invalid content glob '{pattern}': {reason}")]
	InvalidGlob {
		/// The offending pattern as written.
		pattern: String,
		/// Compiler message.
		reason: String,
	},

	/// The descriptor could not be written back out.
	#[error("serialization error: {0}")]
	Serialize(String),
}

impl ConfigError {
	pub(crate) fn from_json(error: serde_json::Error) -> Self {
		ConfigError::Parse {
			format: Format::Json,
			line: error.line(),
			column: error.column(),
			message: error.to_string(),
		}
	}

	pub(crate) fn from_toml(error: toml::de::Error, input: &str) -> Self {
		let (line, column) = error.span().map(|span| line_column(input, span.start)).unwrap_or((0, 0));
		ConfigError::Parse {
			format: Format::Toml,
			line,
			column,
			message: error.message().to_string(),
		}
	}
}

/// 1-based line and column of a byte offset.
fn line_column(input: &str, offset: usize) -> (usize, usize) {
	let before = &input[..offset.min(input.len())];
	let line = before.matches('\n').count() + 1;
	let column = before.rfind('\n').map_or(before.len(), |nl| before.len() - nl - 1) + 1;
	(line, column)
}

/// Non-fatal finding about a descriptor.
///
/// Warnings never prevent a descriptor from loading. They come from two places:
/// unknown keys noticed while parsing, and [`ConfigDescriptor::lint`].
///
/// [`ConfigDescriptor::lint`]: crate::ConfigDescriptor::lint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A key was not recognized and has been ignored.
	UnknownKey {
		/// Dotted path of the key, e.g. `theme.extend.spacing`.
		path: String,
	},
	/// `content` is empty, so the scan step would find no class usage.
	EmptyContent,
	/// A content pattern does not compile as a glob.
	InvalidGlob {
		/// The offending pattern.
		pattern: String,
		/// Compiler message.
		reason: String,
	},
	/// The same content pattern appears more than once.
	DuplicateGlob {
		/// The repeated pattern.
		pattern: String,
	},
	/// A variant map lacks `DEFAULT`, so the bare color name resolves to nothing.
	MissingDefaultVariant {
		/// The color name.
		color: String,
	},
	/// A color is declared as a variant map with no variants.
	EmptyVariantMap {
		/// The color name.
		color: String,
	},
	/// A color value is neither hex, a CSS color function, nor a keyword.
	UnrecognizedColor {
		/// Flattened token name, e.g. `primary-dark`.
		token: String,
		/// The value as written.
		value: String,
	},
	/// A font role maps to an empty stack.
	EmptyFontStack {
		/// The font role.
		role: String,
	},
	/// A font stack does not end in a generic family keyword.
	FontStackWithoutGeneric {
		/// The font role.
		role: String,
	},
}

impl std::fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ConfigWarning::UnknownKey { path } => write!(f, "unknown key '{path}' will be ignored"),
			ConfigWarning::EmptyContent => {
				write!(f, "'content' is empty; every utility class would be purged")
			}
			ConfigWarning::InvalidGlob { pattern, reason } => {
				write!(f, "content pattern '{pattern}' is not a valid glob: {reason}")
			}
			ConfigWarning::DuplicateGlob { pattern } => write!(f, "content pattern '{pattern}' is listed more than once"),
			ConfigWarning::MissingDefaultVariant { color } => {
				write!(f, "color '{color}' has variants but no DEFAULT; '{color}' alone will not resolve")
			}
			ConfigWarning::EmptyVariantMap { color } => write!(f, "color '{color}' has an empty variant map"),
			ConfigWarning::UnrecognizedColor { token, value } => {
				write!(f, "color '{token}' has unrecognized value '{value}'")
			}
			ConfigWarning::EmptyFontStack { role } => write!(f, "font family '{role}' is empty"),
			ConfigWarning::FontStackWithoutGeneric { role } => {
				write!(f, "font family '{role}' does not end in a generic family (e.g. sans-serif)")
			}
		}
	}
}

/// Result type for descriptor operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
