//! Content globs: which files the build tool scans for class usage.

use std::path::Path;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{ConfigError, Result};

/// Compiled `content` patterns.
///
/// Patterns are relative to the directory holding the descriptor. A leading
/// `./` is not significant, and `*` never crosses a path separator.
#[derive(Debug, Clone)]
pub struct ContentMatcher {
	set: GlobSet,
}

impl ContentMatcher {
	/// Compile every pattern, failing on the first that does not parse.
	pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
		let mut builder = GlobSetBuilder::new();
		for pattern in patterns {
			builder.add(compile(pattern.as_ref())?);
		}
		let set = builder.build().map_err(|e| ConfigError::InvalidGlob {
			pattern: patterns.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", "),
			reason: e.to_string(),
		})?;
		Ok(Self { set })
	}

	/// Whether any pattern selects `path`.
	pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
		self.set.is_match(normalize(path.as_ref()))
	}
}

/// Compile a single pattern.
pub(crate) fn compile(pattern: &str) -> Result<Glob> {
	GlobBuilder::new(strip_dot_prefix(pattern))
		.literal_separator(true)
		.build()
		.map_err(|e| ConfigError::InvalidGlob {
			pattern: pattern.to_string(),
			reason: e.kind().to_string(),
		})
}

fn strip_dot_prefix(pattern: &str) -> &str {
	let mut rest = pattern;
	while let Some(stripped) = rest.strip_prefix("./") {
		rest = stripped;
	}
	rest
}

fn normalize(path: &Path) -> &Path {
	let mut rest = path;
	while let Ok(stripped) = rest.strip_prefix(".") {
		rest = stripped;
	}
	rest
}
