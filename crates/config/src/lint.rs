//! Lint checks over a loaded descriptor.
//!
//! Every finding here is advisory. A descriptor that lints dirty still loads
//! and is still handed to the build tool unchanged.

use std::collections::HashSet;

use crate::ConfigDescriptor;
use crate::content;
use crate::error::ConfigWarning;
use crate::theme::{ColorEntry, DEFAULT_VARIANT};

pub(crate) fn lint(descriptor: &ConfigDescriptor) -> Vec<ConfigWarning> {
	let mut warnings = Vec::new();
	lint_content(&descriptor.content, &mut warnings);
	lint_colors(descriptor, &mut warnings);
	lint_fonts(descriptor, &mut warnings);
	warnings
}

fn lint_content(content: &[String], warnings: &mut Vec<ConfigWarning>) {
	if content.is_empty() {
		warnings.push(ConfigWarning::EmptyContent);
		return;
	}

	let mut seen = HashSet::new();
	for pattern in content {
		if !seen.insert(pattern.as_str()) {
			warnings.push(ConfigWarning::DuplicateGlob { pattern: pattern.clone() });
			continue;
		}
		if let Err(crate::ConfigError::InvalidGlob { pattern, reason }) = content::compile(pattern) {
			warnings.push(ConfigWarning::InvalidGlob { pattern, reason });
		}
	}
}

fn lint_colors(descriptor: &ConfigDescriptor, warnings: &mut Vec<ConfigWarning>) {
	let extend = &descriptor.theme.extend;

	for (name, entry) in &extend.colors {
		if let ColorEntry::Variants(variants) = entry {
			if variants.is_empty() {
				warnings.push(ConfigWarning::EmptyVariantMap { color: name.clone() });
			} else if !variants.contains_key(DEFAULT_VARIANT) {
				warnings.push(ConfigWarning::MissingDefaultVariant { color: name.clone() });
			}
		}
	}

	for token in extend.color_tokens() {
		if !token.value.is_recognized() {
			warnings.push(ConfigWarning::UnrecognizedColor {
				token: token.token(),
				value: token.value.to_string(),
			});
		}
	}
}

fn lint_fonts(descriptor: &ConfigDescriptor, warnings: &mut Vec<ConfigWarning>) {
	for (role, stack) in &descriptor.theme.extend.font_family {
		if stack.is_empty() {
			warnings.push(ConfigWarning::EmptyFontStack { role: role.clone() });
		} else if !stack.ends_in_generic() {
			warnings.push(ConfigWarning::FontStackWithoutGeneric { role: role.clone() });
		}
	}
}

#[cfg(test)]
mod tests;
