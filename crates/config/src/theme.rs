//! Theme extension: palette and font stacks layered over the build tool's defaults.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Variant key that the bare color name resolves to.
pub const DEFAULT_VARIANT: &str = "DEFAULT";

/// CSS generic font families; a stack should end in one of these.
pub const GENERIC_FAMILIES: &[&str] = &[
	"serif",
	"sans-serif",
	"monospace",
	"cursive",
	"fantasy",
	"system-ui",
	"ui-serif",
	"ui-sans-serif",
	"ui-monospace",
	"ui-rounded",
	"math",
	"emoji",
	"fangsong",
];

const COLOR_FUNCTIONS: &[&str] = &[
	"rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(", "var(",
];

/// The `theme` block.
///
/// Only `extend` is modelled; keys that would replace the tool's defaults
/// outright are ignored with a warning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
	/// Additive overrides on top of the default design tokens.
	#[serde(default)]
	pub extend: ThemeExtension,
}

/// Additive palette and font overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
	/// Semantic color name to a single value or a variant map.
	#[serde(default)]
	pub colors: IndexMap<String, ColorEntry>,
	/// Font role (e.g. `sans`) to a fallback stack.
	#[serde(default)]
	pub font_family: IndexMap<String, FontStack>,
}

/// A palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
	/// `accent: "#0ea5e9"`
	Single(ColorValue),
	/// `primary: { DEFAULT: "...", dark: "...", light: "..." }`
	Variants(IndexMap<String, ColorValue>),
}

/// A color as written in the descriptor.
///
/// Kept verbatim: hex strings, CSS keywords, and color functions are all legal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

/// Ordered font-family fallback list.
///
/// Accepts either a list of names or a single comma-separated string; always
/// serializes as a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

/// A flattened palette token, e.g. `primary-dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken<'a> {
	/// Color name, with `-variant` appended for non-default variants.
	pub name: &'a str,
	/// Variant key, `None` for single-valued entries.
	pub variant: Option<&'a str>,
	/// The color value.
	pub value: &'a ColorValue,
}

impl ColorToken<'_> {
	/// Utility-class token name (`primary`, `primary-dark`).
	pub fn token(&self) -> String {
		match self.variant {
			None | Some(DEFAULT_VARIANT) => self.name.to_string(),
			Some(variant) => format!("{}-{variant}", self.name),
		}
	}
}

impl ThemeExtension {
	/// Every color token in declaration order.
	pub fn color_tokens(&self) -> Vec<ColorToken<'_>> {
		let mut tokens = Vec::new();
		for (name, entry) in &self.colors {
			match entry {
				ColorEntry::Single(value) => tokens.push(ColorToken {
					name,
					variant: None,
					value,
				}),
				ColorEntry::Variants(variants) => {
					tokens.extend(variants.iter().map(|(variant, value)| ColorToken {
						name,
						variant: Some(variant.as_str()),
						value,
					}));
				}
			}
		}
		tokens
	}

	/// Resolve a utility token such as `primary` or `primary-light`.
	///
	/// A bare name on a variant map resolves through `DEFAULT`.
	pub fn resolve_color(&self, token: &str) -> Option<&ColorValue> {
		if let Some(entry) = self.colors.get(token) {
			return entry.default_value();
		}

		// `brand-blue` + `dark` beats `brand` + `blue-dark`.
		self.colors
			.iter()
			.filter_map(|(name, entry)| {
				let variant = token.strip_prefix(name.as_str())?.strip_prefix('-')?;
				match entry {
					ColorEntry::Variants(variants) if variant != DEFAULT_VARIANT => {
						variants.get(variant).map(|value| (name.len(), value))
					}
					_ => None,
				}
			})
			.max_by_key(|(len, _)| *len)
			.map(|(_, value)| value)
	}

	/// Font stack for a role.
	pub fn font_stack(&self, role: &str) -> Option<&FontStack> {
		self.font_family.get(role)
	}

	/// Layer `other` over `self`.
	///
	/// Entries are added or replaced per name; nothing is discarded. Two
	/// variant maps for the same color merge per variant.
	pub fn merge(&mut self, other: ThemeExtension) {
		for (name, entry) in other.colors {
			let entry = match (self.colors.get_mut(&name), entry) {
				(Some(ColorEntry::Variants(existing)), ColorEntry::Variants(incoming)) => {
					existing.extend(incoming);
					continue;
				}
				(_, entry) => entry,
			};
			self.colors.insert(name, entry);
		}
		self.font_family.extend(other.font_family);
	}
}

impl ColorEntry {
	/// Value the bare name resolves to.
	pub fn default_value(&self) -> Option<&ColorValue> {
		match self {
			ColorEntry::Single(value) => Some(value),
			ColorEntry::Variants(variants) => variants.get(DEFAULT_VARIANT),
		}
	}

	/// Look up a variant; `DEFAULT` on a single entry yields the entry itself.
	pub fn variant(&self, key: &str) -> Option<&ColorValue> {
		match self {
			ColorEntry::Single(value) if key == DEFAULT_VARIANT => Some(value),
			ColorEntry::Single(_) => None,
			ColorEntry::Variants(variants) => variants.get(key),
		}
	}
}

impl ColorValue {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
	pub fn is_hex(&self) -> bool {
		self.0
			.strip_prefix('#')
			.is_some_and(|digits| matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit()))
	}

	/// Hex, a CSS color function, or a bare keyword such as `transparent`.
	pub fn is_recognized(&self) -> bool {
		let value = self.0.trim();
		if self.is_hex() {
			return true;
		}
		let lower = value.to_ascii_lowercase();
		if COLOR_FUNCTIONS.iter().any(|f| lower.starts_with(f)) {
			return lower.ends_with(')');
		}
		!value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
	}
}

impl std::fmt::Display for ColorValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ColorValue {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl FontStack {
	pub fn new<I, S>(families: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(families.into_iter().map(Into::into).collect())
	}

	pub fn families(&self) -> &[String] {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Whether the last family is a CSS generic keyword.
	pub fn ends_in_generic(&self) -> bool {
		self.0.last().is_some_and(|family| is_generic(family))
	}

	/// CSS `font-family` value. Names that are not plain identifiers are quoted.
	pub fn to_css(&self) -> String {
		self.0
			.iter()
			.map(|family| {
				if is_generic(family) || is_css_ident(family) {
					family.clone()
				} else {
					format!("\"{}\"", family.replace('"', "\\\""))
				}
			})
			.collect::<Vec<_>>()
			.join(", ")
	}
}

impl<'de> Deserialize<'de> for FontStack {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			List(Vec<String>),
			Csv(String),
		}

		Ok(match Raw::deserialize(deserializer)? {
			Raw::List(families) => FontStack(families),
			Raw::Csv(csv) => FontStack(
				csv.split(',')
					.map(|family| family.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
					.filter(|family| !family.is_empty())
					.collect(),
			),
		})
	}
}

fn is_generic(family: &str) -> bool {
	GENERIC_FAMILIES.iter().any(|g| g.eq_ignore_ascii_case(family))
}

/// ASCII subset of a CSS identifier: no leading digit, and `-` must be
/// followed by a letter or `_`.
fn is_css_ident(name: &str) -> bool {
	let start = |c: char| c.is_ascii_alphabetic() || c == '_';
	let body = name.strip_prefix('-').unwrap_or(name);
	body.chars().next().is_some_and(start)
		&& name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
