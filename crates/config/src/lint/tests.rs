use pretty_assertions::assert_eq;

use crate::{ConfigDescriptor, ConfigWarning};

fn lint_json(input: &str) -> Vec<ConfigWarning> {
	let descriptor: ConfigDescriptor = input.parse().expect("descriptor should parse");
	descriptor.lint()
}

#[test]
fn clean_descriptor_has_no_findings() {
	let warnings = lint_json(
		r##"{
			"content": ["./templates/**/*.html"],
			"theme": { "extend": {
				"colors": { "primary": { "DEFAULT": "#e14d2a", "dark": "#c43e1d" }, "ink": "#111827" },
				"fontFamily": { "sans": ["Inter", "system-ui", "sans-serif"] }
			} },
			"plugins": []
		}"##,
	);
	assert!(warnings.is_empty(), "unexpected findings: {warnings:?}");
}

#[test]
fn empty_content_is_degenerate() {
	assert_eq!(lint_json(r#"{ "content": [] }"#), vec![ConfigWarning::EmptyContent]);
	assert_eq!(lint_json("{}"), vec![ConfigWarning::EmptyContent]);
}

#[test]
fn duplicate_and_invalid_globs() {
	let warnings = lint_json(r#"{ "content": ["./a/**/*.html", "./b/[x.html", "./a/**/*.html"] }"#);
	assert_eq!(warnings.len(), 2);
	assert!(matches!(&warnings[0], ConfigWarning::InvalidGlob { pattern, .. } if pattern == "./b/[x.html"));
	assert_eq!(warnings[1], ConfigWarning::DuplicateGlob { pattern: "./a/**/*.html".into() });
}

#[test]
fn variant_maps_need_default() {
	let warnings = lint_json(
		r##"{
			"content": ["./templates/**/*.html"],
			"theme": { "extend": { "colors": {
				"brand": { "dark": "#000", "light": "#fff" },
				"muted": {}
			} } }
		}"##,
	);
	assert_eq!(
		warnings,
		vec![
			ConfigWarning::MissingDefaultVariant { color: "brand".into() },
			ConfigWarning::EmptyVariantMap { color: "muted".into() },
		]
	);
}

#[test]
fn unrecognized_color_values_name_the_token() {
	let warnings = lint_json(
		r##"{
			"content": ["./templates/**/*.html"],
			"theme": { "extend": { "colors": {
				"primary": { "DEFAULT": "#e14d2a", "dark": "#c43e1" },
				"accent": "rgb(14 165 233)",
				"edge": "not a color"
			} } }
		}"##,
	);
	assert_eq!(
		warnings,
		vec![
			ConfigWarning::UnrecognizedColor {
				token: "primary-dark".into(),
				value: "#c43e1".into(),
			},
			ConfigWarning::UnrecognizedColor {
				token: "edge".into(),
				value: "not a color".into(),
			},
		]
	);
}

#[test]
fn font_stacks_should_end_in_generic_family() {
	let warnings = lint_json(
		r#"{
			"content": ["./templates/**/*.html"],
			"theme": { "extend": { "fontFamily": {
				"sans": ["Inter", "system-ui", "sans-serif"],
				"display": ["Playfair Display"],
				"body": []
			} } }
		}"#,
	);
	assert_eq!(
		warnings,
		vec![
			ConfigWarning::FontStackWithoutGeneric { role: "display".into() },
			ConfigWarning::EmptyFontStack { role: "body".into() },
		]
	);
}

#[test]
fn warnings_render_readable_messages() {
	assert_eq!(
		ConfigWarning::MissingDefaultVariant { color: "brand".into() }.to_string(),
		"color 'brand' has variants but no DEFAULT; 'brand' alone will not resolve"
	);
	assert_eq!(
		ConfigWarning::UnknownKey { path: "theme.extend.spacing".into() }.to_string(),
		"unknown key 'theme.extend.spacing' will be ignored"
	);
}
