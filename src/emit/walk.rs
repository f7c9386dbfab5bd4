//! Depth-first collection of hex color leaves from the raw token tree.

use serde_json::Value;

use crate::color::is_hex_color;
use crate::diagnostic::Warnings;

/// A CSS custom property produced from a token leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssColorVar {
    /// Full variable name, including the leading `--`.
    pub var_name: String,
    /// Trimmed hex value.
    pub value: String,
    /// Dot-path of the source token, emitted as a comment.
    pub token_path: String,
}

/// Convert a token key to a kebab-case CSS name segment.
///
/// A hyphen is inserted where a lowercase letter or digit is followed by an
/// uppercase letter; any other run of non-alphanumeric characters becomes a
/// single hyphen. Leading and trailing hyphens are dropped.
///
/// ```
/// use rodia_tokens::emit::to_css_segment;
///
/// assert_eq!(to_css_segment("onPrimary"), "on-primary");
/// assert_eq!(to_css_segment("surface alt__2"), "surface-alt-2");
/// ```
pub fn to_css_segment(input: &str) -> String {
    fn hyphen(out: &mut String) {
        if !out.ends_with('-') {
            out.push('-');
        }
    }

    let mut out = String::with_capacity(input.len() + 4);
    let mut prev: Option<char> = None;
    for c in input.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
            hyphen(&mut out);
        }
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else {
            hyphen(&mut out);
        }
        prev = Some(c);
    }
    out.trim_matches('-').to_owned()
}

/// Collect every color token under a theme's `colors` tree.
///
/// An object whose `value` is a hex string yields `--rd-color-<kebab-path>`;
/// the walk continues into its other keys. `base` is the dot-path of `colors`
/// in the document and only appears in warnings.
pub fn collect_theme_color_vars(
    colors: Option<&Value>,
    base: &str,
    warnings: &mut Warnings,
) -> Vec<CssColorVar> {
    let mut walker = Walker {
        prefix: "rd-color",
        base,
        out: Vec::new(),
        warnings,
    };
    if let Some(colors) = colors {
        walker.token_node(colors, &mut Vec::new(), &mut Vec::new());
    }
    walker.finish()
}

/// Collect every hex string leaf under `node`.
///
/// Variables are named `--<prefix>-<kebab-path>`; token paths start with
/// `base` (e.g. `palette.orange.500`).
pub fn collect_hex_vars(
    node: Option<&Value>,
    prefix: &str,
    base: &str,
    warnings: &mut Warnings,
) -> Vec<CssColorVar> {
    let mut walker = Walker {
        prefix,
        base,
        out: Vec::new(),
        warnings,
    };
    if let Some(node) = node {
        walker.leaf_node(node, &mut Vec::new(), &mut Vec::new());
    }
    walker.finish()
}

// ============================================================================
// Walker
// ============================================================================

struct Walker<'a> {
    prefix: &'a str,
    base: &'a str,
    out: Vec<CssColorVar>,
    warnings: &'a mut Warnings,
}

impl Walker<'_> {
    fn token_path(&self, raw: &[&str]) -> String {
        raw.join(".")
    }

    fn full_path(&self, raw: &[&str]) -> String {
        if raw.is_empty() {
            self.base.to_owned()
        } else {
            format!("{}.{}", self.base, raw.join("."))
        }
    }

    fn push(&mut self, css: &[String], value: &str, token_path: String) {
        self.out.push(CssColorVar {
            var_name: format!("--{}-{}", self.prefix, css.join("-")),
            value: value.trim().to_owned(),
            token_path,
        });
    }

    /// Theme colors: tokens are objects carrying a `value`.
    fn token_node<'v>(&mut self, node: &'v Value, raw: &mut Vec<&'v str>, css: &mut Vec<String>) {
        let Value::Object(map) = node else {
            return;
        };

        if let Some(Value::String(value)) = map.get("value")
            && !css.is_empty()
        {
            if is_hex_color(value) {
                self.push(css, value, self.token_path(raw));
            } else {
                let path = self.full_path(raw);
                self.warnings
                    .push(format!("skipped {path}: {value:?} is not a hex color"));
            }
        }

        for (key, child) in map {
            if key == "value" {
                continue;
            }
            raw.push(key);
            css.push(to_css_segment(key));
            self.token_node(child, raw, css);
            raw.pop();
            css.pop();
        }
    }

    /// Palette: every string leaf is a color.
    fn leaf_node<'v>(&mut self, node: &'v Value, raw: &mut Vec<&'v str>, css: &mut Vec<String>) {
        match node {
            Value::String(value) if !css.is_empty() => {
                if is_hex_color(value) {
                    self.push(css, value, self.full_path(raw));
                } else {
                    let path = self.full_path(raw);
                    self.warnings
                        .push(format!("skipped {path}: {value:?} is not a hex color"));
                }
            }
            Value::Object(map) => {
                for (key, child) in map {
                    raw.push(key);
                    css.push(to_css_segment(key));
                    self.leaf_node(child, raw, css);
                    raw.pop();
                    css.pop();
                }
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<CssColorVar> {
        self.out.sort_by(|a, b| a.var_name.cmp(&b.var_name));
        self.out
    }
}
