//! Dot-path lookup over a raw JSON token tree.

use serde_json::Value;
use thiserror::Error;

use crate::color::is_hex_color;

/// Error raised while resolving or converting a mapped token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The path is missing or does not hold a hex color string.
    #[error("expected hex color at \"{path}\", got: {got}")]
    ExpectedHex {
        /// Dot-path that was looked up.
        path: String,
        /// JSON rendering of the raw value, or `undefined` if absent.
        got: String,
    },

    /// A hex value passed validation but could not be converted.
    #[error("failed to convert hex→hsl for \"{var}\"")]
    Conversion {
        /// CSS variable being produced.
        var: String,
    },
}

/// Walk `tree` along the dot-separated `path`.
///
/// Empty segments are ignored. Returns `None` as soon as a segment is
/// missing, hits a non-container, or resolves to `null`. Array segments are
/// addressed by index.
pub fn get_by_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = tree;
    for key in path.split('.').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(key)?,
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// Resolve `path` and require a hex color string there.
///
/// The returned slice is trimmed. The error embeds the path and the raw value
/// so the source JSON can be fixed without reading generator code.
pub fn require_hex<'a>(tree: &'a Value, path: &str) -> Result<&'a str, TokenError> {
    let value = get_by_path(tree, path);
    match value.and_then(Value::as_str) {
        Some(s) if is_hex_color(s) => Ok(s.trim()),
        _ => Err(TokenError::ExpectedHex {
            path: path.to_owned(),
            got: value.map_or_else(|| "undefined".to_owned(), Value::to_string),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> Value {
        json!({
            "themes": {
                "light": { "colors": { "brand": { "primary": { "value": " #FF6A00 " } } } },
                "dark": { "colors": { "brand": { "primary": { "value": null } } } }
            },
            "list": [{ "value": "#fff" }],
            "size": 12
        })
    }

    #[test]
    fn test_get_by_path_found() {
        let t = tree();
        assert_eq!(
            get_by_path(&t, "themes.light.colors.brand.primary.value"),
            Some(&json!(" #FF6A00 "))
        );
        assert_eq!(get_by_path(&t, "size"), Some(&json!(12)));
        assert_eq!(get_by_path(&t, "list.0.value"), Some(&json!("#fff")));
    }

    #[test]
    fn test_get_by_path_missing_never_panics() {
        let t = tree();
        assert_eq!(get_by_path(&t, "themes.sepia.colors"), None);
        assert_eq!(get_by_path(&t, "size.value"), None);
        assert_eq!(get_by_path(&t, "list.7"), None);
        assert_eq!(get_by_path(&t, "themes.dark.colors.brand.primary.value"), None);
    }

    #[test]
    fn test_get_by_path_empty_returns_root() {
        let t = tree();
        assert_eq!(get_by_path(&t, ""), Some(&t));
        assert!(get_by_path(&t, "themes..light").is_some());
    }

    #[test]
    fn test_require_hex_trims() {
        let t = tree();
        assert_eq!(
            require_hex(&t, "themes.light.colors.brand.primary.value").unwrap(),
            "#FF6A00"
        );
    }

    #[test]
    fn test_require_hex_missing() {
        let t = tree();
        let err = require_hex(&t, "themes.dark.colors.brand.primary.value").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected hex color at \"themes.dark.colors.brand.primary.value\", got: undefined"
        );
    }

    #[test]
    fn test_require_hex_wrong_type_embeds_raw_value() {
        let t = tree();
        let err = require_hex(&t, "size").unwrap_err();
        assert_eq!(err.to_string(), "expected hex color at \"size\", got: 12");

        let t = json!({ "c": "red" });
        let err = require_hex(&t, "c").unwrap_err();
        assert_eq!(err.to_string(), "expected hex color at \"c\", got: \"red\"");
    }
}
