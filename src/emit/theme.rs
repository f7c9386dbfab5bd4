//! `theme.js` / `theme.d.ts`: the validated tree as an ES module.

use std::fmt::Write;

use super::BANNER;
use crate::schema::{RodiaTokens, REQUIRED_COLOR_PATHS};

/// Render `theme.js`, embedding the full token tree as `rodiaTheme`.
pub fn emit_theme_js(tokens: &RodiaTokens) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(tokens.raw())?;
    Ok(format!("{BANNER}export const rodiaTheme = {json};\n\n"))
}

/// Render `theme.d.ts`.
///
/// The declared type only guarantees the fields the schema requires; every
/// level stays open to extra keys.
pub fn emit_theme_dts() -> String {
    let mut out = String::from(BANNER);
    out.push_str(
        "export type ColorToken = { readonly value: string } & { readonly [k: string]: unknown };\n\n",
    );

    out.push_str("export type ThemeColors = {\n");
    for (group, keys) in REQUIRED_COLOR_PATHS {
        let _ = writeln!(out, "  readonly {group}: {{");
        for key in *keys {
            let _ = writeln!(out, "    readonly {key}: ColorToken;");
        }
        out.push_str("    readonly [k: string]: unknown;\n  };\n");
    }
    out.push_str("  readonly [k: string]: unknown;\n};\n\n");

    out.push_str(
        "export type Theme = {\n\
         \x20 readonly colors: ThemeColors;\n\
         \x20 readonly [k: string]: unknown;\n\
         };\n\n\
         export type RodiaTheme = {\n\
         \x20 readonly themes: {\n\
         \x20   readonly light: Theme;\n\
         \x20   readonly dark: Theme;\n\
         \x20   readonly [k: string]: unknown;\n\
         \x20 };\n\
         \x20 readonly layout?: unknown;\n\
         \x20 readonly typography?: unknown;\n\
         \x20 readonly elevation?: unknown;\n\
         \x20 readonly palette?: unknown;\n\
         \x20 readonly [k: string]: unknown;\n\
         };\n\n\
         export declare const rodiaTheme: RodiaTheme;\n",
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use crate::test_support::sample_tokens;
    use serde_json::{json, Value};

    #[test]
    fn test_theme_js_embeds_full_tree() {
        let mut raw = sample_tokens();
        raw["themes"]["light"]["colors"]["brand"]["primary"]["value"] = json!(" #FF6A00");
        raw["extra"] = json!({ "kept": true });
        let tokens = validate(raw).unwrap();

        let js = emit_theme_js(&tokens).unwrap();
        assert!(js.starts_with(BANNER));
        assert!(js.ends_with("};\n\n"));

        let body = js
            .strip_prefix(BANNER)
            .and_then(|s| s.strip_prefix("export const rodiaTheme = "))
            .and_then(|s| s.strip_suffix(";\n\n"))
            .unwrap();
        let parsed: Value = serde_json::from_str(body).unwrap();
        assert_eq!(&parsed, tokens.raw());
        assert_eq!(parsed["extra"]["kept"], json!(true));
        assert_eq!(
            parsed["themes"]["light"]["colors"]["brand"]["primary"]["value"],
            json!("#FF6A00")
        );
    }

    #[test]
    fn test_theme_js_keeps_source_order() {
        let tokens = validate(sample_tokens()).unwrap();
        let js = emit_theme_js(&tokens).unwrap();
        let themes = js.find("\"themes\"").unwrap();
        let palette = js.find("\"palette\"").unwrap();
        assert!(themes < palette);
        assert!(js.contains("\n  \"themes\": {\n    \"light\": {"));
    }

    #[test]
    fn test_theme_dts_covers_required_fields() {
        let dts = emit_theme_dts();
        assert!(dts.contains("  readonly bg: {\n    readonly main: ColorToken;\n    readonly surfaceAlt: ColorToken;\n    readonly [k: string]: unknown;\n  };\n"));
        assert!(dts.contains("    readonly onPrimary: ColorToken;\n"));
        assert!(dts.contains("    readonly danger: ColorToken;\n"));
        assert!(dts.contains("export declare const rodiaTheme: RodiaTheme;\n"));
        let open = dts.matches("readonly [k: string]: unknown;").count();
        // one per color group, plus ThemeColors, Theme, themes and RodiaTheme
        assert_eq!(open, REQUIRED_COLOR_PATHS.len() + 4);
    }
}
