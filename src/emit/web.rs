//! `web-tokens.js` / `web-tokens.d.ts`: Tailwind color map over the CSS
//! variables in `index.css`.

use std::fmt::Write;

use super::BANNER;

/// Shape of one entry in the color map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// `name: "hsl(var(--name) / <alpha-value>)"`
    Plain,
    /// `name: { DEFAULT, foreground }`
    Paired,
}

/// Color map entries, in output order.
const WEB_COLORS: &[(&str, Shape)] = &[
    ("border", Shape::Plain),
    ("background", Shape::Plain),
    ("foreground", Shape::Plain),
    ("primary", Shape::Paired),
    ("secondary", Shape::Paired),
    ("accent", Shape::Paired),
    ("destructive", Shape::Paired),
    ("muted", Shape::Paired),
    ("card", Shape::Paired),
    ("popover", Shape::Paired),
    ("input", Shape::Plain),
    ("ring", Shape::Plain),
];

fn hsl_var(var: &str) -> String {
    format!("\"hsl(var(--{var}) / <alpha-value>)\"")
}

/// Render `web-tokens.js`.
pub fn emit_web_tokens_js() -> String {
    let mut out = format!("{BANNER}export const shadcnColors = {{\n");
    let last = WEB_COLORS.len() - 1;
    for (i, &(name, shape)) in WEB_COLORS.iter().enumerate() {
        let comma = if i == last { "" } else { "," };
        match shape {
            Shape::Plain => {
                let _ = writeln!(out, "  {name}: {}{comma}", hsl_var(name));
            }
            Shape::Paired => {
                let _ = writeln!(out, "  {name}: {{");
                let _ = writeln!(out, "    DEFAULT: {},", hsl_var(name));
                let _ = writeln!(out, "    foreground: {}", hsl_var(&format!("{name}-foreground")));
                let _ = writeln!(out, "  }}{comma}");
            }
        }
    }
    out.push_str("};\n\n");
    out
}

/// Render `web-tokens.d.ts`.
pub fn emit_web_tokens_dts() -> String {
    let mut out = format!("{BANNER}export declare const shadcnColors: {{\n");
    for &(name, shape) in WEB_COLORS {
        let ty = match shape {
            Shape::Plain => "string",
            Shape::Paired => "{ readonly DEFAULT: string; readonly foreground: string }",
        };
        let _ = writeln!(out, "  readonly {name}: {ty};");
    }
    out.push_str("};\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_tokens_js() {
        let js = emit_web_tokens_js();
        assert!(js.starts_with(&format!("{BANNER}export const shadcnColors = {{\n  border: ")));
        assert!(js.contains(
            "  primary: {\n    DEFAULT: \"hsl(var(--primary) / <alpha-value>)\",\n    \
             foreground: \"hsl(var(--primary-foreground) / <alpha-value>)\"\n  },\n"
        ));
        assert!(js.contains("  input: \"hsl(var(--input) / <alpha-value>)\",\n"));
        assert!(js.ends_with("  ring: \"hsl(var(--ring) / <alpha-value>)\"\n};\n\n"));
    }

    #[test]
    fn test_web_tokens_cover_card_and_popover() {
        let js = emit_web_tokens_js();
        for name in ["card", "popover"] {
            assert!(js.contains(&format!("  {name}: {{\n")));
            assert!(js.contains(&format!("var(--{name}-foreground)")));
        }
    }

    #[test]
    fn test_web_tokens_dts() {
        let dts = emit_web_tokens_dts();
        assert!(dts.contains("  readonly border: string;\n"));
        assert!(dts.contains(
            "  readonly muted: { readonly DEFAULT: string; readonly foreground: string };\n"
        ));
        assert_eq!(dts.matches("readonly ").count(), 5 + 7 * 3);
    }
}
