//! `index.css`: shadcn variables plus raw Rodia helpers for both themes.

use serde_json::Value;

use super::walk::{collect_hex_vars, collect_theme_color_vars, CssColorVar};
use crate::color::hex_to_hsl_triplet;
use crate::diagnostic::Warnings;
use crate::mapping::SHADCN_MAPPING;
use crate::path::{get_by_path, require_hex, TokenError};
use crate::schema::{Mode, RodiaTokens};

/// Card radius used when `layout.radii.card.value` is absent.
pub const DEFAULT_CARD_RADIUS: &str = "16px";

/// Render `index.css`: a `:root` block for the light theme and a `.dark`
/// block for the dark theme.
///
/// Every mapped path is resolved before anything is returned, so a missing
/// or malformed color fails the whole stylesheet.
pub fn emit_css(tokens: &RodiaTokens, warnings: &mut Warnings) -> Result<String, TokenError> {
    let raw = tokens.raw();
    let radius = tokens
        .layout()
        .and_then(|layout| layout.card_radius)
        .map_or_else(|| DEFAULT_CARD_RADIUS.to_owned(), format_px);
    let palette = collect_hex_vars(get_by_path(raw, "palette"), "rd-palette", "palette", warnings);

    let mut blocks = Vec::with_capacity(Mode::ALL.len());
    for mode in Mode::ALL {
        blocks.push(emit_block(raw, mode, &radius, &palette, warnings)?);
    }
    Ok(format!("{}\n", blocks.join("\n\n")))
}

fn emit_block(
    raw: &Value,
    mode: Mode,
    radius: &str,
    palette: &[CssColorVar],
    warnings: &mut Warnings,
) -> Result<String, TokenError> {
    let mut lines = vec![
        format!("{} {{", mode.selector()),
        "  /* Shadcn Semantic Mapping (HSL triplets) */".to_owned(),
    ];

    for item in SHADCN_MAPPING {
        let hex = require_hex(raw, item.path(mode))?;
        let hsl = hsl(hex, item.shadcn_var)?;
        lines.push(format!("  --{}: {hsl}; /* {} */", item.shadcn_var, item.comment));
    }

    let colors_path = mode.colors_path();
    let primary = require_hex(raw, &format!("{colors_path}.brand.primary.value"))?;
    let on_primary = require_hex(raw, &format!("{colors_path}.brand.onPrimary.value"))?;

    lines.push(String::new());
    lines.push("  /* Rodia Raw Tokens (helpers) */".to_owned());
    lines.push(format!("  --rd-brand-primary-hex: {primary};"));
    lines.push(format!("  --rd-brand-primary-hsl: {};", hsl(primary, "rd-brand-primary")?));
    lines.push(format!("  --rd-brand-on-primary-hex: {on_primary};"));
    lines.push(format!(
        "  --rd-brand-on-primary-hsl: {};",
        hsl(on_primary, "rd-brand-on-primary")?
    ));
    lines.push(format!("  --rd-radius-card: {radius};"));

    let colors = collect_theme_color_vars(get_by_path(raw, &colors_path), &colors_path, warnings);
    push_section(&mut lines, "Rodia Theme Color Tokens (raw hex)", &colors);
    push_section(&mut lines, "Rodia Palette Tokens (raw hex)", palette);

    lines.push("}".to_owned());
    Ok(lines.join("\n"))
}

fn push_section(lines: &mut Vec<String>, title: &str, vars: &[CssColorVar]) {
    if vars.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(format!("  /* {title} */"));
    for var in vars {
        lines.push(format!("  {}: {}; /* {} */", var.var_name, var.value, var.token_path));
    }
}

fn hsl(hex: &str, var: &str) -> Result<String, TokenError> {
    hex_to_hsl_triplet(hex).ok_or_else(|| TokenError::Conversion { var: var.to_owned() })
}

/// Format a pixel length: integral values drop the fraction.
fn format_px(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}
