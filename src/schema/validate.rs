//! Aggregating schema validator.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use super::error::{SchemaError, SchemaIssue};
use super::model::{
    BgColors, BorderColors, BrandColors, ColorToken, Layout, RodiaTokens, SemanticColors,
    TextColors, Theme, ThemeColors, Themes, TypeScale, TypeStyle, Typography,
};
use crate::color::is_hex_color;

/// Color tokens every theme must define, grouped by category.
///
/// Paths are relative to `themes.<mode>.colors`. The generated type
/// declarations are derived from the same table.
pub const REQUIRED_COLOR_PATHS: &[(&str, &[&str])] = &[
    ("bg", &["main", "surfaceAlt"]),
    ("text", &["main"]),
    ("brand", &["primary", "secondary", "accent", "onPrimary"]),
    ("border", &["default"]),
    ("semantic", &["danger"]),
];

/// Validate a parsed token document.
///
/// Unknown keys are accepted anywhere. On success the raw tree is retained
/// with required color values trimmed; on failure every violation is
/// reported and no tree is returned.
pub fn validate(mut raw: Value) -> Result<RodiaTokens, SchemaError> {
    let mut v = Validator::default();

    let mut themes = None;
    let mut layout = None;
    let mut typography = None;

    if let Some(root) = v.object(Some(&raw), "") {
        themes = v.themes(root.get("themes"), "themes");
        if let Some(value) = root.get("layout") {
            layout = v.layout(value, "layout");
        }
        if let Some(value) = root.get("typography") {
            typography = v.typography(value, "typography");
        }
        // `elevation` and `palette` accept any shape.
    }

    let themes = match themes {
        Some(themes) if v.issues.is_empty() => themes,
        _ => return Err(SchemaError { issues: v.issues }),
    };

    for (path, trimmed) in v.trimmed {
        if let Some(slot) = raw.pointer_mut(&json_pointer(&path)) {
            *slot = Value::String(trimmed);
        }
    }

    Ok(RodiaTokens {
        themes,
        layout,
        typography,
        raw,
    })
}

// ============================================================================
// Validator
// ============================================================================

#[derive(Clone, Copy)]
enum Bound {
    Positive,
    NonNegative,
}

#[derive(Default)]
struct Validator {
    issues: Vec<SchemaIssue>,
    /// Color values that need trimming in the retained tree.
    trimmed: Vec<(String, String)>,
}

impl Validator {
    fn issue(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(SchemaIssue::new(path, message));
    }

    fn object<'a>(&mut self, value: Option<&'a Value>, path: &str) -> Option<&'a Map<String, Value>> {
        match value {
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                self.issue(path, expected("object", other));
                None
            }
            None => {
                self.issue(path, "Required");
                None
            }
        }
    }

    fn number(&mut self, value: Option<&Value>, path: &str, bound: Bound) -> Option<f64> {
        let n = match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(other) => {
                self.issue(path, expected("number", other));
                return None;
            }
            None => {
                self.issue(path, "Required");
                return None;
            }
        };
        let Some(n) = n else {
            self.issue(path, "Expected number, received unrepresentable number");
            return None;
        };
        match bound {
            Bound::Positive if n <= 0.0 => {
                self.issue(path, "Number must be greater than 0");
                None
            }
            Bound::NonNegative if n < 0.0 => {
                self.issue(path, "Number must be greater than or equal to 0");
                None
            }
            _ => Some(n),
        }
    }

    fn non_empty_string(&mut self, value: Option<&Value>, path: &str) -> Option<String> {
        match value {
            Some(Value::String(s)) if s.is_empty() => {
                self.issue(path, "String must contain at least 1 character(s)");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.issue(path, expected("string", other));
                None
            }
            None => {
                self.issue(path, "Required");
                None
            }
        }
    }

    fn color(&mut self, value: Option<&Value>, path: &str) -> Option<ColorToken> {
        let token = self.object(value, path)?;
        let value_path = join(path, "value");
        match token.get("value") {
            Some(Value::String(s)) if is_hex_color(s) => {
                let trimmed = s.trim();
                if trimmed.len() != s.len() {
                    self.trimmed.push((value_path, trimmed.to_owned()));
                }
                Some(ColorToken {
                    value: trimmed.to_owned(),
                })
            }
            Some(Value::String(_)) => {
                self.issue(&value_path, "Color must be #RGB or #RRGGBB hex");
                None
            }
            Some(other) => {
                self.issue(&value_path, expected("string", other));
                None
            }
            None => {
                self.issue(&value_path, "Required");
                None
            }
        }
    }

    fn themes(&mut self, value: Option<&Value>, path: &str) -> Option<Themes> {
        let map = self.object(value, path)?;
        let light = self.theme(map.get("light"), &join(path, "light"));
        let dark = self.theme(map.get("dark"), &join(path, "dark"));
        Some(Themes {
            light: light?,
            dark: dark?,
        })
    }

    fn theme(&mut self, value: Option<&Value>, path: &str) -> Option<Theme> {
        let theme = self.object(value, path)?;
        let colors_path = join(path, "colors");
        let colors = self.object(theme.get("colors"), &colors_path)?;

        let mut found: FxHashMap<(&'static str, &'static str), ColorToken> = FxHashMap::default();
        for &(group, keys) in REQUIRED_COLOR_PATHS {
            let group_path = join(&colors_path, group);
            let Some(group_map) = self.object(colors.get(group), &group_path) else {
                continue;
            };
            for &key in keys {
                if let Some(token) = self.color(group_map.get(key), &join(&group_path, key)) {
                    found.insert((group, key), token);
                }
            }
        }

        let mut take = |group: &'static str, key: &'static str| found.remove(&(group, key));
        Some(Theme {
            colors: ThemeColors {
                bg: BgColors {
                    main: take("bg", "main")?,
                    surface_alt: take("bg", "surfaceAlt")?,
                },
                text: TextColors {
                    main: take("text", "main")?,
                },
                brand: BrandColors {
                    primary: take("brand", "primary")?,
                    secondary: take("brand", "secondary")?,
                    accent: take("brand", "accent")?,
                    on_primary: take("brand", "onPrimary")?,
                },
                border: BorderColors {
                    default: take("border", "default")?,
                },
                semantic: SemanticColors {
                    danger: take("semantic", "danger")?,
                },
            },
        })
    }

    fn layout(&mut self, value: &Value, path: &str) -> Option<Layout> {
        let map = self.object(Some(value), path)?;
        let Some(radii) = map.get("radii") else {
            return Some(Layout::default());
        };
        let radii_path = join(path, "radii");
        let radii = self.object(Some(radii), &radii_path)?;
        let card_path = join(&radii_path, "card");
        let card = self.object(radii.get("card"), &card_path)?;
        let radius = self.number(card.get("value"), &join(&card_path, "value"), Bound::NonNegative)?;
        Some(Layout {
            card_radius: Some(radius),
        })
    }

    fn typography(&mut self, value: &Value, path: &str) -> Option<Typography> {
        let map = self.object(Some(value), path)?;
        let scale = match map.get("scale") {
            Some(scale) => Some(self.type_scale(scale, &join(path, "scale"))?),
            None => None,
        };
        Some(Typography { scale })
    }

    fn type_scale(&mut self, value: &Value, path: &str) -> Option<TypeScale> {
        let map = self.object(Some(value), path)?;
        let heading = self.type_style(map.get("heading"), &join(path, "heading"));
        let body = self.type_style(map.get("body"), &join(path, "body"));
        Some(TypeScale {
            heading: heading?,
            body: body?,
        })
    }

    fn type_style(&mut self, value: Option<&Value>, path: &str) -> Option<TypeStyle> {
        let map = self.object(value, path)?;
        let size = self.number(map.get("size"), &join(path, "size"), Bound::Positive);
        let weight = self.non_empty_string(map.get("weight"), &join(path, "weight"));
        Some(TypeStyle {
            size: size?,
            weight: weight?,
        })
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

fn json_pointer(dot_path: &str) -> String {
    dot_path
        .split('.')
        .map(|seg| format!("/{}", seg.replace('~', "~0").replace('/', "~1")))
        .collect()
}

fn expected(kind: &str, got: &Value) -> String {
    format!("Expected {kind}, received {}", kind_of(got))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
