//! Shared fixtures for unit tests.

use serde_json::{json, Value};

/// A complete, valid token document.
pub fn sample_tokens() -> Value {
    json!({
        "themes": {
            "light": {
                "colors": {
                    "bg": { "main": { "value": "#FFFFFF" }, "surfaceAlt": { "value": "#F4F4F5" } },
                    "text": { "main": { "value": "#111111" }, "muted": { "value": "#6B6B6B" } },
                    "brand": {
                        "primary": { "value": "#FF6A00", "description": "Rodia orange" },
                        "secondary": { "value": "#00E5A8" },
                        "accent": { "value": "#3A7BD5" },
                        "onPrimary": { "value": "#fff" }
                    },
                    "border": { "default": { "value": "#E4E4E7" } },
                    "semantic": { "danger": { "value": "#E5484D" } }
                }
            },
            "dark": {
                "colors": {
                    "bg": { "main": { "value": "#000000" }, "surfaceAlt": { "value": "#1E1E24" } },
                    "text": { "main": { "value": "#FAFAFA" }, "muted": { "value": "#A1A1AA" } },
                    "brand": {
                        "primary": { "value": "#FF7A1A" },
                        "secondary": { "value": "#00C896" },
                        "accent": { "value": "#5B93E0" },
                        "onPrimary": { "value": "#000" }
                    },
                    "border": { "default": { "value": "#27272A" } },
                    "semantic": { "danger": { "value": "#F2555A" } }
                }
            }
        },
        "layout": { "radii": { "card": { "value": 12 } }, "spacing": { "md": 8 } },
        "typography": {
            "scale": {
                "heading": { "size": 24, "weight": "700" },
                "body": { "size": 16, "weight": "400" }
            }
        },
        "elevation": { "card": { "shadowOpacity": 0.08 } },
        "palette": {
            "orange": { "500": "#FF6A00", "600": "#E65F00" },
            "mint": { "500": "#00E5A8" },
            "gray": { "900": "#18181B" }
        }
    })
}
