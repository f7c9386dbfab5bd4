//! Semantic mapping from shadcn CSS variables to token paths.
//!
//! This table is the only contract between the internal token vocabulary and
//! the CSS variable names the component library reads.
//!
//! `secondary`, `accent` and `muted` all resolve to the neutral
//! `bg.surfaceAlt` token rather than the brand color of the same name: the
//! component library uses those roles for low-emphasis backgrounds.

use crate::schema::Mode;

/// One shadcn variable and where its value comes from in each theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingItem {
    /// Variable name without the leading `--`.
    pub shadcn_var: &'static str,
    /// Token path for the light theme.
    pub light_path: &'static str,
    /// Token path for the dark theme.
    pub dark_path: &'static str,
    /// Comment emitted next to the variable.
    pub comment: &'static str,
}

impl MappingItem {
    /// Token path for `mode`.
    pub const fn path(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Light => self.light_path,
            Mode::Dark => self.dark_path,
        }
    }
}

macro_rules! mapping {
    ($var:literal => $token:literal, $comment:literal) => {
        MappingItem {
            shadcn_var: $var,
            light_path: concat!("themes.light.colors.", $token, ".value"),
            dark_path: concat!("themes.dark.colors.", $token, ".value"),
            comment: $comment,
        }
    };
}

/// Shadcn semantic mapping, in emission order.
pub const SHADCN_MAPPING: &[MappingItem] = &[
    mapping!("background" => "bg.main", "Rodia bg.main"),
    mapping!("foreground" => "text.main", "Rodia text.main"),
    mapping!("primary" => "brand.primary", "Rodia brand.primary"),
    mapping!("primary-foreground" => "brand.onPrimary", "Rodia brand.onPrimary"),
    mapping!("secondary" => "bg.surfaceAlt", "Rodia bg.surfaceAlt (for shadcn secondary)"),
    mapping!("accent" => "bg.surfaceAlt", "Rodia bg.surfaceAlt (for shadcn accent)"),
    mapping!("destructive" => "semantic.danger", "Rodia semantic.danger"),
    mapping!("muted" => "bg.surfaceAlt", "Rodia bg.surfaceAlt"),
    mapping!("border" => "border.default", "Rodia border.default"),
];

/// Look up a mapping entry by variable name.
pub fn find(shadcn_var: &str) -> Option<&'static MappingItem> {
    SHADCN_MAPPING.iter().find(|m| m.shadcn_var == shadcn_var)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::require_hex;
    use crate::schema::{validate, REQUIRED_COLOR_PATHS};
    use crate::test_support::sample_tokens;

    #[test]
    fn test_low_emphasis_roles_use_surface() {
        for var in ["secondary", "accent", "muted"] {
            let item = find(var).unwrap();
            assert_eq!(item.light_path, "themes.light.colors.bg.surfaceAlt.value");
            assert_eq!(item.dark_path, "themes.dark.colors.bg.surfaceAlt.value");
        }
    }

    #[test]
    fn test_paths_mirror_between_modes() {
        for item in SHADCN_MAPPING {
            let light = item.light_path.strip_prefix("themes.light.").unwrap();
            let dark = item.dark_path.strip_prefix("themes.dark.").unwrap();
            assert_eq!(light, dark, "{}", item.shadcn_var);
        }
    }

    #[test]
    fn test_every_path_is_schema_required() {
        let required: Vec<String> = REQUIRED_COLOR_PATHS
            .iter()
            .flat_map(|(group, keys)| keys.iter().map(move |k| format!("{group}.{k}")))
            .collect();
        for item in SHADCN_MAPPING {
            let token = item
                .light_path
                .strip_prefix("themes.light.colors.")
                .and_then(|p| p.strip_suffix(".value"))
                .unwrap();
            assert!(required.iter().any(|r| r == token), "{token}");
        }
    }

    #[test]
    fn test_every_path_resolves_on_valid_tree() {
        let tokens = validate(sample_tokens()).unwrap();
        for item in SHADCN_MAPPING {
            for mode in Mode::ALL {
                assert!(require_hex(tokens.raw(), item.path(mode)).is_ok());
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, item) in SHADCN_MAPPING.iter().enumerate() {
            assert!(SHADCN_MAPPING[i + 1..].iter().all(|m| m.shadcn_var != item.shadcn_var));
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("primary-foreground").unwrap().comment, "Rodia brand.onPrimary");
        assert!(find("card").is_none());
    }
}
