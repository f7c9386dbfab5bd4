//! Typed view of the guaranteed-present token fields.
//!
//! Only the fields the schema requires are typed. Everything else stays in
//! the raw JSON tree retained by [`RodiaTokens`], which the emitters walk
//! for passthrough data (extra color categories, palette, elevation).

use serde_json::Value;

/// A color token: a trimmed `#RGB` / `#RRGGBB` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken {
    /// Hex color string.
    pub value: String,
}

/// `bg` color group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgColors {
    /// `bg.main`
    pub main: ColorToken,
    /// `bg.surfaceAlt`
    pub surface_alt: ColorToken,
}

/// `text` color group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextColors {
    /// `text.main`
    pub main: ColorToken,
}

/// `brand` color group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandColors {
    /// `brand.primary`
    pub primary: ColorToken,
    /// `brand.secondary`
    pub secondary: ColorToken,
    /// `brand.accent`
    pub accent: ColorToken,
    /// `brand.onPrimary`
    pub on_primary: ColorToken,
}

/// `border` color group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderColors {
    /// `border.default`
    pub default: ColorToken,
}

/// `semantic` color group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticColors {
    /// `semantic.danger`
    pub danger: ColorToken,
}

/// Minimum color set every theme must define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// Backgrounds.
    pub bg: BgColors,
    /// Text.
    pub text: TextColors,
    /// Brand colors.
    pub brand: BrandColors,
    /// Borders.
    pub border: BorderColors,
    /// Semantic colors.
    pub semantic: SemanticColors,
}

/// A theme variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme colors.
    pub colors: ThemeColors,
}

/// The light and dark theme pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themes {
    /// Light theme, emitted as `:root`.
    pub light: Theme,
    /// Dark theme, emitted as `.dark`.
    pub dark: Theme,
}

/// Theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Light theme.
    Light,
    /// Dark theme.
    Dark,
}

impl Mode {
    /// Both modes in emission order.
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    /// Key under `themes`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    /// CSS selector for the block holding this mode's variables.
    pub const fn selector(self) -> &'static str {
        match self {
            Mode::Light => ":root",
            Mode::Dark => ".dark",
        }
    }

    /// Dot-path of this mode's color tree.
    pub fn colors_path(self) -> String {
        format!("themes.{}.colors", self.as_str())
    }
}

/// `layout` section. Only the card radius is typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// `layout.radii.card.value` in pixels.
    pub card_radius: Option<f64>,
}

/// One typographic style.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeStyle {
    /// Font size, always positive.
    pub size: f64,
    /// Font weight, never empty.
    pub weight: String,
}

/// `typography.scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeScale {
    /// Heading style.
    pub heading: TypeStyle,
    /// Body style.
    pub body: TypeStyle,
}

/// `typography` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Typography {
    /// Type scale, if defined.
    pub scale: Option<TypeScale>,
}

/// The validated token tree.
///
/// Constructed only by [`validate`](super::validate); immutable afterwards.
#[derive(Debug, Clone)]
pub struct RodiaTokens {
    pub(super) themes: Themes,
    pub(super) layout: Option<Layout>,
    pub(super) typography: Option<Typography>,
    pub(super) raw: Value,
}

impl RodiaTokens {
    /// The light/dark theme pair.
    pub fn themes(&self) -> &Themes {
        &self.themes
    }

    /// The theme for `mode`.
    pub fn theme(&self, mode: Mode) -> &Theme {
        match mode {
            Mode::Light => &self.themes.light,
            Mode::Dark => &self.themes.dark,
        }
    }

    /// The `layout` section, if present.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// The `typography` section, if present.
    pub fn typography(&self) -> Option<&Typography> {
        self.typography.as_ref()
    }

    /// The full source tree, unknown fields included.
    ///
    /// Required color values are stored trimmed.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
