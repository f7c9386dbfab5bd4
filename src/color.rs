//! Hex color validation and hex → HSL conversion.
//!
//! The HSL output uses the space-separated `"H S% L%"` triplet that
//! Tailwind/shadcn expect inside `hsl(var(--x) / <alpha-value>)`.

use std::fmt;

/// Check whether `input` is a `#RGB` or `#RRGGBB` hex color (after trimming).
pub fn is_hex_color(input: &str) -> bool {
    let s = input.trim();
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Expand a hex color to the uppercase six-digit form.
///
/// `#abc` becomes `#AABBCC`; six-digit input is only uppercased.
pub fn expand_hex(hex: &str) -> String {
    let raw = hex.trim().trim_start_matches('#');
    if raw.chars().count() == 3 {
        let doubled: String = raw.chars().flat_map(|c| [c, c]).collect();
        format!("#{doubled}").to_uppercase()
    } else {
        format!("#{raw}").to_uppercase()
    }
}

// ============================================================================
// RGB
// ============================================================================

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Parse a hex color into RGB channels.
///
/// Returns `None` for anything that is not a valid hex color, so callers can
/// tell "invalid input" apart from a crash.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    if !is_hex_color(hex) {
        return None;
    }
    let full = expand_hex(hex);
    let raw = full.get(1..7)?;
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(raw.get(range)?, 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

// ============================================================================
// HSL
// ============================================================================

/// An HSL color with integer components.
///
/// `h` is in `[0, 360)`, `s` and `l` are percentages in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: u16,
    /// Saturation percentage.
    pub s: u8,
    /// Lightness percentage.
    pub l: u8,
}

impl Hsl {
    /// Convert an RGB color.
    ///
    /// Components are computed in full precision and rounded exactly once.
    #[allow(clippy::many_single_char_names, clippy::float_cmp)]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;
        let mut h = 0.0;
        let mut s = 0.0;

        if delta != 0.0 {
            s = delta / (1.0 - (2.0 * l - 1.0).abs());
            h = if max == r {
                ((g - b) / delta) % 6.0
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            h *= 60.0;
            if h < 0.0 {
                h += 360.0;
            }
        }

        // Rounding can land on 360, which is the same hue as 0.
        let h = (h.round() as u16) % 360;
        let s = (s * 100.0).round().clamp(0.0, 100.0) as u8;
        let l = (l * 100.0).round().clamp(0.0, 100.0) as u8;
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// Convert a hex color to its HSL components.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(Hsl::from_rgb)
}

/// Convert a hex color to the `"H S% L%"` triplet.
///
/// Returns `None` if `hex` is not a valid hex color.
pub fn hex_to_hsl_triplet(hex: &str) -> Option<String> {
    hex_to_hsl(hex).map(|hsl| hsl.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color_accepts_short_and_long() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#FFAA00"));
        assert!(is_hex_color("  #00e5a8 \n"));
    }

    #[test]
    fn test_is_hex_color_rejects_invalid() {
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color(""));
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("#FFAA00FF"));
        assert!(!is_hex_color("#ÿÿÿ"));
    }

    #[test]
    fn test_expand_hex() {
        assert_eq!(expand_hex("#abc"), "#AABBCC");
        assert_eq!(expand_hex("#ff6a00"), "#FF6A00");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF6A00"), Some(Rgb { r: 255, g: 106, b: 0 }));
        assert_eq!(hex_to_rgb("#0f0"), Some(Rgb { r: 0, g: 255, b: 0 }));
        assert_eq!(hex_to_rgb(" #000000 "), Some(Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn test_hex_to_rgb_invalid_is_none() {
        assert_eq!(hex_to_rgb("#12345"), None);
        assert_eq!(hex_to_rgb("red"), None);
        assert_eq!(hex_to_rgb(""), None);
    }

    #[test]
    fn test_hsl_triplet_fixed_palette() {
        assert_eq!(hex_to_hsl_triplet("#FFFFFF").as_deref(), Some("0 0% 100%"));
        assert_eq!(hex_to_hsl_triplet("#000000").as_deref(), Some("0 0% 0%"));
        assert_eq!(hex_to_hsl_triplet("#FF6A00").as_deref(), Some("25 100% 50%"));
        assert_eq!(hex_to_hsl_triplet("#00E5A8").as_deref(), Some("164 100% 45%"));
    }

    #[test]
    fn test_hsl_triplet_ranges() {
        for hex in ["#FFFFFF", "#000000", "#FF6A00", "#00E5A8", "#FF0001", "#123", "#808080"] {
            let hsl = hex_to_hsl(hex).unwrap();
            assert!(hsl.h < 360, "{hex}: {hsl}");
            assert!(hsl.s <= 100, "{hex}: {hsl}");
            assert!(hsl.l <= 100, "{hex}: {hsl}");
        }
    }

    #[test]
    fn test_hue_near_full_turn_wraps_to_zero() {
        // #FF0001 has a hue of ~359.76 degrees.
        assert_eq!(hex_to_hsl_triplet("#FF0001").as_deref(), Some("0 100% 50%"));
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(hex_to_hsl_triplet("#f00").as_deref(), Some("0 100% 50%"));
        assert_eq!(hex_to_hsl_triplet("#0f0").as_deref(), Some("120 100% 50%"));
        assert_eq!(hex_to_hsl_triplet("#00f").as_deref(), Some("240 100% 50%"));
        assert_eq!(hex_to_hsl_triplet("#808080").as_deref(), Some("0 0% 50%"));
    }

    #[test]
    fn test_hsl_triplet_invalid_is_none() {
        assert_eq!(hex_to_hsl_triplet("#zzz"), None);
    }

    #[test]
    fn test_hsl_triplet_is_stable() {
        let first = hex_to_hsl_triplet("#3A7BD5");
        for _ in 0..10 {
            assert_eq!(hex_to_hsl_triplet("#3A7BD5"), first);
        }
    }
}
