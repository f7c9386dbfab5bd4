//! Artifact emitters.
//!
//! Each emitter only reads the validated tree and returns the file contents;
//! nothing here touches the filesystem.
//!
//! - [`css`] - `index.css` (shadcn mapping, helpers, color and palette dumps)
//! - [`theme`] - `theme.js` / `theme.d.ts`
//! - [`index`] - `index.js` / `index.d.ts`
//! - [`web`] - `web-tokens.js` / `web-tokens.d.ts`
//! - [`walk`] - hex leaf collection and kebab-case naming

mod css;
mod index;
mod theme;
mod walk;
mod web;

pub use css::{emit_css, DEFAULT_CARD_RADIUS};
pub use index::{emit_index_dts, emit_index_js};
pub use theme::{emit_theme_dts, emit_theme_js};
pub use walk::{collect_hex_vars, collect_theme_color_vars, to_css_segment, CssColorVar};
pub use web::{emit_web_tokens_dts, emit_web_tokens_js};

use crate::diagnostic::Warnings;
use crate::error::BuildError;
use crate::schema::RodiaTokens;

/// Header of every generated JS/TS file.
pub const BANNER: &str =
    "/* eslint-disable */\n// AUTO-GENERATED by rodia-tokens. Do not edit directly.\n\n";

/// Generated file names, in write order.
pub const ARTIFACT_NAMES: [&str; 7] = [
    "index.css",
    "theme.js",
    "theme.d.ts",
    "index.js",
    "index.d.ts",
    "web-tokens.js",
    "web-tokens.d.ts",
];

/// One generated file, fully rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// File contents.
    pub contents: String,
}

/// Render every artifact.
///
/// Either all artifacts are returned or the first error is; callers write
/// nothing until this succeeds.
pub fn emit_all(tokens: &RodiaTokens, warnings: &mut Warnings) -> Result<Vec<Artifact>, BuildError> {
    let [css, theme_js, theme_dts, index_js, index_dts, web_js, web_dts] = ARTIFACT_NAMES;
    let artifacts = vec![
        Artifact {
            file_name: css,
            contents: emit_css(tokens, warnings)?,
        },
        Artifact {
            file_name: theme_js,
            contents: emit_theme_js(tokens)?,
        },
        Artifact {
            file_name: theme_dts,
            contents: emit_theme_dts(),
        },
        Artifact {
            file_name: index_js,
            contents: emit_index_js(),
        },
        Artifact {
            file_name: index_dts,
            contents: emit_index_dts(),
        },
        Artifact {
            file_name: web_js,
            contents: emit_web_tokens_js(),
        },
        Artifact {
            file_name: web_dts,
            contents: emit_web_tokens_dts(),
        },
    ];
    for artifact in &artifacts {
        tracing::debug!(file = artifact.file_name, bytes = artifact.contents.len(), "rendered");
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate;
    use crate::test_support::sample_tokens;

    #[test]
    fn test_emit_all_names_and_order() {
        let tokens = validate(sample_tokens()).unwrap();
        let artifacts = emit_all(&tokens, &mut Warnings::new()).unwrap();
        let names: Vec<_> = artifacts.iter().map(|a| a.file_name).collect();
        assert_eq!(names, ARTIFACT_NAMES);
        assert!(artifacts.iter().all(|a| !a.contents.is_empty()));
    }

    #[test]
    fn test_js_files_carry_banner() {
        let tokens = validate(sample_tokens()).unwrap();
        let artifacts = emit_all(&tokens, &mut Warnings::new()).unwrap();
        for artifact in artifacts.iter().filter(|a| a.file_name != "index.css") {
            assert!(artifact.contents.starts_with(BANNER), "{}", artifact.file_name);
        }
    }
}
