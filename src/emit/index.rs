//! `index.js` / `index.d.ts`: package entry re-exporting the theme.

use super::BANNER;

/// Render `index.js`.
pub fn emit_index_js() -> String {
    format!("{BANNER}export {{ rodiaTheme }} from \"./theme.js\";\n\n")
}

/// Render `index.d.ts`.
pub fn emit_index_dts() -> String {
    format!(
        "{BANNER}export {{ rodiaTheme }} from \"./theme.js\";\n\
         export type {{ RodiaTheme }} from \"./theme.js\";\n\n"
    )
}
