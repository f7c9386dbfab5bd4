//! # rodia-tokens
//!
//! Design-token build pipeline for the Rodia web and mobile apps.
//!
//! A single JSON source of truth is validated against the token schema, its
//! colors are converted to shadcn-style HSL triplets, and a set of artifacts
//! is generated for front-ends that are built independently:
//!
//! - **`index.css`**: `:root` / `.dark` blocks with shadcn semantic variables,
//!   raw brand helpers and a full dump of every theme and palette color
//! - **`theme.js` / `theme.d.ts`**: the token tree as an ES module with an
//!   open type declaration
//! - **`index.js` / `index.d.ts`**: package entry
//! - **`web-tokens.js` / `web-tokens.d.ts`**: Tailwind color map over the CSS
//!   variables
//!
//! A build either writes all of them or none: everything is rendered in
//! memory first, and any validation or conversion error aborts the run.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rodia_tokens::{ConfigBuilder, TokenBuilder};
//!
//! let config = ConfigBuilder::new().root("packages/design-tokens").build();
//! let report = TokenBuilder::new(config).build()?;
//! println!("wrote {} files", report.written.len());
//! ```
//!
//! ## Modules
//!
//! - [`color`]: hex validation and hex → HSL conversion
//! - [`path`]: dot-path lookup over the raw tree
//! - [`schema`]: typed model and aggregated validation
//! - [`mapping`]: shadcn variable → token path table
//! - [`emit`]: artifact renderers
//! - [`source`]: encoding-tolerant source reader
//! - [`pipeline`]: the build itself
//! - [`diagnostic`]: error rendering and warnings

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod config;
pub mod diagnostic;
pub mod emit;
pub mod error;
pub mod mapping;
pub mod path;
pub mod pipeline;
pub mod prelude;
pub mod schema;
pub mod source;

#[cfg(test)]
mod test_support;

// =============================================================================
// High-Level API
// =============================================================================

pub use config::{Config, ConfigBuilder};
pub use error::BuildError;
pub use pipeline::{build, render_tokens, BuildReport, Rendered, TokenBuilder};

// =============================================================================
// Building blocks
// =============================================================================

pub use color::{expand_hex, hex_to_hsl_triplet, hex_to_rgb, is_hex_color, Hsl, Rgb};
pub use mapping::{MappingItem, SHADCN_MAPPING};
pub use path::{get_by_path, require_hex, TokenError};
pub use schema::{validate, Mode, RodiaTokens, SchemaError, SchemaIssue};
