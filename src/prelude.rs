//! Prelude module for convenient imports.
//!
//! ```ignore
//! use rodia_tokens::prelude::*;
//! ```

// Build
pub use crate::config::{Config, ConfigBuilder};
pub use crate::pipeline::{build, render_tokens, BuildReport, Rendered, TokenBuilder};

// Errors & diagnostics
pub use crate::diagnostic::{format_error, DiagnosticOptions, Warnings};
pub use crate::error::BuildError;
pub use crate::path::TokenError;
pub use crate::schema::{SchemaError, SchemaIssue};

// Tokens
pub use crate::schema::{validate, Mode, RodiaTokens, Theme, ThemeColors};

// Colors
pub use crate::color::{expand_hex, hex_to_hsl_triplet, hex_to_rgb, is_hex_color};

// Emitters
pub use crate::emit::{emit_all, Artifact, ARTIFACT_NAMES};
pub use crate::mapping::{MappingItem, SHADCN_MAPPING};
