//! Token schema: typed model and aggregated validation.
//!
//! - [`validate`] checks raw JSON against the schema and returns the typed,
//!   immutable [`RodiaTokens`] tree, or a [`SchemaError`] listing every
//!   violated path at once.
//! - The schema is open: unknown keys are accepted and kept in the retained
//!   raw tree ([`RodiaTokens::raw`]).

mod error;
mod model;
mod validate;

pub use error::{SchemaError, SchemaIssue};
pub use model::{
    BgColors, BorderColors, BrandColors, ColorToken, Layout, Mode, RodiaTokens, SemanticColors,
    TextColors, Theme, ThemeColors, Themes, TypeScale, TypeStyle, Typography,
};
pub use validate::{validate, REQUIRED_COLOR_PATHS};
