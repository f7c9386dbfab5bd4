//! Error rendering and build warnings.

mod format;
mod warnings;

pub use format::{format_error, DiagnosticOptions};
pub use warnings::Warnings;
