//! Build error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::path::TokenError;
use crate::schema::SchemaError;

/// Error type for a token build.
///
/// Every variant is fatal: a build either writes every artifact or none.
///
/// # Example
///
/// ```ignore
/// match TokenBuilder::new(config).build() {
///     Ok(report) => println!("wrote {} files", report.written.len()),
///     Err(BuildError::Schema(err)) => {
///         for issue in err.iter() {
///             eprintln!("{issue}");
///         }
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum BuildError {
    /// The source file could not be read.
    #[error("failed to read {file}: {source}")]
    Read {
        /// Source file name.
        file: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source bytes are not valid text in the detected encoding.
    #[error("failed to decode {file}: {reason}")]
    Decode {
        /// Source file name.
        file: String,
        /// What went wrong.
        reason: &'static str,
    },

    /// The source text is not valid JSON.
    #[error("failed to parse JSON ({file}): {message}")]
    Parse {
        /// Source file name.
        file: String,
        /// Parser message.
        message: String,
    },

    /// The document does not match the token schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A mapped token is missing or not convertible.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The token tree could not be serialized.
    #[error("failed to serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output directory could not be created.
    #[error("failed to create {}: {source}", .path.display())]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    /// The schema error, if this is a validation failure.
    pub fn schema(&self) -> Option<&SchemaError> {
        match self {
            Self::Schema(err) => Some(err),
            _ => None,
        }
    }

    /// Whether any file may already have been written when this occurred.
    pub fn is_write_phase(&self) -> bool {
        matches!(self, Self::CreateDir { .. } | Self::Write { .. })
    }
}
