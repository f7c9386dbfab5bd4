//! Token build pipeline: read → validate → render → write.
//!
//! # Example
//!
//! ```ignore
//! use rodia_tokens::{ConfigBuilder, TokenBuilder};
//!
//! let config = ConfigBuilder::new().root("packages/design-tokens").build();
//! let report = TokenBuilder::new(config).build()?;
//! for path in &report.written {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! Every artifact is rendered in memory before the output directory is
//! touched, so a validation or conversion failure leaves it unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::Config;
use crate::diagnostic::Warnings;
use crate::emit::{emit_all, Artifact};
use crate::error::BuildError;
use crate::schema::validate;
use crate::source::read_source;

/// Result of a successful build.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Output directory.
    pub out_dir: PathBuf,
    /// Written files, in write order.
    pub written: Vec<PathBuf>,
    /// Distinct warnings raised while rendering.
    pub warnings: Vec<String>,
}

/// Artifacts rendered in memory, not yet written.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Every generated file.
    pub artifacts: Vec<Artifact>,
    /// Warnings raised while rendering.
    pub warnings: Warnings,
}

/// Validate a parsed token document and render every artifact.
pub fn render_tokens(raw: Value) -> Result<Rendered, BuildError> {
    let tokens = validate(raw)?;
    tracing::debug!("token schema ok");

    let mut warnings = Warnings::new();
    let artifacts = emit_all(&tokens, &mut warnings)?;
    Ok(Rendered {
        artifacts,
        warnings,
    })
}

/// Builder-style entry point for a token build.
#[derive(Debug, Clone, Default)]
pub struct TokenBuilder {
    config: Config,
}

impl TokenBuilder {
    /// Create a builder for `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read and validate the source, then render every artifact without
    /// writing anything.
    pub fn render(&self) -> Result<Rendered, BuildError> {
        let source = self.config.source_path();
        tracing::debug!(source = %source.display(), "reading tokens");
        render_tokens(read_source(&source)?)
    }

    /// Run the full build and write every artifact.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let rendered = self.render()?;
        let out_dir = self.config.out_path();
        let written = write_artifacts(&out_dir, &rendered.artifacts)?;

        let names: Vec<&str> = rendered.artifacts.iter().map(|a| a.file_name).collect();
        tracing::info!("generated {}: {}", dir_label(&out_dir), summarize(&names));

        Ok(BuildReport {
            out_dir,
            written,
            warnings: rendered.warnings.into_vec(),
        })
    }
}

/// Build with `config`.
pub fn build(config: Config) -> Result<BuildReport, BuildError> {
    TokenBuilder::new(config).build()
}

fn write_artifacts(out_dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, BuildError> {
    fs::create_dir_all(out_dir).map_err(|source| BuildError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    artifacts
        .iter()
        .map(|artifact| {
            let path = out_dir.join(artifact.file_name);
            fs::write(&path, &artifact.contents).map_err(|source| BuildError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "wrote");
            Ok(path)
        })
        .collect()
}

fn dir_label(dir: &Path) -> String {
    dir.file_name()
        .map_or_else(|| dir.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Join file names, folding `x.d.ts` into a preceding `x.js`.
///
/// `["theme.js", "theme.d.ts"]` becomes `theme.js/.d.ts`.
fn summarize(names: &[&str]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if let Some(stem) = name.strip_suffix(".d.ts")
            && let Some(last) = parts.last_mut()
            && last.strip_suffix(".js") == Some(stem)
        {
            last.push_str("/.d.ts");
            continue;
        }
        parts.push((*name).to_owned());
    }
    parts.join(", ")
}
