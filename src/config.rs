//! Build configuration.
//!
//! Use [`ConfigBuilder`] to point a build at a token source and an output
//! directory. Relative paths are resolved against the root.

use std::path::{Path, PathBuf};

/// Default token source, relative to the root.
pub const DEFAULT_SOURCE: &str = "src/rodia.tokens.json";

/// Default output directory, relative to the root.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Configuration for one token build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Package root. Defaults to the current directory.
    pub root: PathBuf,
    /// Token source file.
    pub source: PathBuf,
    /// Output directory, fully regenerated on each build.
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            source: PathBuf::from(DEFAULT_SOURCE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl Config {
    /// Resolved path of the token source.
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.source)
    }

    /// Resolved path of the output directory.
    pub fn out_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }
}

/// Configuration builder for fluent API.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    root: Option<PathBuf>,
    source: Option<PathBuf>,
    out_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package root.
    ///
    /// Default: current directory
    pub fn root(mut self, root: impl AsRef<Path>) -> Self {
        self.root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Set the token source file.
    ///
    /// Default: `src/rodia.tokens.json`
    ///
    /// # Example
    ///
    /// ```
    /// use rodia_tokens::config::ConfigBuilder;
    ///
    /// let config = ConfigBuilder::new()
    ///     .root("packages/design-tokens")
    ///     .source("tokens.json")
    ///     .build();
    /// assert!(config.source_path().ends_with("design-tokens/tokens.json"));
    /// ```
    pub fn source(mut self, source: impl AsRef<Path>) -> Self {
        self.source = Some(source.as_ref().to_path_buf());
        self
    }

    /// Set the output directory.
    ///
    /// Default: `dist`
    pub fn out_dir(mut self, out_dir: impl AsRef<Path>) -> Self {
        self.out_dir = Some(out_dir.as_ref().to_path_buf());
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            root: self.root.unwrap_or(defaults.root),
            source: self.source.unwrap_or(defaults.source),
            out_dir: self.out_dir.unwrap_or(defaults.out_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_path(), Path::new("./src/rodia.tokens.json"));
        assert_eq!(config.out_path(), Path::new("./dist"));
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::new().root("/pkg").out_dir("build").build();
        assert_eq!(config.source_path(), Path::new("/pkg/src/rodia.tokens.json"));
        assert_eq!(config.out_path(), Path::new("/pkg/build"));
    }

    #[test]
    fn test_absolute_paths_ignore_root() {
        let config = ConfigBuilder::new()
            .root("/pkg")
            .source("/tmp/tokens.json")
            .build();
        assert_eq!(config.source_path(), Path::new("/tmp/tokens.json"));
    }
}
