//! Terminal formatting for build errors.

use std::fmt::Write;

use crate::error::BuildError;

// ============================================================================
// Options
// ============================================================================

/// Options for controlling error formatting.
///
/// # Example
///
/// ```ignore
/// use rodia_tokens::diagnostic::DiagnosticOptions;
///
/// // Default: colored output with hints
/// let opts = DiagnosticOptions::default();
///
/// // Plain text (no ANSI colors) for logs and CI
/// let opts = DiagnosticOptions::plain().with_hints(false);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticOptions {
    /// Whether to use ANSI colors in output.
    pub colored: bool,
    /// Whether to include `help:` lines.
    pub hints: bool,
}

impl Default for DiagnosticOptions {
    fn default() -> Self {
        Self {
            colored: true,
            hints: true,
        }
    }
}

impl DiagnosticOptions {
    /// Create options for colored terminal output.
    pub fn colored() -> Self {
        Self::default()
    }

    /// Create options for plain text output (no ANSI colors).
    pub fn plain() -> Self {
        Self {
            colored: false,
            ..Self::default()
        }
    }

    /// Set whether to use colors.
    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Set whether to include hints.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }
}

// ============================================================================
// Coloring
// ============================================================================

#[cfg(feature = "colored-diagnostics")]
fn colorize_error(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.red().bold().to_string()
}

#[cfg(feature = "colored-diagnostics")]
fn colorize_path(text: &str) -> String {
    use owo_colors::OwoColorize;
    text.cyan().to_string()
}

#[cfg(not(feature = "colored-diagnostics"))]
fn colorize_error(text: &str) -> String {
    text.to_owned()
}

#[cfg(not(feature = "colored-diagnostics"))]
fn colorize_path(text: &str) -> String {
    text.to_owned()
}

fn paint_error(options: &DiagnosticOptions, text: &str) -> String {
    if options.colored {
        colorize_error(text)
    } else {
        text.to_owned()
    }
}

fn paint_path(options: &DiagnosticOptions, text: &str) -> String {
    if options.colored {
        colorize_path(text)
    } else {
        text.to_owned()
    }
}

// ============================================================================
// Rendering
// ============================================================================

const BAR: &str = "│";

/// Render a build error for the terminal.
///
/// Schema failures list one issue per line so every path can be fixed in a
/// single pass.
pub fn format_error(err: &BuildError, options: &DiagnosticOptions) -> String {
    let mut out = String::new();
    let label = paint_error(options, "error");

    match err.schema() {
        Some(schema) => {
            let noun = if schema.len() == 1 { "issue" } else { "issues" };
            let _ = writeln!(out, "{label}: schema validation failed ({} {noun})", schema.len());
            for issue in schema.iter() {
                let path = paint_path(options, issue.display_path());
                let _ = writeln!(out, "  {BAR} {path}: {}", issue.message);
            }
            if options.hints {
                let _ = writeln!(out, "  = help: fix every listed path in the token source and rerun");
            }
        }
        None => {
            let _ = writeln!(out, "{label}: {err}");
            if options.hints && err.is_write_phase() {
                let _ = writeln!(
                    out,
                    "  = help: the output directory may be incomplete; rerun the build"
                );
            }
        }
    }
    out
}
