//! Schema validation error type.

use std::fmt;

use thiserror::Error;

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dot-path of the offending field. Empty for the document root.
    pub path: String,
    /// Human-readable reason.
    pub message: String,
}

impl SchemaIssue {
    /// Create an issue at `path`.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The path as displayed, `(root)` for the document itself.
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() { "(root)" } else { &self.path }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_path(), self.message)
    }
}

/// Every violation found in one validation pass.
///
/// Validation never stops at the first problem, so an author can fix the
/// whole file in one go.
#[derive(Debug, Clone, Error)]
#[error("schema validation failed:\n{}", join_issues(.issues))]
pub struct SchemaError {
    /// Violations in document order.
    pub issues: Vec<SchemaIssue>,
}

impl SchemaError {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Whether there are no violations.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Iterate over the violations.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.issues.iter()
    }
}

fn join_issues(issues: &[SchemaIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = SchemaIssue::new("themes.dark.colors", "Required");
        assert_eq!(issue.to_string(), "themes.dark.colors: Required");
    }

    #[test]
    fn test_root_issue_display() {
        let issue = SchemaIssue::new("", "Expected object, received array");
        assert_eq!(issue.to_string(), "(root): Expected object, received array");
    }

    #[test]
    fn test_error_joins_all_issues() {
        let err = SchemaError {
            issues: vec![
                SchemaIssue::new("a.b", "Required"),
                SchemaIssue::new("c", "Expected string, received number"),
            ],
        };
        assert_eq!(err.len(), 2);
        assert_eq!(
            err.to_string(),
            "schema validation failed:\na.b: Required\nc: Expected string, received number"
        );
    }
}
