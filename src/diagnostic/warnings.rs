//! Deduplicated build warnings.

use rustc_hash::FxHashSet;

/// Warnings collected during one build.
///
/// Passed explicitly through the emitters. Each distinct message is logged
/// and recorded once, no matter how many emitters hit it.
#[derive(Debug, Clone, Default)]
pub struct Warnings {
    seen: FxHashSet<String>,
    messages: Vec<String>,
}

impl Warnings {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning. Returns `false` if it was already recorded.
    pub fn push(&mut self, message: impl Into<String>) -> bool {
        let message = message.into();
        if !self.seen.insert(message.clone()) {
            return false;
        }
        tracing::warn!("{message}");
        self.messages.push(message);
        true
    }

    /// Number of distinct warnings.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Consume into messages in first-seen order.
    pub fn into_vec(self) -> Vec<String> {
        self.messages
    }
}
