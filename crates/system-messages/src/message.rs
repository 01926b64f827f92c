//! The role-keyed [`SystemMessage`] entry.

use serde::{Deserialize, Serialize};

/// Role of the fallback message returned for missing or unknown roles.
pub const DEFAULT_ROLE: &str = "default";

/// A single system message, stored under its role.
///
/// The role is redundant with the key in the persisted map, but both are
/// written so the file format stays `{"<role>": {"role": ..., "content": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessage {
    /// Lookup key, e.g. `"default"` or `"reviewer"`.
    pub role: String,
    /// Arbitrary message text.
    pub content: String,
}

impl SystemMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Shorthand for a message under [`DEFAULT_ROLE`].
    pub fn default_role(content: impl Into<String>) -> Self {
        Self::new(DEFAULT_ROLE, content)
    }

    /// Whether this is the protected fallback message.
    pub fn is_default(&self) -> bool {
        self.role == DEFAULT_ROLE
    }
}
