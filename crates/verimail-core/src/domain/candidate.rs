use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trimmed, non-empty token lifted out of bulk input. It has not been
/// judged valid or invalid yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailCandidate(String);

impl EmailCandidate {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim_matches(is_input_whitespace);
        if trimmed.is_empty() {
            return Err(CoreError::EmptyCandidate);
        }
        if trimmed.chars().any(is_separator) {
            return Err(CoreError::ContainsSeparator(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Caller guarantees `token` is trimmed, non-empty and separator free.
    pub(crate) fn from_token(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for EmailCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailCandidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whitespace as browsers treat it in `\s` and `trim`: Unicode White_Space
/// without NEL, plus the byte-order mark.
pub fn is_input_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{0085}') || ch == '\u{FEFF}'
}

/// Characters that delimit candidates in bulk input.
pub fn is_separator(ch: char) -> bool {
    is_input_whitespace(ch) || ch == ',' || ch == ';'
}
