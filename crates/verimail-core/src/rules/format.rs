use once_cell::sync::Lazy;
use regex::Regex;

/// Permissive format rule: local part, a single `@`, domain labels and an
/// alphabetic TLD of at least two letters. No IDN or quoted local parts.
pub const EMAIL_FORMAT_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_FORMAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_FORMAT_PATTERN).expect("email format pattern compiles"));

pub fn is_valid_format(candidate: &str) -> bool {
    EMAIL_FORMAT_RE.is_match(candidate)
}
