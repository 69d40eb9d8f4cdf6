use crate::domain::{is_input_whitespace, is_separator, EmailCandidate};

/// Splits bulk input on runs of whitespace, commas and semicolons, keeping
/// the non-empty pieces in input order.
pub fn tokenize(raw: &str) -> Vec<EmailCandidate> {
    pieces(raw).map(EmailCandidate::from_token).collect()
}

pub fn tokenize_str(raw: &str) -> Vec<String> {
    pieces(raw).map(str::to_string).collect()
}

pub(crate) fn pieces(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(is_separator)
        .map(|piece| piece.trim_matches(is_input_whitespace))
        .filter(|piece| !piece.is_empty())
}
