use crate::domain::{EmailCandidate, EmailStatus, VerificationResult};
use crate::rules::format::is_valid_format;
use crate::rules::tokenize::{pieces, tokenize};
use serde::{Deserialize, Serialize};

pub fn verify_candidate(candidate: &EmailCandidate) -> VerificationResult {
    classify(candidate.clone())
}

/// One result per candidate, in tokenizer order.
pub fn verify_all(raw: &str) -> Vec<VerificationResult> {
    tokenize(raw).into_iter().map(classify).collect()
}

fn classify(candidate: EmailCandidate) -> VerificationResult {
    let status = EmailStatus::from_valid(is_valid_format(candidate.as_str()));
    VerificationResult::new(candidate, status)
}

/// Stops at the first candidate that passes the format check.
pub fn has_any_valid(raw: &str) -> bool {
    pieces(raw).any(is_valid_format)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl VerificationSummary {
    pub fn from_results(results: &[VerificationResult]) -> Self {
        let valid = results.iter().filter(|result| result.is_valid()).count();
        Self {
            total: results.len(),
            valid,
            invalid: results.len() - valid,
        }
    }
}
