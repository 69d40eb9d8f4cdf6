use crate::domain::VerificationResult;
use crate::rules::VerificationSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReportDto {
    pub results: Vec<VerificationResult>,
    pub summary: VerificationSummary,
}

impl VerificationReportDto {
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let summary = VerificationSummary::from_results(&results);
        Self { results, summary }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDto {
    pub has_valid: bool,
}
