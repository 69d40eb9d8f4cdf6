use crate::domain::candidate::EmailCandidate;
use serde::{Deserialize, Serialize};

pub const VALID_FORMAT_MESSAGE: &str = "Email format is valid";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid email format";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Valid,
    Invalid,
}

impl EmailStatus {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Valid => VALID_FORMAT_MESSAGE,
            Self::Invalid => INVALID_FORMAT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub candidate: EmailCandidate,
    pub status: EmailStatus,
    pub valid: bool,
    pub message: String,
}

impl VerificationResult {
    pub fn new(candidate: EmailCandidate, status: EmailStatus) -> Self {
        Self {
            candidate,
            status,
            valid: status.is_valid(),
            message: status.message().to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
