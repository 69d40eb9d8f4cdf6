pub mod candidate;
pub mod result;

pub use candidate::{is_input_whitespace, is_separator, EmailCandidate};
pub use result::{EmailStatus, VerificationResult, INVALID_FORMAT_MESSAGE, VALID_FORMAT_MESSAGE};
