pub mod format;
pub mod tokenize;
pub mod verify;

pub use format::{is_valid_format, EMAIL_FORMAT_PATTERN};
pub use tokenize::{tokenize, tokenize_str};
pub use verify::{has_any_valid, verify_all, verify_candidate, VerificationSummary};
