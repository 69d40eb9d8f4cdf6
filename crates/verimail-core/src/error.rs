use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("email candidate is empty")]
    EmptyCandidate,
    #[error("email candidate contains a separator: {0:?}")]
    ContainsSeparator(String),
}
