use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}
