use drl_syntax::error::SyntaxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to access file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to scan rule source: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Failed to deserialize the globals document as JSON: {0}")]
    JsonDeserialize(#[source] serde_json::Error),

    #[error("Failed to serialize the globals document to JSON: {0}")]
    JsonSerialize(#[source] serde_json::Error),

    #[error("Found {0} problem(s) in global declarations")]
    CheckFailed(usize),
}
