use thiserror::Error;

/// Failures that can surface from the interactive shell.
///
/// The ledger core itself has no error conditions; everything here comes from
/// the terminal boundary.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
