use std::result::Result as StdResult;

use thiserror::Error;

/// Result type for thicket operations.
pub type Result<T> = StdResult<T, Error>;

/// Failures surfaced while drawing or talking to the terminal.
///
/// List operations themselves never fail: bad indices and stale item ids are
/// ignored or reported through `Option` and `bool` returns.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    #[error("render: {0}")]
    /// Writing a frame to the output failed.
    Render(String),
    #[error("terminal: {0}")]
    /// Terminal setup or input polling failed.
    Terminal(String),
}
