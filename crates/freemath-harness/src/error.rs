//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("`{function}` takes {expected} argument(s), got {got}")]
    Arity {
        function: String,
        expected: usize,
        got: usize,
    },
    #[error("unknown mode `{0}` (expected strict, hardened or both)")]
    UnknownMode(String),
    #[error("unknown fixture family `{0}`")]
    UnknownFamily(String),
    #[error("fixture case `{0}` has neither an expected value nor an expected error")]
    MissingExpectation(String),
}
