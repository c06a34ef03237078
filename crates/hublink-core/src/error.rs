//! Error types for `hublink-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid principal short-code: {0:?}")]
  InvalidPrincipal(String),

  #[error("unparsable task timestamp: {0:?}")]
  TaskTimestamp(String),

  #[error("malformed event: {0}")]
  MalformedEvent(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
