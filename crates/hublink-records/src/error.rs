//! Error types for `hublink-records`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot read qualification table {path}: {source}")]
  Read {
    path:   String,
    #[source]
    source: std::io::Error,
  },

  #[error("malformed qualification table: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
