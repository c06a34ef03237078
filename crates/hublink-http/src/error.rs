//! Error type for `hublink-http`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{method} {url} → {status}")]
  Status {
    method: reqwest::Method,
    url:    String,
    status: StatusCode,
  },

  #[error("invalid base url: {0}")]
  InvalidUrl(String),

  #[error("hub authorization failed: {0}")]
  Authorization(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
