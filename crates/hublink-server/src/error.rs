//! Error types and axum `IntoResponse` implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("undecodable event: {0}")]
  Undecodable(#[from] hublink_core::Error),

  /// The event ran and failed. `message` carries whatever the successful
  /// members of an envelope replied.
  #[error("{source}")]
  Pipeline {
    message: String,
    source:  hublink_engine::Error,
  },
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Undecodable(_) => {
        (StatusCode::UNSUPPORTED_MEDIA_TYPE, Json(json!({ "error": self.to_string() }))).into_response()
      }
      Error::Pipeline { message, source } => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": source.to_string(), "message": message })),
      )
        .into_response(),
    }
  }
}
