//! Route handlers.

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use hublink_core::{event::Event, hub::TaskHub, source::SourceSystem};
use serde_json::json;

use crate::{AppState, Error};

/// `POST /handle`: run the event and reply with its outcome.
pub async fn handle<S, H>(State(state): State<AppState<S, H>>, body: Bytes) -> Result<Response, Error>
where
  S: SourceSystem + 'static,
  H: TaskHub + 'static,
{
  let event = decode(&body)?;
  let reply = state.dispatcher.handle(event).await;
  state.shutdown.observe(&reply);

  match reply.error {
    Some(source) => Err(Error::Pipeline { message: reply.message, source }),
    None if reply.message.is_empty() => Ok(StatusCode::NO_CONTENT.into_response()),
    None => Ok(Json(json!({ "message": reply.message })).into_response()),
  }
}

/// `POST /v1/enqueue`: accept the event and run it in the background.
pub async fn enqueue<S, H>(State(state): State<AppState<S, H>>, body: Bytes) -> Result<StatusCode, Error>
where
  S: SourceSystem + 'static,
  H: TaskHub + 'static,
{
  let event = decode(&body)?;
  let background = state.background.clone();
  background.spawn(async move {
    let reply = state.dispatcher.handle(event).await;
    state.shutdown.observe(&reply);
  });
  Ok(StatusCode::ACCEPTED)
}

/// `GET /ping`: liveness.
pub async fn ping() -> StatusCode { StatusCode::NO_CONTENT }

fn decode(body: &[u8]) -> Result<Event, Error> {
  let event = serde_json::from_slice(body).map_err(hublink_core::Error::MalformedEvent)?;
  Ok(event)
}
