//! HTTP entry point for hublink.
//!
//! Exposes an axum [`Router`] that feeds inbound events to a [`Dispatcher`].
//! A fatal pipeline error trips the shared [`Shutdown`] so the binary can stop
//! serving and exit non-zero.

pub mod error;
pub mod handlers;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use hublink_core::{hub::TaskHub, source::SourceSystem};
use hublink_engine::{BatchConfig, Dispatcher, Reply};
use serde::Deserialize;
use tokio::sync::watch;
use tokio_util::task::TaskTracker;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `config.toml` and `HUBLINK_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                 String,
  #[serde(default = "default_port")]
  pub port:                 u16,
  #[serde(default = "default_timeout")]
  pub request_timeout_secs: u64,
  /// JSON object of degree code → title.
  #[serde(default)]
  pub qualifications_path:  Option<PathBuf>,
  pub source:               SourceSettings,
  pub hub:                  HubSettings,
  #[serde(default)]
  pub batch:                BatchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
  pub base_url:           String,
  #[serde(default)]
  pub api_key:            String,
  pub institution_domain: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HubSettings {
  pub base_url:      String,
  pub client_id:     String,
  pub client_secret: String,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 8080 }

fn default_timeout() -> u64 { 30 }

// ─── Shutdown ─────────────────────────────────────────────────────────────────

/// Tripped by the first fatal pipeline error.
pub struct Shutdown {
  fatal: watch::Sender<bool>,
}

impl Default for Shutdown {
  fn default() -> Self { Self { fatal: watch::Sender::new(false) } }
}

impl Shutdown {
  /// Trip on a fatal reply. Returns whether it did.
  pub fn observe(&self, reply: &Reply) -> bool {
    if !reply.is_fatal() {
      return false;
    }
    if !self.fatal.send_replace(true) {
      tracing::error!("fatal pipeline error, shutting down");
    }
    true
  }

  pub fn is_fatal(&self) -> bool { *self.fatal.borrow() }

  /// Resolves once a fatal error has been observed.
  pub async fn wait(&self) {
    let mut fatal = self.fatal.subscribe();
    // The sender lives in `self`, so the channel cannot close while waiting.
    let _ = fatal.wait_for(|fatal| *fatal).await;
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, H> {
  pub dispatcher: Dispatcher<S, H>,
  pub shutdown:   Arc<Shutdown>,
  /// Events accepted by `/v1/enqueue` that are still running.
  pub background: TaskTracker,
}

impl<S, H> AppState<S, H> {
  pub fn new(dispatcher: Dispatcher<S, H>) -> Self {
    Self {
      dispatcher,
      shutdown: Arc::new(Shutdown::default()),
      background: TaskTracker::new(),
    }
  }

  /// Wait for every enqueued event to finish. Events enqueued afterwards
  /// still run but are no longer waited on.
  pub async fn drain(&self) {
    self.background.close();
    if !self.background.is_empty() {
      tracing::info!(pending = self.background.len(), "waiting for enqueued events");
    }
    self.background.wait().await;
  }
}

impl<S, H> Clone for AppState<S, H> {
  fn clone(&self) -> Self {
    Self {
      dispatcher: self.dispatcher.clone(),
      shutdown:   self.shutdown.clone(),
      background: self.background.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the service.
pub fn router<S, H>(state: AppState<S, H>) -> Router
where
  S: SourceSystem + 'static,
  H: TaskHub + 'static,
{
  Router::new()
    .route("/handle",     post(handlers::handle::<S, H>))
    .route("/v1/enqueue", post(handlers::enqueue::<S, H>))
    .route("/ping",       get(handlers::ping))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
