//! hublink server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) layered under
//! `HUBLINK_*` environment variables, connects to the source APIs and the
//! hub, and serves the event endpoints over HTTP until interrupted or until a
//! fatal pipeline error.

use std::{path::PathBuf, process::ExitCode, sync::Arc, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use hublink_engine::{BatchCoordinator, Dispatcher, Engine, EngineConfig};
use hublink_http::{HubClient, HubConfig, SourceClient, SourceConfig};
use hublink_records::QualificationTable;
use hublink_server::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "hublink affiliation sync server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("HUBLINK").separator("__"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let timeout = Duration::from_secs(server_cfg.request_timeout_secs);

  let source = SourceClient::new(SourceConfig {
    base_url: server_cfg.source.base_url.clone(),
    api_key: server_cfg.source.api_key.clone(),
    timeout,
  })
  .context("failed to build source client")?;

  let hub = HubClient::new(HubConfig {
    base_url: server_cfg.hub.base_url.clone(),
    client_id: server_cfg.hub.client_id.clone(),
    client_secret: server_cfg.hub.client_secret.clone(),
    timeout,
  })
  .context("failed to build hub client")?;

  let qualifications = match &server_cfg.qualifications_path {
    Some(path) => QualificationTable::load(path)
      .with_context(|| format!("failed to load qualifications from {path:?}"))?,
    None => QualificationTable::default(),
  };

  let engine = Engine::new(
    Arc::new(source),
    Arc::new(hub),
    qualifications,
    EngineConfig {
      institution_domain: server_cfg.source.institution_domain.clone(),
      batch:              server_cfg.batch.clone(),
    },
  );
  let state = AppState::new(Dispatcher::new(engine));

  let sweeper = tokio::spawn(sweep(
    state.dispatcher.clone(),
    Duration::from_secs(server_cfg.batch.sweep_interval_secs.max(1)),
  ));

  let app = hublink_server::router(state.clone());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  let shutdown = state.shutdown.clone();
  axum::serve(listener, app)
    .with_graceful_shutdown(async move {
      tokio::select! {
        _ = shutdown.wait() => {}
        _ = tokio::signal::ctrl_c() => tracing::info!("interrupted, shutting down"),
      }
    })
    .await
    .context("server error")?;

  sweeper.abort();
  // Enqueued events may still open or append to a task.
  state.drain().await;
  state.dispatcher.engine().batch().flush().await;

  if state.shutdown.is_fatal() {
    tracing::error!("stopped after a fatal error");
    return Ok(ExitCode::FAILURE);
  }
  Ok(ExitCode::SUCCESS)
}

/// Periodically close an open task that has gone quiet.
async fn sweep(dispatcher: Dispatcher<SourceClient, HubClient>, period: Duration) {
  let batch: &BatchCoordinator<HubClient> = dispatcher.engine().batch();
  let mut interval = tokio::time::interval(period);
  interval.tick().await;
  loop {
    interval.tick().await;
    if let Some(task_id) = batch.sweep().await {
      tracing::debug!(task_id, "sweeper closed task");
    }
  }
}
