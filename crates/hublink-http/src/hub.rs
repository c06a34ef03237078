//! [`HubClient`]: the affiliation hub's REST API.
//!
//! Requests carry a bearer token obtained with the OAuth2 client-credentials
//! grant. The token is fetched lazily, shared by every clone of the client,
//! and renewed under a write lock: a request rejected with 401 renews only if
//! nobody else has renewed since that request read the token, then retries
//! once.

use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url, header::ACCEPT};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use tokio::sync::RwLock;

use hublink_core::{
  hub::TaskHub,
  task::{AFFILIATION_TASK, AffiliationRecord, Task},
  token::DelegatedToken,
};

use crate::{Error, Result};

/// Renew this long before the hub says the token expires.
const EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// Connection settings for the hub.
#[derive(Debug, Clone)]
pub struct HubConfig {
  /// e.g. `https://dev.hub.example.org`
  pub base_url:      String,
  pub client_id:     String,
  pub client_secret: String,
  pub timeout:       Duration,
}

#[derive(Clone)]
pub struct HubClient {
  client:     Client,
  config:     Arc<HubConfig>,
  /// `base_url` parsed once; request paths are built from it segment by
  /// segment so identifiers and filenames are percent-encoded.
  base:       Url,
  credential: Arc<RwLock<Credential>>,
}

/// The shared bearer token. `epoch` increases on every renewal.
#[derive(Default)]
struct Credential {
  token:      Option<String>,
  expires_at: Option<Instant>,
  epoch:      u64,
}

impl Credential {
  fn usable(&self) -> Option<&str> {
    let fresh = self.expires_at.is_none_or(|at| Instant::now() < at);
    self.token.as_deref().filter(|_| fresh)
  }
}

#[derive(Deserialize)]
struct TokenResponse {
  access_token: String,
  #[serde(default)]
  expires_in:   Option<u64>,
}

#[derive(Serialize)]
struct AppendBody<'a> {
  id:      u64,
  records: &'a [AffiliationRecord],
}

impl HubClient {
  pub fn new(config: HubConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    let base = Url::parse(&config.base_url)
      .map_err(|e| Error::InvalidUrl(format!("{}: {e}", config.base_url)))?;
    if base.cannot_be_a_base() {
      return Err(Error::InvalidUrl(config.base_url));
    }
    Ok(Self {
      client,
      base,
      config: Arc::new(HubConfig {
        base_url: config.base_url.trim_end_matches('/').to_string(),
        ..config
      }),
      credential: Arc::new(RwLock::new(Credential::default())),
    })
  }

  /// `{base}/api/v1/{segments..}?{query}`, each part encoded.
  fn api_url(&self, segments: &[&str], query: &[(&str, &str)]) -> String {
    let mut url = self.base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(["api", "v1"]).extend(segments);
    }
    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query);
    }
    url.into()
  }

  // ── Credential ────────────────────────────────────────────────────────

  /// The current bearer token and the epoch it belongs to.
  async fn bearer(&self) -> Result<(String, u64)> {
    let stale_epoch = {
      let credential = self.credential.read().await;
      if let Some(token) = credential.usable() {
        return Ok((token.to_string(), credential.epoch));
      }
      credential.epoch
    };
    self.renew(stale_epoch).await
  }

  /// Renew the bearer unless another task already replaced the one issued at
  /// `stale_epoch`.
  async fn renew(&self, stale_epoch: u64) -> Result<(String, u64)> {
    let mut credential = self.credential.write().await;
    if credential.epoch != stale_epoch
      && let Some(token) = credential.usable()
    {
      return Ok((token.to_string(), credential.epoch));
    }

    let url = format!("{}/oauth/token", self.config.base_url);
    let resp = self
      .client
      .post(&url)
      .header(ACCEPT, "application/json")
      .form(&[
        ("client_id", self.config.client_id.as_str()),
        ("client_secret", self.config.client_secret.as_str()),
        ("grant_type", "client_credentials"),
      ])
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Authorization(format!("POST {url} → {}", resp.status())));
    }
    let issued: TokenResponse = resp.json().await?;
    if issued.access_token.is_empty() {
      return Err(Error::Authorization("empty access token".to_string()));
    }

    credential.token = Some(issued.access_token.clone());
    credential.expires_at = issued
      .expires_in
      .map(|secs| Instant::now() + Duration::from_secs(secs).saturating_sub(EXPIRY_MARGIN));
    credential.epoch += 1;
    tracing::info!(epoch = credential.epoch, "hub access token renewed");

    Ok((issued.access_token, credential.epoch))
  }

  // ── Requests ──────────────────────────────────────────────────────────

  fn request<B>(&self, method: &Method, url: &str, token: &str, body: Option<&B>) -> RequestBuilder
  where
    B: Serialize + ?Sized,
  {
    let req = self
      .client
      .request(method.clone(), url)
      .bearer_auth(token)
      .header(ACCEPT, "application/json");
    match body {
      Some(body) => req.json(body),
      None => req,
    }
  }

  async fn execute<B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<Response>
  where
    B: Serialize + ?Sized,
  {
    let (token, epoch) = self.bearer().await?;
    let resp = self.request(&method, url, &token, body).send().await?;
    if resp.status() != StatusCode::UNAUTHORIZED {
      return Ok(resp);
    }

    tracing::debug!(%url, epoch, "hub rejected bearer token, renewing");
    let (token, _) = self.renew(epoch).await?;
    Ok(self.request(&method, url, &token, body).send().await?)
  }

  async fn json<T, B>(&self, method: Method, url: String, body: Option<&B>) -> Result<T>
  where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
  {
    let resp = self.execute(method.clone(), &url, body).await?;
    if !resp.status().is_success() {
      return Err(Error::Status { method, url, status: resp.status() });
    }
    Ok(resp.json().await?)
  }
}

impl TaskHub for HubClient {
  type Error = Error;

  async fn list_inactive_tasks(&self) -> Result<Vec<Task>> {
    self
      .json(
        Method::GET,
        self.api_url(&["tasks"], &[("type", AFFILIATION_TASK), ("status", "INACTIVE")]),
        None::<&()>,
      )
      .await
  }

  async fn create_task(&self, filename: &str) -> Result<Task> {
    let body = Task {
      filename: Some(filename.to_string()),
      task_type: Some(AFFILIATION_TASK.to_string()),
      ..Task::default()
    };
    self
      .json(
        Method::POST,
        self.api_url(&["affiliations"], &[("filename", filename)]),
        Some(&body),
      )
      .await
  }

  async fn append_records(&self, task_id: u64, records: &[AffiliationRecord]) -> Result<Task> {
    let body = AppendBody { id: task_id, records };
    self
      .json(
        Method::PATCH,
        self.api_url(&["affiliations", &task_id.to_string()], &[]),
        Some(&body),
      )
      .await
  }

  async fn activate_task(&self, task_id: u64) -> Result<()> {
    let url = self.api_url(&["tasks", &task_id.to_string()], &[]);
    let resp = self
      .execute(Method::PATCH, &url, Some(&json!({ "status": "ACTIVE" })))
      .await?;
    if !resp.status().is_success() {
      return Err(Error::Status { method: Method::PATCH, url, status: resp.status() });
    }
    Ok(())
  }

  async fn tokens(&self, identifier: &str) -> Result<Vec<DelegatedToken>> {
    let url = self.api_url(&["tokens", identifier], &[]);
    let resp = self.execute(Method::GET, &url, None::<&()>).await?;
    match resp.status() {
      StatusCode::NOT_FOUND => Ok(Vec::new()),
      status if status.is_success() => Ok(resp.json().await?),
      status => Err(Error::Status { method: Method::GET, url, status }),
    }
  }
}
