//! [`SourceClient`]: the institutional identity, employment and student
//! APIs.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode, header::ACCEPT};
use serde::de::DeserializeOwned;
use serde_json::json;

use hublink_core::{
  identity::{Identity, PROFILE_ID_TYPE},
  source::{Degree, Employment, SourceSystem},
};

use crate::{Error, Result};

/// Connection settings for the source APIs.
#[derive(Debug, Clone)]
pub struct SourceConfig {
  /// e.g. `https://api.dev.example.edu/service`
  pub base_url: String,
  /// Sent verbatim in the `apikey` header.
  pub api_key:  String,
  pub timeout:  Duration,
}

#[derive(Clone)]
pub struct SourceClient {
  client:   Client,
  base_url: String,
  api_key:  String,
}

impl SourceClient {
  pub fn new(config: SourceConfig) -> Result<Self> {
    let client = Client::builder().timeout(config.timeout).build()?;
    Ok(Self {
      client,
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key,
    })
  }

  fn url(&self, path: &str) -> String { format!("{}/{}", self.base_url, path) }

  fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
    let req = self.client.request(method, url).header(ACCEPT, "application/json");
    if self.api_key.is_empty() {
      req
    } else {
      req.header("apikey", &self.api_key)
    }
  }

  /// `GET` a resource, mapping 404 to `T::default()`.
  async fn get_or_default<T>(&self, path: &str) -> Result<T>
  where
    T: DeserializeOwned + Default,
  {
    let url = self.url(path);
    let resp = self.request(Method::GET, &url).send().await?;

    match resp.status() {
      StatusCode::NOT_FOUND => {
        tracing::debug!(%url, "source record not found");
        Ok(T::default())
      }
      status if status.is_success() => Ok(resp.json().await?),
      status => Err(Error::Status { method: Method::GET, url, status }),
    }
  }
}

impl SourceSystem for SourceClient {
  type Error = Error;

  async fn identity(&self, key: &str) -> Result<Identity> {
    self
      .get_or_default(&format!("identity/integrations/v3/identity/{key}"))
      .await
  }

  async fn employment(&self, key: &str) -> Result<Employment> {
    self
      .get_or_default(&format!("employment/integrations/v1/employee/{key}"))
      .await
  }

  async fn education(&self, key: &str) -> Result<Vec<Degree>> {
    self
      .get_or_default(&format!("student/integrations/v1/student/{key}/degree/"))
      .await
  }

  async fn link_profile_id(&self, identity_id: u64, profile_id: &str) -> Result<()> {
    let url = self.url(&format!(
      "identity/integrations/v3/identity/{identity_id}/identifier/{PROFILE_ID_TYPE}"
    ));
    let resp = self
      .request(Method::PUT, &url)
      .json(&json!({ "identifier": profile_id }))
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(Error::Status { method: Method::PUT, url, status: resp.status() });
    }
    Ok(())
  }
}
