//! Delegated-access tokens held by the hub.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scope marker granting write-back to the person's profile.
pub const UPDATE_SCOPE: &str = "update";

/// A credential the person granted the hub on their external profile.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatedToken {
  #[serde(default)]
  pub access_token:  String,
  #[serde(default)]
  pub refresh_token: Option<String>,
  #[serde(default)]
  pub expires_in:    Option<i64>,
  #[serde(default)]
  pub issue_time:    Option<String>,
  /// Space- or comma-separated scope list, e.g. `/read-limited /activities/update`.
  #[serde(default)]
  pub scopes:        String,
  #[serde(default)]
  pub email:         String,
  #[serde(default, rename = "orcid")]
  pub profile_id:    String,
  #[serde(default)]
  pub eppn:          Option<String>,
}

impl DelegatedToken {
  pub fn can_update(&self) -> bool { self.scopes.contains(UPDATE_SCOPE) }
}

impl fmt::Debug for DelegatedToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DelegatedToken")
      .field("access_token", &"<redacted>")
      .field("scopes", &self.scopes)
      .field("email", &self.email)
      .field("profile_id", &self.profile_id)
      .finish_non_exhaustive()
  }
}
