//! Identity records from the institutional source of truth.

use serde::{Deserialize, Serialize};

/// External-identifier type under which a person's profile id is filed.
pub const PROFILE_ID_TYPE: &str = "ORCID";

/// A person as known to the identity source.
///
/// A lookup for an unknown person yields the zero value (`id == 0`); use
/// [`Identity::is_found`] rather than matching on errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
  #[serde(default)]
  pub id:            u64,
  /// Institutional short-code (four letters, three digits).
  #[serde(default, rename = "upi")]
  pub short_code:    String,
  #[serde(default)]
  pub email_address: String,
  #[serde(default)]
  pub emails:        Vec<IdentityEmail>,
  #[serde(default)]
  pub ext_ids:       Vec<ExternalId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityEmail {
  #[serde(default)]
  pub email:        String,
  #[serde(default, rename = "type")]
  pub kind:         String,
  #[serde(default)]
  pub verified:     bool,
  #[serde(default)]
  pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalId {
  #[serde(default)]
  pub id:   String,
  #[serde(default, rename = "type")]
  pub kind: String,
}

impl Identity {
  pub fn is_found(&self) -> bool { self.id != 0 }

  /// The bare external profile id, if one is on file.
  ///
  /// Identifiers are sometimes stored as full URIs
  /// (`https://orcid.org/0000-…`); only the last path segment is returned.
  pub fn profile_id(&self) -> Option<&str> {
    self
      .ext_ids
      .iter()
      .find(|ext| ext.kind == PROFILE_ID_TYPE)
      .and_then(|ext| ext.id.rsplit('/').next())
      .filter(|id| !id.is_empty())
  }

  /// The institutional mailbox derived from the short-code.
  pub fn institutional_email(&self, domain: &str) -> Option<String> {
    (!self.short_code.is_empty()).then(|| format!("{}@{domain}", self.short_code))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn profile_id_is_last_uri_segment() {
    let identity: Identity = serde_json::from_str(
      r#"{
        "id": 484378182,
        "upi": "rpaw058",
        "emailAddress": "r.paw@example.edu",
        "extIds": [
          {"id": "S-1", "type": "STAFF"},
          {"id": "http://orcid.org/0000-0003-1255-9023", "type": "ORCID"}
        ]
      }"#,
    )
    .unwrap();

    assert!(identity.is_found());
    assert_eq!(identity.profile_id(), Some("0000-0003-1255-9023"));
    assert_eq!(
      identity.institutional_email("example.edu").as_deref(),
      Some("rpaw058@example.edu")
    );
  }

  #[test]
  fn zero_value_is_not_found() {
    let identity: Identity = serde_json::from_str("{}").unwrap();
    assert!(!identity.is_found());
    assert_eq!(identity.profile_id(), None);
    assert_eq!(identity.institutional_email("example.edu"), None);
  }
}
