//! Hub-side batch documents ("tasks") and the affiliation records they hold.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Task type used for every batch this service creates.
pub const AFFILIATION_TASK: &str = "AFFILIATION";

// ─── Records ─────────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AffiliationType {
  Employment,
  Education,
}

/// A normalized employment or education entry submitted to the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AffiliationRecord {
  pub affiliation_type: AffiliationType,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub department:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub role:             Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start_date:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub end_date:         Option<String>,
  /// External profile id of the person.
  #[serde(default, rename = "orcid", skip_serializing_if = "Option::is_none")]
  pub profile_id:       Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:            Option<String>,
  /// Identifier of the entry in the source system.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external_id:      Option<String>,
  #[serde(default, skip_serializing_if = "std::ops::Not::not")]
  pub is_active:        bool,
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Hub-side processing status of a task. An absent status means the task is
/// still open for appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
  /// Closed for appends and queued for processing.
  Active,
  Reset,
  Other(String),
}

impl TaskStatus {
  pub fn as_str(&self) -> &str {
    match self {
      Self::Active => "ACTIVE",
      Self::Reset => "RESET",
      Self::Other(s) => s,
    }
  }
}

impl From<String> for TaskStatus {
  fn from(s: String) -> Self {
    match s.as_str() {
      "ACTIVE" => Self::Active,
      "RESET" => Self::Reset,
      _ => Self::Other(s),
    }
  }
}

impl From<TaskStatus> for String {
  fn from(status: TaskStatus) -> Self { status.as_str().to_string() }
}

// ─── Task ────────────────────────────────────────────────────────────────────

/// A batch document on the hub.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Task {
  #[serde(default)]
  pub id:           u64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub filename:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:       Option<TaskStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub completed_at: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expires_at:   Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub task_type:    Option<String>,
  #[serde(default)]
  pub records:      Vec<AffiliationRecord>,
}

impl Task {
  pub fn record_count(&self) -> usize { self.records.len() }

  /// `true` once the hub has closed the task (`ACTIVE` or `RESET`).
  pub fn is_closed(&self) -> bool {
    matches!(self.status, Some(TaskStatus::Active | TaskStatus::Reset))
  }

  pub fn is_completed(&self) -> bool {
    self.completed_at.as_deref().is_some_and(|c| !c.is_empty())
  }

  pub fn has_prefix(&self, prefix: &str) -> bool {
    self.filename.as_deref().is_some_and(|f| f.starts_with(prefix))
  }

  /// Creation instant as reported by the hub.
  pub fn created_at_utc(&self) -> Result<DateTime<Utc>> {
    let raw = self.created_at.as_deref().unwrap_or_default();
    parse_hub_timestamp(raw)
  }
}

/// Parse a hub timestamp: naive UTC `YYYY-MM-DDTHH:MM:SS` with optional
/// fractional seconds.
pub fn parse_hub_timestamp(raw: &str) -> Result<DateTime<Utc>> {
  NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
    .map(|naive| naive.and_utc())
    .map_err(|_| Error::TaskTimestamp(raw.to_string()))
}

/// Build a task filename for a batch created at `at`: the prefix, the unix
/// seconds in base 36, and a `.json` suffix.
pub fn task_filename(prefix: &str, at: DateTime<Utc>) -> String {
  let secs = u64::try_from(at.timestamp()).unwrap_or_default();
  format!("{prefix}{}.json", base36(secs))
}

fn base36(mut n: u64) -> String {
  const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
  if n == 0 {
    return "0".to_string();
  }
  let mut out = Vec::new();
  while n > 0 {
    out.push(DIGITS[(n % 36) as usize]);
    n /= 36;
  }
  out.reverse();
  String::from_utf8(out).unwrap_or_default()
}
