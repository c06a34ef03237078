//! Inbound events.
//!
//! One JSON shape carries every kind of event: a hub registration
//! notification, an HR-system update, a heartbeat, or a queue envelope that
//! wraps many of those as opaque string bodies. Which kind an event is depends
//! on which fields are populated; see [`Event::kind`].

use serde::{Deserialize, Deserializer};

use crate::{Error, Result};

/// The `type` value the hub sends when a person links their profile.
pub const REGISTRATION_CREATED: &str = "CREATED";

/// The `type` value of a liveness probe.
pub const HEARTBEAT: &str = "PING";

// ─── Wire shape ──────────────────────────────────────────────────────────────

/// An inbound event as received over HTTP or from the queue.
///
/// Every field is optional; an event with nothing populated is the zero value
/// and is dropped when it appears inside a queue envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  /// Federated principal name, `<short-code>@<domain>`.
  #[serde(default, alias = "eppn")]
  pub principal_name: Option<String>,
  /// External profile identifier chosen by the person on the hub.
  #[serde(default, alias = "orcid")]
  pub profile_id:     Option<String>,
  #[serde(default)]
  pub email:          Option<String>,
  /// HR subject key; string-encoded on the wire.
  #[serde(default, deserialize_with = "subject_key")]
  pub subject:        Option<u64>,
  #[serde(default, rename = "type")]
  pub kind:           Option<String>,
  #[serde(default)]
  pub url:            Option<String>,
  /// Queue envelope members.
  #[serde(default, rename = "Records", alias = "records")]
  pub records:        Option<Vec<QueueMessage>>,
}

/// A single message of a queue envelope. The body is an [`Event`] encoded as
/// a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QueueMessage {
  #[serde(default, alias = "messageId")]
  pub message_id: Option<String>,
  #[serde(default)]
  pub body:       String,
}

impl QueueMessage {
  /// Decode the body into an [`Event`].
  pub fn decode(&self) -> Result<Event> { Event::from_json(&self.body) }
}

impl Event {
  pub fn from_json(raw: &str) -> Result<Self> { Ok(serde_json::from_str(raw)?) }

  /// `true` for the zero value: nothing at all is populated.
  pub fn is_empty(&self) -> bool { *self == Self::default() }

  /// Classify the event by the fields it carries.
  pub fn kind(&self) -> EventKind<'_> {
    if let Some(records) = &self.records {
      return EventKind::Batch(records);
    }

    let principal = self.principal_name.as_deref().filter(|p| !p.is_empty());
    let kind = self.kind.as_deref().filter(|k| !k.is_empty());

    match (principal, self.subject) {
      (Some(_), Some(_)) => EventKind::Unhandled,
      (Some(principal_name), None) => match kind {
        None | Some(REGISTRATION_CREATED) => EventKind::Registration {
          principal_name,
          profile_id: self.profile_id.as_deref().filter(|p| !p.is_empty()),
        },
        Some(_) => EventKind::Unhandled,
      },
      (None, Some(subject)) => EventKind::HrUpdate { subject },
      (None, None) if kind == Some(HEARTBEAT) => EventKind::Heartbeat,
      (None, None) => EventKind::Unhandled,
    }
  }
}

/// What an [`Event`] asks the service to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind<'a> {
  Batch(&'a [QueueMessage]),
  Registration {
    principal_name: &'a str,
    profile_id:     Option<&'a str>,
  },
  HrUpdate {
    subject: u64,
  },
  Heartbeat,
  Unhandled,
}

// ─── Principal names ─────────────────────────────────────────────────────────

/// Extract and validate the institutional short-code from a principal name.
///
/// The short-code is the part before `@` and must be four ASCII letters
/// followed by three ASCII digits.
pub fn short_code(principal_name: &str) -> Result<&str> {
  let code = principal_name
    .split_once('@')
    .map_or(principal_name, |(local, _)| local);

  let bytes = code.as_bytes();
  let valid = bytes.len() == 7
    && bytes[..4].iter().all(u8::is_ascii_alphabetic)
    && bytes[4..].iter().all(u8::is_ascii_digit);

  if valid {
    Ok(code)
  } else {
    Err(Error::InvalidPrincipal(code.to_string()))
  }
}

// ─── Serde helpers ───────────────────────────────────────────────────────────

/// Accept the subject as either a JSON string or a number. An empty string
/// or zero means "absent".
fn subject_key<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Number(u64),
    Text(String),
  }

  let key = match Option::<Raw>::deserialize(deserializer)? {
    None => return Ok(None),
    Some(Raw::Number(n)) => n,
    Some(Raw::Text(s)) if s.trim().is_empty() => return Ok(None),
    Some(Raw::Text(s)) => s.trim().parse().map_err(serde::de::Error::custom)?,
  };
  Ok((key != 0).then_some(key))
}
