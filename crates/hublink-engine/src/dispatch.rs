//! The [`Dispatcher`]: entry point for every inbound event.
//!
//! A queue envelope is split into its messages and each one runs as its own
//! tokio task; a failing message never cancels its siblings. Replies are
//! joined in envelope order.

use std::sync::{
  Arc,
  atomic::{AtomicU64, Ordering},
};

use hublink_core::{
  event::{Event, EventKind, QueueMessage},
  hub::TaskHub,
  source::SourceSystem,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{Engine, Error, Result};

/// Separator between the replies of an envelope's messages.
pub const REPLY_DELIMITER: &str = "; ";

/// Reply to a heartbeat.
pub const HEARTBEAT_REPLY: &str = "GNIP";

/// What handling an event produced. An envelope can yield both a message
/// (from the members that succeeded) and an error (from those that failed).
#[derive(Debug, Default)]
pub struct Reply {
  pub message: String,
  pub error:   Option<Error>,
}

impl Reply {
  pub fn is_fatal(&self) -> bool { self.error.as_ref().is_some_and(Error::is_fatal) }

  pub fn into_result(self) -> Result<String> {
    match self.error {
      Some(e) => Err(e),
      None => Ok(self.message),
    }
  }
}

impl From<Result<String>> for Reply {
  fn from(result: Result<String>) -> Self {
    match result {
      Ok(message) => Self { message, error: None },
      Err(e) => Self { message: String::new(), error: Some(e) },
    }
  }
}

pub struct Dispatcher<S, H> {
  engine:      Arc<Engine<S, H>>,
  invocations: Arc<AtomicU64>,
}

impl<S, H> Clone for Dispatcher<S, H> {
  fn clone(&self) -> Self {
    Self {
      engine:      self.engine.clone(),
      invocations: self.invocations.clone(),
    }
  }
}

impl<S, H> Dispatcher<S, H>
where
  S: SourceSystem + 'static,
  H: TaskHub + 'static,
{
  pub fn new(engine: Engine<S, H>) -> Self {
    Self {
      engine:      Arc::new(engine),
      invocations: Arc::new(AtomicU64::new(0)),
    }
  }

  pub fn engine(&self) -> &Engine<S, H> { &self.engine }

  /// Events handled so far, envelope members included.
  pub fn invocations(&self) -> u64 { self.invocations.load(Ordering::Relaxed) }

  pub async fn handle(&self, event: Event) -> Reply {
    let span = self.span();
    async move {
      match event.kind() {
        EventKind::Batch(messages) => self.handle_envelope(messages).await,
        _ => {
          let result = self.handle_single(&event).await;
          log_outcome(&result);
          Reply::from(result)
        }
      }
    }
    .instrument(span)
    .await
  }

  fn span(&self) -> tracing::Span {
    let invocation = self.invocations.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::info_span!("event", invocation, run_id = %Uuid::new_v4())
  }

  async fn handle_envelope(&self, messages: &[QueueMessage]) -> Reply {
    let events: Vec<Event> = messages
      .iter()
      .filter_map(|message| match message.decode() {
        Ok(event) if !event.is_empty() => Some(event),
        Ok(_) => None,
        Err(e) => {
          tracing::warn!(message_id = ?message.message_id, error = %e, "dropping undecodable message");
          None
        }
      })
      .collect();
    tracing::debug!(received = messages.len(), dispatched = events.len(), "envelope");

    let handles: Vec<_> = events
      .into_iter()
      .map(|event| {
        let this = self.clone();
        let span = self.span();
        tokio::spawn(
          async move {
            let result = this.handle_single(&event).await;
            log_outcome(&result);
            result
          }
          .instrument(span),
        )
      })
      .collect();

    let mut replies = Vec::with_capacity(handles.len());
    let mut errors = Vec::new();
    for handle in handles {
      let result = handle.await.unwrap_or_else(|e| Err(Error::Aborted(e.to_string())));
      match result {
        Ok(message) => replies.push(message),
        Err(e) => {
          replies.push(String::new());
          errors.push(e);
        }
      }
    }

    Reply {
      message: replies.join(REPLY_DELIMITER),
      error:   (!errors.is_empty()).then_some(Error::Aggregate(errors)),
    }
  }

  async fn handle_single(&self, event: &Event) -> Result<String> {
    match event.kind() {
      EventKind::Heartbeat => Ok(HEARTBEAT_REPLY.to_string()),
      EventKind::Registration { principal_name, profile_id } => {
        self.engine.register(principal_name, profile_id).await
      }
      EventKind::HrUpdate { subject } => self.engine.hr_update(subject).await,
      EventKind::Batch(_) | EventKind::Unhandled => Err(Error::Unhandled(describe(event))),
    }
  }
}

fn describe(event: &Event) -> String {
  let mut fields = Vec::new();
  if let Some(principal) = &event.principal_name {
    fields.push(format!("principal={principal}"));
  }
  if let Some(subject) = event.subject {
    fields.push(format!("subject={subject}"));
  }
  if let Some(kind) = &event.kind {
    fields.push(format!("type={kind}"));
  }
  if event.records.is_some() {
    fields.push("records=[…]".to_string());
  }
  format!("{{{}}}", fields.join(", "))
}

fn log_outcome(result: &Result<String>) {
  match result {
    Ok(message) => tracing::info!(%message, "event handled"),
    Err(e) if e.is_fatal() => tracing::error!(error = %e, "event failed"),
    Err(e) => tracing::warn!(error = %e, "event failed"),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::{
    EngineConfig,
    fakes::{FakeHub, FakeSource, employment, identity, token},
  };

  fn dispatcher(source: FakeSource, hub: FakeHub) -> (Arc<FakeHub>, Dispatcher<FakeSource, FakeHub>) {
    let hub = Arc::new(hub);
    let engine = Engine::new(
      Arc::new(source),
      hub.clone(),
      hublink_records::QualificationTable::default(),
      EngineConfig { institution_domain: "example.edu".into(), ..EngineConfig::default() },
    );
    (hub, Dispatcher::new(engine))
  }

  /// Staff members 1..=n, each with one job and an update grant.
  fn staff(n: u64) -> (FakeSource, FakeHub) {
    let mut source = FakeSource::default();
    let mut hub = FakeHub::default();
    for id in 1..=n {
      let code = format!("abcd{id:03}");
      source.identities.insert(id.to_string(), identity(id, &code));
      source.employment.insert(id.to_string(), employment(1));
      let email = format!("{code}@example.edu");
      hub.tokens.insert(email.clone(), vec![token(&format!("0000-0000-0000-{id:04}"), &email, "/activities/update")]);
    }
    (source, hub)
  }

  fn envelope(bodies: &[String]) -> Event {
    let records: Vec<_> = bodies
      .iter()
      .enumerate()
      .map(|(n, body)| json!({ "messageId": format!("m-{n}"), "body": body }))
      .collect();
    Event::from_json(&json!({ "Records": records }).to_string()).unwrap()
  }

  #[tokio::test]
  async fn heartbeat_allocates_nothing() {
    let (hub, dispatcher) = dispatcher(FakeSource::default(), FakeHub::default());

    let reply = dispatcher.handle(Event::from_json(r#"{"type":"PING"}"#).unwrap()).await;
    assert_eq!(reply.message, HEARTBEAT_REPLY);
    assert!(reply.error.is_none());
    assert!(hub.created().is_empty());
    assert_eq!(dispatcher.invocations(), 1);
  }

  #[tokio::test]
  async fn unrecognised_event_is_unhandled() {
    let (_, dispatcher) = dispatcher(FakeSource::default(), FakeHub::default());

    let reply = dispatcher.handle(Event::from_json(r#"{"type":"DELETED"}"#).unwrap()).await;
    let err = reply.into_result().unwrap_err();
    assert!(err.to_string().starts_with("unhandled event"), "{err}");
  }

  #[tokio::test]
  async fn envelope_replies_keep_input_order() {
    let (source, hub) = staff(5);
    let (hub_ref, dispatcher) = dispatcher(source, hub);

    let bodies: Vec<String> = (1..=5).map(|id| json!({ "subject": id }).to_string()).collect();
    let reply = dispatcher.handle(envelope(&bodies)).await;

    assert!(reply.error.is_none(), "{:?}", reply.error);
    let segments: Vec<&str> = reply.message.split(REPLY_DELIMITER).collect();
    assert_eq!(segments.len(), 5);
    for (n, segment) in segments.iter().enumerate() {
      assert!(segment.contains(&format!("0000-0000-0000-{:04}", n + 1)), "{segment}");
    }
    assert_eq!(hub_ref.created().len(), 1);
    assert_eq!(hub_ref.appended().len(), 5);
    // the envelope plus one per member
    assert_eq!(dispatcher.invocations(), 6);
  }

  #[tokio::test]
  async fn failures_are_aggregated_without_cancelling_siblings() {
    let (source, hub) = staff(2);
    let (hub_ref, dispatcher) = dispatcher(source, hub);

    let bodies = vec![
      json!({ "subject": 1 }).to_string(),
      json!({ "subject": 99 }).to_string(),
      json!({ "type": "PING" }).to_string(),
      json!({ "subject": 2 }).to_string(),
    ];
    let reply = dispatcher.handle(envelope(&bodies)).await;

    let segments: Vec<&str> = reply.message.split(REPLY_DELIMITER).collect();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[1], "");
    assert_eq!(segments[2], HEARTBEAT_REPLY);

    let err = reply.error.unwrap();
    assert!(matches!(&err, Error::Aggregate(errors) if errors.len() == 1));
    assert!(err.to_string().contains("failed to retrieve the identity record"));
    assert!(!err.is_fatal());
    assert_eq!(hub_ref.appended().len(), 2);
  }

  #[tokio::test]
  async fn malformed_and_empty_members_are_dropped() {
    let (source, hub) = staff(1);
    let (_, dispatcher) = dispatcher(source, hub);

    let bodies = vec!["{not json".to_string(), "{}".to_string(), json!({ "subject": 1 }).to_string()];
    let reply = dispatcher.handle(envelope(&bodies)).await;

    assert!(reply.error.is_none());
    assert_eq!(reply.message.split(REPLY_DELIMITER).count(), 1);
  }

  #[tokio::test]
  async fn envelope_without_usable_members_is_empty() {
    let (_, dispatcher) = dispatcher(FakeSource::default(), FakeHub::default());

    let reply = dispatcher.handle(envelope(&["".to_string(), "{}".to_string()])).await;
    assert_eq!(reply.message, "");
    assert!(reply.error.is_none());

    let reply = dispatcher.handle(envelope(&[])).await;
    assert_eq!(reply.message, "");
    assert!(reply.error.is_none());
  }

  #[tokio::test]
  async fn fatal_member_makes_the_reply_fatal() {
    let (mut source, hub) = staff(2);
    source.failing.insert("2".to_string());
    let (_, dispatcher) = dispatcher(source, hub);

    let bodies = vec![json!({ "subject": 1 }).to_string(), json!({ "subject": 2 }).to_string()];
    let reply = dispatcher.handle(envelope(&bodies)).await;

    assert!(reply.is_fatal());
    assert!(reply.message.contains("0000-0000-0000-0001"));
  }

  #[tokio::test]
  async fn registration_event_is_routed() {
    let (mut source, hub) = staff(1);
    source.identities.insert("abcd001".into(), identity(1, "abcd001"));
    source.employment.insert("abcd001".into(), employment(1));
    let (hub_ref, dispatcher) = dispatcher(source, hub);

    let event = Event::from_json(
      &json!({ "eppn": "abcd001@example.edu", "orcid": "0000-0000-0000-0001", "type": "CREATED" }).to_string(),
    )
    .unwrap();
    let reply = dispatcher.handle(event).await;

    assert!(reply.error.is_none(), "{:?}", reply.error);
    assert_eq!(hub_ref.appended(), vec![(100, 1)]);
  }

  #[tokio::test]
  async fn concurrent_envelopes_share_one_task() {
    let (source, hub) = staff(8);
    let hub = FakeHub { create_delay: std::time::Duration::from_millis(10), ..hub };
    let (hub_ref, dispatcher) = dispatcher(source, hub);

    let calls: Vec<_> = (1..=8)
      .map(|id| {
        let dispatcher = dispatcher.clone();
        tokio::spawn(async move {
          let event = Event::from_json(&json!({ "subject": id }).to_string()).unwrap();
          dispatcher.handle(event).await.into_result()
        })
      })
      .collect();
    for call in calls {
      call.await.unwrap().unwrap();
    }

    assert_eq!(hub_ref.created().len(), 1);
    assert_eq!(hub_ref.appended().len(), 8);
    assert_eq!(dispatcher.engine().batch().snapshot().await.record_count, 8);
  }
}
