//! The per-event enrichment pipeline.
//!
//! Both event flows share one shape: resolve the identity, then fetch the
//! person's delegated token and their source records side by side, build
//! affiliation records from them and hand those to the batch coordinator.

use std::sync::Arc;

use hublink_core::{
  event,
  hub::TaskHub,
  identity::Identity,
  source::{Degree, Employment, SourceSystem},
};
use hublink_records::{QualificationTable, Recipient, education_records, employment_records};

use crate::{
  Error, Result, access,
  batch::{BatchConfig, BatchCoordinator},
};

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
  /// Mail domain of the institution, e.g. `example.edu`.
  pub institution_domain: String,
  pub batch:              BatchConfig,
}

/// Shared state for all pipelines.
pub struct Engine<S, H> {
  source:             Arc<S>,
  hub:                Arc<H>,
  batch:              BatchCoordinator<H>,
  qualifications:     QualificationTable,
  institution_domain: String,
}

impl<S: SourceSystem, H: TaskHub> Engine<S, H> {
  pub fn new(
    source: Arc<S>,
    hub: Arc<H>,
    qualifications: QualificationTable,
    config: EngineConfig,
  ) -> Self {
    Self {
      batch: BatchCoordinator::new(hub.clone(), config.batch),
      source,
      hub,
      qualifications,
      institution_domain: config.institution_domain,
    }
  }

  pub fn batch(&self) -> &BatchCoordinator<H> { &self.batch }

  /// A new profile was registered for `principal_name`.
  pub async fn register(&self, principal_name: &str, profile_id: Option<&str>) -> Result<String> {
    let short_code = event::short_code(principal_name)?;
    let identity = self.resolve_identity(short_code).await?;
    if !identity.is_found() {
      return Err(Error::IdentityNotFound(principal_name.to_string()));
    }

    let link = async {
      if let Some(profile_id) = profile_id {
        self.link_profile_id(&identity, profile_id).await;
      }
    };
    let (_, enriched) = tokio::join!(link, self.enrich(&identity, short_code));
    enriched
  }

  /// The HR system reported a change for employee `subject`.
  pub async fn hr_update(&self, subject: u64) -> Result<String> {
    let key = subject.to_string();
    let identity = self.resolve_identity(&key).await?;
    if !identity.is_found() {
      return Err(Error::IdentityNotFound(key));
    }
    self.enrich(&identity, &key).await
  }

  /// Look up an identity. A missing one comes back with id 0.
  pub async fn resolve_identity(&self, key: &str) -> Result<Identity> {
    self
      .source
      .identity(key)
      .await
      .map_err(|e| Error::IdentityFetch { key: key.to_string(), source: Box::new(e) })
  }

  async fn enrich(&self, identity: &Identity, key: &str) -> Result<String> {
    let (token, fetched) = tokio::join!(
      access::resolve_delegated_token(&*self.hub, identity, &self.institution_domain),
      self.fetch_records(key),
    );
    let (employment, degrees) = fetched?;
    let token = token.ok_or(Error::AccessNotGranted(identity.id))?;

    let recipient = Recipient {
      email:      if token.email.is_empty() { &identity.email_address } else { &token.email },
      profile_id: &token.profile_id,
    };
    let mut records = employment_records(&employment, recipient);
    records.extend(education_records(&degrees, recipient, &self.qualifications));

    match self.batch.append(&records).await? {
      Some(task_id) => {
        tracing::info!(key, task_id, records = records.len(), "affiliations queued");
        Ok(format!(
          "queued {} affiliation record(s) for {} in task {task_id}",
          records.len(),
          recipient.profile_id,
        ))
      }
      None => {
        tracing::info!(key, "no affiliations to queue");
        Ok(format!("no affiliation records for {}", recipient.profile_id))
      }
    }
  }

  async fn fetch_records(&self, key: &str) -> Result<(Employment, Vec<Degree>)> {
    let employment = async {
      self
        .source
        .employment(key)
        .await
        .map_err(|e| Error::EmploymentFetch { key: key.to_string(), source: Box::new(e) })
    };
    let education = async {
      self
        .source
        .education(key)
        .await
        .map_err(|e| Error::EducationFetch { key: key.to_string(), source: Box::new(e) })
    };
    tokio::try_join!(employment, education)
  }

  async fn link_profile_id(&self, identity: &Identity, profile_id: &str) {
    match identity.profile_id() {
      None => match self.source.link_profile_id(identity.id, profile_id).await {
        Ok(()) => tracing::info!(identity_id = identity.id, profile_id, "linked profile id"),
        Err(e) => tracing::warn!(identity_id = identity.id, error = %e, "failed to link profile id"),
      },
      Some(existing) if existing != profile_id => tracing::warn!(
        identity_id = identity.id,
        existing,
        profile_id,
        "identity already carries a different profile id"
      ),
      Some(_) => {}
    }
  }
}

#[cfg(test)]
mod tests {
  use std::{collections::HashMap, sync::atomic::Ordering};

  use hublink_core::source::{Degree, DegreePlan};

  use super::*;
  use crate::fakes::{FakeHub, FakeSource, employment, identity, token, with_profile_id};

  const PROFILE: &str = "0000-0003-1255-9023";

  fn engine(source: FakeSource, hub: FakeHub) -> (Arc<FakeSource>, Arc<FakeHub>, Engine<FakeSource, FakeHub>) {
    let source = Arc::new(source);
    let hub = Arc::new(hub);
    let qualifications: QualificationTable =
      [("BSC-DG", "Bachelor of Science")].into_iter().collect();
    let engine = Engine::new(source.clone(), hub.clone(), qualifications, EngineConfig {
      institution_domain: "example.edu".into(),
      batch:              BatchConfig::default(),
    });
    (source, hub, engine)
  }

  fn granted() -> FakeHub {
    FakeHub {
      tokens: HashMap::from([(
        "rpaw058@example.edu".to_string(),
        vec![token(PROFILE, "rpaw058@example.edu", "/activities/update")],
      )]),
      ..FakeHub::default()
    }
  }

  fn degree() -> Degree {
    Degree {
      code: "BSC-DG".into(),
      description: "BSc".into(),
      confer_date: "2019-07-13T00:00:00".into(),
      student_deg_nbr: "01".into(),
      plans: vec![DegreePlan { acad_group_desc: "Science".into(), ..DegreePlan::default() }],
      ..Degree::default()
    }
  }

  fn staff_source() -> FakeSource {
    FakeSource {
      identities: HashMap::from([
        ("rpaw058".to_string(), identity(484378182, "rpaw058")),
        ("484378182".to_string(), identity(484378182, "rpaw058")),
      ]),
      employment: HashMap::from([
        ("rpaw058".to_string(), employment(2)),
        ("484378182".to_string(), employment(2)),
      ]),
      degrees: HashMap::from([("484378182".to_string(), vec![degree()])]),
      ..FakeSource::default()
    }
  }

  #[tokio::test]
  async fn hr_update_appends_employment_and_education() {
    let (_, hub, engine) = engine(staff_source(), granted());

    let message = engine.hr_update(484378182).await.unwrap();
    assert!(message.contains("3 affiliation record(s)"), "{message}");
    assert_eq!(hub.appended(), vec![(100, 3)]);
  }

  #[tokio::test]
  async fn registration_links_profile_id_when_missing() {
    let (source, hub, engine) = engine(staff_source(), granted());

    engine.register("rpaw058@example.edu", Some(PROFILE)).await.unwrap();
    assert_eq!(source.linked(), vec![(484378182, PROFILE.to_string())]);
    assert_eq!(hub.appended(), vec![(100, 2)]);
  }

  #[tokio::test]
  async fn registration_keeps_existing_profile_id() {
    let mut source = staff_source();
    source.identities.insert(
      "rpaw058".into(),
      with_profile_id(identity(484378182, "rpaw058"), "0000-0000-0000-0001"),
    );
    let (source, _, engine) = engine(source, granted());

    engine.register("rpaw058@example.edu", Some(PROFILE)).await.unwrap();
    assert!(source.linked().is_empty());
  }

  #[tokio::test]
  async fn failed_link_is_not_an_error() {
    let source = FakeSource { fail_link: true, ..staff_source() };
    let (_, hub, engine) = engine(source, granted());

    assert!(engine.register("rpaw058@example.edu", Some(PROFILE)).await.is_ok());
    assert_eq!(hub.appended().len(), 1);
  }

  #[tokio::test]
  async fn invalid_principal_makes_no_remote_call() {
    let (source, hub, engine) = engine(staff_source(), granted());

    let err = engine.register("rpaw05@example.edu", None).await.unwrap_err();
    assert!(matches!(err, Error::Core(hublink_core::Error::InvalidPrincipal(_))));
    assert!(!err.is_fatal());
    assert_eq!(hub.token_calls.load(Ordering::SeqCst), 0);
    assert!(source.linked().is_empty());
  }

  #[tokio::test]
  async fn unknown_identity_is_reported() {
    let (_, hub, engine) = engine(FakeSource::default(), granted());

    let err = engine.hr_update(1).await.unwrap_err();
    assert!(err.to_string().contains("failed to retrieve the identity record"));
    assert!(!err.is_fatal());
    assert!(hub.created().is_empty());
  }

  #[tokio::test]
  async fn identity_transport_failure_is_fatal() {
    let source = FakeSource { failing: ["484378182".into()].into(), ..staff_source() };
    let (_, _, engine) = engine(source, granted());

    let err = engine.hr_update(484378182).await.unwrap_err();
    assert!(matches!(err, Error::IdentityFetch { .. }));
    assert!(err.is_fatal());
  }

  #[tokio::test]
  async fn missing_grant_is_reported_without_a_task() {
    let (_, hub, engine) = engine(staff_source(), FakeHub::default());

    let err = engine.hr_update(484378182).await.unwrap_err();
    assert_eq!(err.to_string(), "the user (ID: 484378182) hasn't granted access to the profile");
    assert!(hub.created().is_empty());
  }

  #[tokio::test]
  async fn nothing_to_append_allocates_no_task() {
    let mut source = staff_source();
    source.employment.clear();
    source.degrees.clear();
    let (_, hub, engine) = engine(source, granted());

    let message = engine.hr_update(484378182).await.unwrap();
    assert!(message.starts_with("no affiliation records"), "{message}");
    assert!(hub.created().is_empty());
  }

  #[tokio::test]
  async fn counter_tracks_appended_records() {
    let (_, _, engine) = engine(staff_source(), granted());
    engine.hr_update(484378182).await.unwrap();
    let snapshot = engine.batch().snapshot().await;
    assert_eq!(snapshot.record_count, 3);
    assert_eq!(snapshot.task_id, Some(100));
  }
}
