//! In-memory [`SourceSystem`] and [`TaskHub`] for the engine's tests.

use std::{
  collections::{HashMap, HashSet},
  sync::{
    Mutex,
    atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
  },
  time::Duration,
};

use chrono::{DateTime, Utc};
use hublink_core::{
  hub::TaskHub,
  identity::{ExternalId, Identity, IdentityEmail, PROFILE_ID_TYPE},
  source::{Degree, Employment, Job, SourceSystem},
  task::{AFFILIATION_TASK, AffiliationRecord, Task, TaskStatus},
  token::DelegatedToken,
};

#[derive(Debug, thiserror::Error)]
#[error("fake transport failure: {0}")]
pub struct FakeError(pub String);

pub fn hub_timestamp(at: DateTime<Utc>) -> String {
  at.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

pub fn identity(id: u64, short_code: &str) -> Identity {
  Identity {
    id,
    short_code: short_code.to_string(),
    email_address: format!("{short_code}@mail.example.edu"),
    ..Identity::default()
  }
}

pub fn with_profile_id(mut identity: Identity, profile_id: &str) -> Identity {
  identity.ext_ids.push(ExternalId {
    id:   format!("https://orcid.org/{profile_id}"),
    kind: PROFILE_ID_TYPE.to_string(),
  });
  identity
}

pub fn with_email(mut identity: Identity, email: &str) -> Identity {
  identity.emails.push(IdentityEmail {
    email: email.to_string(),
    ..IdentityEmail::default()
  });
  identity
}

pub fn employment(jobs: usize) -> Employment {
  Employment {
    employee_id: "484378182".into(),
    job:         (0..jobs)
      .map(|n| Job {
        department_description: "Physics".into(),
        position_description: format!("Position {n}"),
        position_number: format!("4500{n}"),
        job_start_date: "2019-01-01".into(),
        ..Job::default()
      })
      .collect(),
  }
}

pub fn token(profile_id: &str, email: &str, scopes: &str) -> DelegatedToken {
  DelegatedToken {
    access_token: format!("access-{profile_id}"),
    scopes: scopes.to_string(),
    email: email.to_string(),
    profile_id: profile_id.to_string(),
    ..DelegatedToken::default()
  }
}

pub fn record() -> AffiliationRecord {
  AffiliationRecord {
    affiliation_type: hublink_core::task::AffiliationType::Employment,
    department:       Some("Physics".into()),
    role:             Some("Lecturer".into()),
    start_date:       None,
    end_date:         None,
    profile_id:       None,
    email:            None,
    external_id:      None,
    is_active:        true,
  }
}

// ─── Source ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeSource {
  pub identities: HashMap<String, Identity>,
  pub employment: HashMap<String, Employment>,
  pub degrees:    HashMap<String, Vec<Degree>>,
  /// Keys whose every lookup fails.
  pub failing:    HashSet<String>,
  pub fail_link:  bool,
  pub linked:     Mutex<Vec<(u64, String)>>,
}

impl FakeSource {
  fn check(&self, key: &str) -> Result<(), FakeError> {
    if self.failing.contains(key) {
      return Err(FakeError(format!("source unavailable for {key}")));
    }
    Ok(())
  }

  pub fn linked(&self) -> Vec<(u64, String)> { self.linked.lock().unwrap().clone() }
}

impl SourceSystem for FakeSource {
  type Error = FakeError;

  async fn identity(&self, key: &str) -> Result<Identity, FakeError> {
    self.check(key)?;
    Ok(self.identities.get(key).cloned().unwrap_or_default())
  }

  async fn employment(&self, key: &str) -> Result<Employment, FakeError> {
    self.check(key)?;
    Ok(self.employment.get(key).cloned().unwrap_or_default())
  }

  async fn education(&self, key: &str) -> Result<Vec<Degree>, FakeError> {
    self.check(key)?;
    Ok(self.degrees.get(key).cloned().unwrap_or_default())
  }

  async fn link_profile_id(&self, identity_id: u64, profile_id: &str) -> Result<(), FakeError> {
    if self.fail_link {
      return Err(FakeError("identifier write rejected".into()));
    }
    self.linked.lock().unwrap().push((identity_id, profile_id.to_string()));
    Ok(())
  }
}

// ─── Hub ─────────────────────────────────────────────────────────────────────

pub struct FakeHub {
  /// Returned by `list_inactive_tasks`.
  pub listing:       Mutex<Vec<Task>>,
  pub fail_listing:  bool,
  pub fail_create:   AtomicBool,
  pub fail_append:   AtomicBool,
  /// Held inside `create_task` to widen the race window.
  pub create_delay:  Duration,
  /// Held inside `append_records` before the append is recorded.
  pub append_delay:  Duration,
  pub next_id:       AtomicU64,
  pub created:       Mutex<Vec<String>>,
  pub appended:      Mutex<Vec<(u64, usize)>>,
  pub activated:     Mutex<Vec<u64>>,
  pub tokens:        HashMap<String, Vec<DelegatedToken>>,
  /// Identifiers whose token lookup fails.
  pub failing_token: HashSet<String>,
  pub token_queries: Mutex<Vec<String>>,
  pub token_calls:   AtomicUsize,
}

impl Default for FakeHub {
  fn default() -> Self {
    Self {
      listing:       Mutex::default(),
      fail_listing:  false,
      fail_create:   AtomicBool::new(false),
      fail_append:   AtomicBool::new(false),
      create_delay:  Duration::ZERO,
      append_delay:  Duration::ZERO,
      next_id:       AtomicU64::new(100),
      created:       Mutex::default(),
      appended:      Mutex::default(),
      activated:     Mutex::default(),
      tokens:        HashMap::new(),
      failing_token: HashSet::new(),
      token_queries: Mutex::default(),
      token_calls:   AtomicUsize::new(0),
    }
  }
}

impl FakeHub {
  pub fn created(&self) -> Vec<String> { self.created.lock().unwrap().clone() }

  pub fn appended(&self) -> Vec<(u64, usize)> { self.appended.lock().unwrap().clone() }

  pub fn activated(&self) -> Vec<u64> { self.activated.lock().unwrap().clone() }

  pub fn token_queries(&self) -> Vec<String> { self.token_queries.lock().unwrap().clone() }

  /// An inactive affiliation task as the hub lists it.
  pub fn listed_task(
    id: u64,
    filename: &str,
    created_at: DateTime<Utc>,
    records: usize,
  ) -> Task {
    Task {
      id,
      filename: Some(filename.to_string()),
      status: None,
      created_at: Some(hub_timestamp(created_at)),
      task_type: Some(AFFILIATION_TASK.to_string()),
      records: vec![record(); records],
      ..Task::default()
    }
  }

  pub fn with_status(mut task: Task, status: TaskStatus) -> Task {
    task.status = Some(status);
    task
  }
}

impl TaskHub for FakeHub {
  type Error = FakeError;

  async fn list_inactive_tasks(&self) -> Result<Vec<Task>, FakeError> {
    if self.fail_listing {
      return Err(FakeError("listing unavailable".into()));
    }
    Ok(self.listing.lock().unwrap().clone())
  }

  async fn create_task(&self, filename: &str) -> Result<Task, FakeError> {
    if !self.create_delay.is_zero() {
      tokio::time::sleep(self.create_delay).await;
    }
    if self.fail_create.load(Ordering::SeqCst) {
      return Err(FakeError("task creation refused".into()));
    }
    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
    self.created.lock().unwrap().push(filename.to_string());
    Ok(Task {
      id,
      filename: Some(filename.to_string()),
      created_at: Some(hub_timestamp(Utc::now())),
      task_type: Some(AFFILIATION_TASK.to_string()),
      ..Task::default()
    })
  }

  async fn append_records(
    &self,
    task_id: u64,
    records: &[AffiliationRecord],
  ) -> Result<Task, FakeError> {
    if !self.append_delay.is_zero() {
      tokio::time::sleep(self.append_delay).await;
    }
    if self.fail_append.load(Ordering::SeqCst) {
      return Err(FakeError("append rejected".into()));
    }
    self.appended.lock().unwrap().push((task_id, records.len()));
    Ok(Task { id: task_id, ..Task::default() })
  }

  async fn activate_task(&self, task_id: u64) -> Result<(), FakeError> {
    self.activated.lock().unwrap().push(task_id);
    Ok(())
  }

  async fn tokens(&self, identifier: &str) -> Result<Vec<DelegatedToken>, FakeError> {
    self.token_calls.fetch_add(1, Ordering::SeqCst);
    self.token_queries.lock().unwrap().push(identifier.to_string());
    if self.failing_token.contains(identifier) {
      return Err(FakeError(format!("token store unavailable for {identifier}")));
    }
    Ok(self.tokens.get(identifier).cloned().unwrap_or_default())
  }
}
