//! The [`BatchCoordinator`]: accumulates affiliation records into a shared
//! hub task and rotates it once it is both old and full.
//!
//! Two things are serialized independently: the decision of which task is
//! open (held under an async mutex for the whole list/close/create exchange
//! with the hub) and the running record count of that task (a short-lived
//! std mutex pairing the count with the id it belongs to). A task is rotated only when its age exceeds the retention period *and* its
//! record count exceeds the batch size.

use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use hublink_core::{
  hub::TaskHub,
  task::{AffiliationRecord, Task, task_filename},
};

use crate::{Error, Result};

/// Rotation and naming policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
  pub retention_minutes:   u32,
  pub batch_size:          usize,
  pub filename_prefix:     String,
  /// How often the server's idle sweeper runs.
  pub sweep_interval_secs: u64,
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self {
      retention_minutes:   60,
      batch_size:          100,
      filename_prefix:     "HUBLINK-AFFILIATION-TASK-".to_string(),
      sweep_interval_secs: 600,
    }
  }
}

impl BatchConfig {
  pub fn retention(&self) -> Duration { Duration::minutes(i64::from(self.retention_minutes)) }

  /// Whether a task of this age and size must be closed.
  pub fn rotation_due(&self, age: Duration, record_count: usize) -> bool {
    age > self.retention() && record_count > self.batch_size
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenTask {
  id:         u64,
  created_at: DateTime<Utc>,
}

/// Records confirmed appended to `task_id` (0 when no task is open).
#[derive(Debug, Default, Clone, Copy)]
struct Counter {
  task_id: u64,
  records: usize,
}

/// A point-in-time view of the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
  pub task_id:      Option<u64>,
  pub created_at:   Option<DateTime<Utc>>,
  pub record_count: usize,
}

pub struct BatchCoordinator<H> {
  hub:          Arc<H>,
  config:       BatchConfig,
  current: Mutex<Option<OpenTask>>,
  /// Never held across an await.
  counter: StdMutex<Counter>,
}

impl<H: TaskHub> BatchCoordinator<H> {
  pub fn new(hub: Arc<H>, config: BatchConfig) -> Self {
    Self {
      hub,
      config,
      current: Mutex::new(None),
      counter: StdMutex::default(),
    }
  }

  pub fn config(&self) -> &BatchConfig { &self.config }

  pub async fn snapshot(&self) -> Snapshot {
    let current = self.current.lock().await;
    Snapshot {
      task_id:      current.map(|open| open.id),
      created_at:   current.map(|open| open.created_at),
      record_count: self.records(),
    }
  }

  /// Make sure a task is open and return its id, adopting a listed inactive
  /// task, rotating a due one, or creating a new one as needed.
  pub async fn ensure_open_task(&self) -> Result<u64> {
    let mut current = self.current.lock().await;
    let now = Utc::now();
    let open = *current;

    match open {
      Some(open) if !self.due(now, open.created_at, self.records()) => {
        return Ok(open.id);
      }
      Some(open) => {
        tracing::info!(task_id = open.id, "rotating affiliation task");
        self.close(open.id).await;
        self.adopt(&mut current, None, 0);
      }
      None => {
        if let Some((open, count)) = self.adopt_listed(now).await {
          self.adopt(&mut current, Some(open), count);
          return Ok(open.id);
        }
      }
    }

    let open = self.create(now).await?;
    self.adopt(&mut current, Some(open), 0);
    Ok(open.id)
  }

  /// Append `records` to the open task and return its id. Nothing is sent
  /// and no task is opened for an empty slice.
  pub async fn append(&self, records: &[AffiliationRecord]) -> Result<Option<u64>> {
    if records.is_empty() {
      return Ok(None);
    }

    let task_id = self.ensure_open_task().await?;
    self
      .hub
      .append_records(task_id, records)
      .await
      .map_err(|e| Error::Append { task_id, source: Box::new(e) })?;

    // A task rotated away in the meantime keeps its count; the new one
    // starts from zero.
    {
      let mut counter = self.counter.lock().unwrap_or_else(PoisonError::into_inner);
      if counter.task_id == task_id {
        counter.records += records.len();
      }
    }
    tracing::debug!(task_id, appended = records.len(), "records appended");
    Ok(Some(task_id))
  }

  /// Close the open task if it holds records and has outlived the retention
  /// period, so a quiet period does not leave records waiting indefinitely.
  /// Returns the id of the closed task.
  pub async fn sweep(&self) -> Option<u64> {
    let mut current = self.current.lock().await;
    let open = (*current)?;
    let count = self.records();
    if count == 0 || Utc::now() - open.created_at <= self.config.retention() {
      return None;
    }

    tracing::info!(task_id = open.id, records = count, "closing idle affiliation task");
    self.close(open.id).await;
    self.adopt(&mut current, None, 0);
    Some(open.id)
  }

  /// Close the open task regardless of age if it holds records.
  pub async fn flush(&self) -> Option<u64> {
    let mut current = self.current.lock().await;
    let open = (*current)?;
    if self.records() == 0 {
      return None;
    }

    tracing::info!(task_id = open.id, "closing affiliation task on shutdown");
    self.close(open.id).await;
    self.adopt(&mut current, None, 0);
    Some(open.id)
  }

  fn due(&self, now: DateTime<Utc>, created_at: DateTime<Utc>, record_count: usize) -> bool {
    self.config.rotation_due(now - created_at, record_count)
  }

  fn records(&self) -> usize { self.counter.lock().unwrap_or_else(PoisonError::into_inner).records }

  fn adopt(&self, current: &mut Option<OpenTask>, open: Option<OpenTask>, count: usize) {
    *current = open;
    *self.counter.lock().unwrap_or_else(PoisonError::into_inner) = Counter {
      task_id: open.map_or(0, |open| open.id),
      records: count,
    };
  }

  /// Walk the hub's inactive tasks in order, closing due ones, and return
  /// the first one still accepting records.
  async fn adopt_listed(&self, now: DateTime<Utc>) -> Option<(OpenTask, usize)> {
    let tasks = match self.hub.list_inactive_tasks().await {
      Ok(tasks) => tasks,
      Err(e) => {
        tracing::warn!(error = %e, "listing inactive tasks failed, starting a new one");
        return None;
      }
    };

    for task in tasks.iter().filter(|task| self.is_candidate(task)) {
      let created_at = match task.created_at_utc() {
        Ok(at) => at,
        Err(e) => {
          tracing::debug!(task_id = task.id, error = %e, "skipping task");
          continue;
        }
      };

      if self.due(now, created_at, task.record_count()) {
        tracing::info!(task_id = task.id, "rotating listed affiliation task");
        self.close(task.id).await;
        continue;
      }

      tracing::info!(task_id = task.id, records = task.record_count(), "adopting affiliation task");
      return Some((OpenTask { id: task.id, created_at }, task.record_count()));
    }
    None
  }

  fn is_candidate(&self, task: &Task) -> bool {
    task.id != 0
      && !task.is_closed()
      && !task.is_completed()
      && task.has_prefix(&self.config.filename_prefix)
  }

  async fn create(&self, now: DateTime<Utc>) -> Result<OpenTask> {
    let filename = task_filename(&self.config.filename_prefix, now);
    let task = self
      .hub
      .create_task(&filename)
      .await
      .map_err(|e| Error::TaskCreation(Box::new(e)))?;
    if task.id == 0 {
      return Err(Error::TaskCreation(format!("hub returned no id for {filename}").into()));
    }

    tracing::info!(task_id = task.id, %filename, "created affiliation task");
    Ok(OpenTask {
      id:         task.id,
      created_at: task.created_at_utc().unwrap_or(now),
    })
  }

  async fn close(&self, task_id: u64) {
    if let Err(e) = self.hub.activate_task(task_id).await {
      tracing::warn!(task_id, error = %e, "failed to close affiliation task");
    }
  }
}
