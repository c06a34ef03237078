//! The [`TaskHub`] trait: the affiliation hub's task and token endpoints.
//!
//! Implemented by `hublink-http`; the engine depends only on this
//! abstraction.

use std::future::Future;

use crate::{
  task::{AffiliationRecord, Task},
  token::DelegatedToken,
};

/// Abstraction over the remote affiliation hub.
///
/// All methods return `Send` futures so the trait can be shared by the many
/// concurrently spawned pipelines.
pub trait TaskHub: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Tasks ─────────────────────────────────────────────────────────────

  /// `GET tasks?type=AFFILIATION&status=INACTIVE`, in hub order.
  fn list_inactive_tasks(
    &self,
  ) -> impl Future<Output = Result<Vec<Task>, Self::Error>> + Send + '_;

  /// Create an empty affiliation task with the given filename.
  fn create_task<'a>(
    &'a self,
    filename: &'a str,
  ) -> impl Future<Output = Result<Task, Self::Error>> + Send + 'a;

  /// Merge `records` into task `task_id`. The hub appends; it never
  /// replaces existing records.
  fn append_records<'a>(
    &'a self,
    task_id: u64,
    records: &'a [AffiliationRecord],
  ) -> impl Future<Output = Result<Task, Self::Error>> + Send + 'a;

  /// Mark a task `ACTIVE`, closing it for further appends.
  fn activate_task(
    &self,
    task_id: u64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Delegated access ──────────────────────────────────────────────────

  /// Tokens on file for a profile id or email address. Unknown identifiers
  /// yield an empty list.
  fn tokens<'a>(
    &'a self,
    identifier: &'a str,
  ) -> impl Future<Output = Result<Vec<DelegatedToken>, Self::Error>> + Send + 'a;
}
