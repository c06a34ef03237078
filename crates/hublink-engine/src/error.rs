//! Error types for `hublink-engine`.

use thiserror::Error;

/// A transport error from a [`SourceSystem`](hublink_core::source::SourceSystem)
/// or [`TaskHub`](hublink_core::hub::TaskHub) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Core(#[from] hublink_core::Error),

  #[error("failed to retrieve the identity record for {0}")]
  IdentityNotFound(String),

  #[error("failed to retrieve the identity record for {key}: {source}")]
  IdentityFetch { key: String, source: BoxError },

  #[error("failed to get the employment record for {key}: {source}")]
  EmploymentFetch { key: String, source: BoxError },

  #[error("failed to get the education record for {key}: {source}")]
  EducationFetch { key: String, source: BoxError },

  #[error("the user (ID: {0}) hasn't granted access to the profile")]
  AccessNotGranted(u64),

  #[error("failed to create a new affiliation task: {0}")]
  TaskCreation(BoxError),

  #[error("failed to append records to task {task_id}: {source}")]
  Append { task_id: u64, source: BoxError },

  #[error("unhandled event: {0}")]
  Unhandled(String),

  #[error("pipeline aborted: {0}")]
  Aborted(String),

  #[error("{}", join(.0))]
  Aggregate(Vec<Error>),
}

impl Error {
  /// Whether the process should stop serving after this error. Transport
  /// failures while fetching source records or creating a task are fatal;
  /// everything else concerns a single event.
  pub fn is_fatal(&self) -> bool {
    match self {
      Self::IdentityFetch { .. }
      | Self::EmploymentFetch { .. }
      | Self::EducationFetch { .. }
      | Self::TaskCreation(_) => true,
      Self::Aggregate(errors) => errors.iter().any(Self::is_fatal),
      _ => false,
    }
  }
}

fn join(errors: &[Error]) -> String {
  errors
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
