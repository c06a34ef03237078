//! The hublink engine: everything between an inbound event and a record
//! appended to a hub task.
//!
//! - [`access`]: delegated-access token resolution
//! - [`batch`]: the [`BatchCoordinator`] that owns the open hub task
//! - [`pipeline`]: the per-event enrichment pipeline ([`Engine`])
//! - [`dispatch`]: the [`Dispatcher`] that fans queue envelopes out into
//!   concurrent pipelines and joins their results

pub mod access;
pub mod batch;
pub mod dispatch;
pub mod error;
pub mod pipeline;

pub use batch::{BatchConfig, BatchCoordinator};
pub use dispatch::{Dispatcher, Reply};
pub use error::{Error, Result};
pub use pipeline::{Engine, EngineConfig};

#[cfg(test)]
mod fakes;
