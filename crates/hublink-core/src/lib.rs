//! Core types and trait definitions for hublink.
//!
//! No HTTP or runtime dependencies. The crate describes the inbound events,
//! the records read from the institutional source system, the task documents
//! kept on the affiliation hub, and the two traits ([`source::SourceSystem`],
//! [`hub::TaskHub`]) through which the engine reaches those remote systems.

pub mod error;
pub mod event;
pub mod hub;
pub mod identity;
pub mod source;
pub mod task;
pub mod token;

pub use error::{Error, Result};
