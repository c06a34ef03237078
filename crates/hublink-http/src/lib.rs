//! HTTP backends for hublink.
//!
//! - [`SourceClient`] implements [`hublink_core::source::SourceSystem`]
//!   against the institutional REST APIs (API-key authenticated).
//! - [`HubClient`] implements [`hublink_core::hub::TaskHub`] against the
//!   affiliation hub (OAuth2 client-credentials bearer).
//!
//! Both are cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.

mod hub;
mod source;

pub mod error;

pub use error::{Error, Result};
pub use hub::{HubClient, HubConfig};
pub use source::{SourceClient, SourceConfig};
