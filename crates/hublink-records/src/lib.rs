//! Mapping between source-system records and hub affiliation records.
//!
//! Entry points:
//! - [`employment_records`]: one record per job
//! - [`education_records`]: one record per conferred degree, titled through
//!   a [`QualificationTable`] and the static [`degrees`] table

pub mod degrees;
pub mod error;
pub mod qualifications;
pub mod transform;

pub use error::{Error, Result};
pub use qualifications::QualificationTable;
pub use transform::{Recipient, conferral_date, degree_title, education_records, employment_records};
