//! Employment and education entries → [`AffiliationRecord`]s.

use hublink_core::{
  source::{Degree, Employment},
  task::{AffiliationRecord, AffiliationType},
};

use crate::{degrees, qualifications::QualificationTable};

/// The person a batch of records is filed for.
#[derive(Debug, Clone, Copy)]
pub struct Recipient<'a> {
  pub email:      &'a str,
  pub profile_id: &'a str,
}

impl Recipient<'_> {
  fn record(&self, affiliation_type: AffiliationType) -> AffiliationRecord {
    AffiliationRecord {
      affiliation_type,
      department: None,
      role: None,
      start_date: None,
      end_date: None,
      profile_id: non_empty(self.profile_id),
      email: non_empty(self.email),
      external_id: None,
      is_active: false,
    }
  }
}

/// One record per job. Dates are copied verbatim; a job without an end date
/// is the person's current position.
pub fn employment_records(employment: &Employment, recipient: Recipient<'_>) -> Vec<AffiliationRecord> {
  employment
    .job
    .iter()
    .map(|job| AffiliationRecord {
      department: non_empty(&job.department_description),
      role: non_empty(&job.position_description),
      start_date: non_empty(&job.job_start_date),
      end_date: non_empty(&job.job_end_date),
      external_id: non_empty(&job.position_number),
      is_active: job.job_end_date.trim().is_empty(),
      ..recipient.record(AffiliationType::Employment)
    })
    .collect()
}

/// One record per conferred degree, starting and ending on the conferral
/// date.
pub fn education_records(
  degrees: &[Degree],
  recipient: Recipient<'_>,
  qualifications: &QualificationTable,
) -> Vec<AffiliationRecord> {
  degrees
    .iter()
    .map(|degree| {
      let conferred = non_empty(conferral_date(&degree.confer_date));
      AffiliationRecord {
        department: degree
          .plans
          .first()
          .and_then(|plan| non_empty(&plan.acad_group_desc)),
        role: non_empty(&degree_title(degree, qualifications)),
        start_date: conferred.clone(),
        end_date: conferred,
        external_id: non_empty(&degree.student_deg_nbr),
        ..recipient.record(AffiliationType::Education)
      }
    })
    .collect()
}

/// The date part of a conferral timestamp: `1990-05-03T12:00:00.000Z` →
/// `1990-05-03`.
pub fn conferral_date(timestamp: &str) -> &str {
  timestamp
    .split_once('T')
    .map_or(timestamp, |(date, _)| date)
    .trim()
}

/// Resolve a degree's title: the qualification table by code, then the
/// static table by description, then the description itself.
pub fn degree_title(degree: &Degree, qualifications: &QualificationTable) -> String {
  if let Some(title) = qualifications.title(&degree.code) {
    return title.to_string();
  }
  if let Some(title) = degrees::degree_title(&degree.description) {
    return title.to_string();
  }
  tracing::debug!(code = %degree.code, description = %degree.description, "no title for degree");
  degree.description.clone()
}

fn non_empty(s: &str) -> Option<String> {
  let s = s.trim();
  (!s.is_empty()).then(|| s.to_string())
}
