//! Employment and education records, and the [`SourceSystem`] trait through
//! which they (and identities) are fetched.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

// ─── Employment ──────────────────────────────────────────────────────────────

/// The employment history of one employee. An unknown employee yields an
/// empty `job` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employment {
  #[serde(default, rename = "employeeID")]
  pub employee_id: String,
  #[serde(default)]
  pub job:         Vec<Job>,
}

/// One position held by an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
  #[serde(default)]
  pub department_description: String,
  #[serde(default, rename = "departmentID")]
  pub department_id:          String,
  #[serde(default)]
  pub position_description:   String,
  #[serde(default)]
  pub position_number:        String,
  #[serde(default)]
  pub job_start_date:         String,
  #[serde(default)]
  pub job_end_date:           String,
  #[serde(default)]
  pub hr_status:              String,
  #[serde(default)]
  pub location_description:   String,
}

// ─── Education ───────────────────────────────────────────────────────────────

/// A conferred degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
  #[serde(default)]
  pub id:                 String,
  #[serde(default)]
  pub student_deg_nbr:    String,
  #[serde(default, rename = "degreeCode")]
  pub code:               String,
  #[serde(default, rename = "degreeDesc")]
  pub description:        String,
  /// Conferral timestamp, e.g. `1990-05-03T12:00:00.000Z`.
  #[serde(default, rename = "degreeConferDate")]
  pub confer_date:        String,
  #[serde(default)]
  pub honors_suffix:      String,
  #[serde(default, rename = "degreePlans")]
  pub plans:              Vec<DegreePlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreePlan {
  #[serde(default)]
  pub acad_plan_code:  String,
  #[serde(default)]
  pub acad_plan_desc:  String,
  #[serde(default)]
  pub acad_prog_level: String,
  #[serde(default)]
  pub acad_group_desc: String,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Read access to the institutional identity, HR and student systems.
///
/// "Not found" is never an error: identities come back as the zero value,
/// employment and education as empty collections. An `Err` always means the
/// lookup itself failed.
pub trait SourceSystem: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up an identity by short-code or numeric id.
  fn identity<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Identity, Self::Error>> + Send + 'a;

  /// Employment history for a short-code or employee id.
  fn employment<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Employment, Self::Error>> + Send + 'a;

  /// Conferred degrees for a short-code or student id.
  fn education<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Vec<Degree>, Self::Error>> + Send + 'a;

  /// Record `profile_id` as the identity's external profile identifier.
  fn link_profile_id<'a>(
    &'a self,
    identity_id: u64,
    profile_id: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
