//! The [`PortfolioStore`] trait and aggregate result types.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-sqlite`).
//! The HTTP layer (`folio-api`) depends on this abstraction, not on any
//! concrete backend.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (tokio with `axum`).

use std::future::Future;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  dates,
  entity::Experience,
  field::{Filter, RecordId, Stored},
  record::Record,
};

// ─── Aggregate results ───────────────────────────────────────────────────────

/// An experience row with its computed duration. The duration runs from
/// `start_date` to `end_date`, or to `today` for ongoing positions.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceDuration {
  #[serde(flatten)]
  pub experience: Stored<Experience>,
  pub months_duration: i64,
  pub duration_text: String,
}

impl ExperienceDuration {
  pub fn compute(experience: Stored<Experience>, today: NaiveDate) -> Self {
    let end = experience.record.end_date.unwrap_or(today);
    let months = dates::months_between(experience.record.start_date, end).max(0);
    Self {
      months_duration: months,
      duration_text: dates::duration_text(months),
      experience,
    }
  }
}

/// Sum of all experience durations, in fractional years.
pub fn total_years(experiences: &[Stored<Experience>], today: NaiveDate) -> f64 {
  let months: i64 = experiences
    .iter()
    .map(|e| {
      let end = e.record.end_date.unwrap_or(today);
      dates::months_between(e.record.start_date, end).max(0)
    })
    .sum();
  months as f64 / 12.0
}

/// Counts and date range over all education records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationSummary {
  pub total_education: i64,
  pub current_education: i64,
  pub earliest_start: Option<NaiveDate>,
  pub latest_end: Option<NaiveDate>,
}

/// Education records grouped by degree type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeGroup {
  pub degree: String,
  pub count: i64,
  /// Comma-separated institution names.
  pub institutions: String,
}

/// Achievements grouped by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
  pub category: String,
  pub count: i64,
  pub latest: Option<NaiveDate>,
}

/// Headline counts across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsOverview {
  pub total_skills: i64,
  pub completed_projects: i64,
  pub total_certifications: i64,
  pub total_achievements: i64,
  pub education_count: i64,
  pub work_experience_count: i64,
  pub avg_skill_proficiency: Option<f64>,
  pub max_proficiency: Option<i64>,
}

/// One skill category with its members, for the stats report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryStats {
  pub category_name: String,
  pub skill_count: i64,
  pub avg_proficiency: Option<f64>,
  /// Comma-separated skill names.
  pub skills: String,
}

/// A completed project ranked by the skills associated with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProject {
  pub id: RecordId,
  pub title: String,
  pub skill_count: i64,
  /// Comma-separated skill names.
  pub technologies: String,
  pub avg_tech_proficiency: Option<f64>,
}

/// The full statistics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
  pub overview: StatsOverview,
  pub skills_by_category: Vec<SkillCategoryStats>,
  pub top_projects: Vec<TopProject>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a portfolio record store.
///
/// The generic CRUD methods cover every entity uniformly; the named
/// aggregate methods are the fixed reporting queries — there is no general
/// query interface.
pub trait PortfolioStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All records of `R` in the entity's default order, optionally
  /// restricted by one fixed predicate. An empty table yields `Ok(vec![])`,
  /// never an error.
  fn list<R: Record>(
    &self,
    filter: Option<Filter>,
  ) -> impl Future<Output = Result<Vec<Stored<R>>, Self::Error>> + Send + '_;

  /// One record by id; `None` if absent.
  fn get<R: Record>(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Option<Stored<R>>, Self::Error>> + Send + '_;

  /// Validate, sanitise, insert. Returns the store-assigned id.
  fn add<R: Record>(
    &self,
    record: R,
  ) -> impl Future<Output = Result<RecordId, Self::Error>> + Send + '_;

  /// Full-record replace keyed by id. `false` when no row matched.
  fn update<R: Record>(
    &self,
    id: RecordId,
    record: R,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Hard delete. `false` when nothing changed; deleting a missing id is
  /// not an error.
  fn delete<R: Record>(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Named aggregates ──────────────────────────────────────────────────

  /// Every experience with its computed month duration, as of `today`.
  fn experience_durations(
    &self,
    today: NaiveDate,
  ) -> impl Future<Output = Result<Vec<ExperienceDuration>, Self::Error>> + Send + '_;

  /// Total years of experience, as of `today`.
  fn total_experience_years(
    &self,
    today: NaiveDate,
  ) -> impl Future<Output = Result<f64, Self::Error>> + Send + '_;

  fn education_summary(
    &self,
  ) -> impl Future<Output = Result<EducationSummary, Self::Error>> + Send + '_;

  fn education_by_degree(
    &self,
  ) -> impl Future<Output = Result<Vec<DegreeGroup>, Self::Error>> + Send + '_;

  fn achievement_summary(
    &self,
  ) -> impl Future<Output = Result<Vec<CategorySummary>, Self::Error>> + Send + '_;

  fn portfolio_stats(
    &self,
  ) -> impl Future<Output = Result<PortfolioStats, Self::Error>> + Send + '_;
}
