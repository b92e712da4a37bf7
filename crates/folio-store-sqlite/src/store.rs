//! [`SqliteStore`] — the SQLite implementation of [`PortfolioStore`].

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::OptionalExtension as _;

use folio_core::{
  entity::Experience,
  field::{FieldCursor, Filter, RecordId, Stored},
  record::Record,
  store::{
    CategorySummary, DegreeGroup, EducationSummary, ExperienceDuration,
    PortfolioStats, PortfolioStore, SkillCategoryStats, StatsOverview,
    TopProject, total_years,
  },
};

use crate::{
  Error, Result,
  encode::{from_sql_value, parse_opt_date, to_sql_value},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A portfolio store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Associate a skill with a project for the statistics report. The
  /// association has no CRUD endpoint of its own; it is populated by
  /// seeding tools.
  pub async fn link_project_skill(
    &self,
    project_id: RecordId,
    skill_id: RecordId,
  ) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR IGNORE INTO project_skills (project_id, skill_id) VALUES (?1, ?2)",
          rusqlite::params![project_id, skill_id],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── SQL assembly ────────────────────────────────────────────────────────────

fn select_sql<R: Record>(filter: Option<&Filter>) -> String {
  let mut sql = format!(
    "SELECT {}, {} FROM {}",
    R::SELECT_ID,
    R::SELECT_COLUMNS.join(", "),
    R::FROM_CLAUSE,
  );
  if let Some(f) = filter {
    sql.push_str(" WHERE ");
    sql.push_str(&f.clause);
  }
  if !R::DEFAULT_ORDER.is_empty() {
    sql.push_str(" ORDER BY ");
    sql.push_str(R::DEFAULT_ORDER);
  }
  sql
}

fn insert_sql<R: Record>() -> String {
  let placeholders = (1..=R::INSERT_COLUMNS.len())
    .map(|i| format!("?{i}"))
    .collect::<Vec<_>>()
    .join(", ");
  format!(
    "INSERT INTO {} ({}) VALUES ({})",
    R::TABLE,
    R::INSERT_COLUMNS.join(", "),
    placeholders,
  )
}

fn update_sql<R: Record>() -> String {
  let assignments = R::INSERT_COLUMNS
    .iter()
    .enumerate()
    .map(|(i, column)| format!("{column} = ?{}", i + 1))
    .collect::<Vec<_>>()
    .join(", ");
  format!(
    "UPDATE {} SET {} WHERE id = ?{}",
    R::TABLE,
    assignments,
    R::INSERT_COLUMNS.len() + 1,
  )
}

/// Decode one raw row (id plus `SELECT_COLUMNS` values) into a record.
fn decode_row<R: Record>(
  id: RecordId,
  values: Vec<rusqlite::types::Value>,
) -> Result<Stored<R>> {
  let fields = values
    .into_iter()
    .map(from_sql_value)
    .collect::<Result<Vec<_>>>()?;
  let mut cursor = FieldCursor::new(fields);
  let record = R::from_fields(&mut cursor).map_err(Error::Core)?;
  Ok(Stored { id, record })
}

/// Prepare a record for writing: required-field check, then text hygiene.
fn prepare<R: Record>(record: R) -> Result<Vec<rusqlite::types::Value>> {
  record.validate().map_err(Error::Core)?;
  let record = record.sanitized();
  Ok(record.field_values().into_iter().map(to_sql_value).collect())
}

// ─── PortfolioStore impl ─────────────────────────────────────────────────────

impl PortfolioStore for SqliteStore {
  type Error = Error;

  async fn list<R: Record>(&self, filter: Option<Filter>) -> Result<Vec<Stored<R>>> {
    let sql = select_sql::<R>(filter.as_ref());
    let params: Vec<rusqlite::types::Value> = filter
      .map(|f| f.params.into_iter().map(to_sql_value).collect())
      .unwrap_or_default();
    let width = R::SELECT_COLUMNS.len();

    let raw: Vec<(RecordId, Vec<rusqlite::types::Value>)> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(params), |row| {
          let id: RecordId = row.get(0)?;
          let mut values = Vec::with_capacity(width);
          for i in 0..width {
            values.push(row.get::<_, rusqlite::types::Value>(i + 1)?);
          }
          Ok((id, values))
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
      })
      .await?;

    raw
      .into_iter()
      .map(|(id, values)| decode_row::<R>(id, values))
      .collect()
  }

  async fn get<R: Record>(&self, id: RecordId) -> Result<Option<Stored<R>>> {
    let sql = format!(
      "SELECT {}, {} FROM {} WHERE {} = ?1",
      R::SELECT_ID,
      R::SELECT_COLUMNS.join(", "),
      R::FROM_CLAUSE,
      R::SELECT_ID,
    );
    let width = R::SELECT_COLUMNS.len();

    let raw: Option<(RecordId, Vec<rusqlite::types::Value>)> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], |row| {
              let id: RecordId = row.get(0)?;
              let mut values = Vec::with_capacity(width);
              for i in 0..width {
                values.push(row.get::<_, rusqlite::types::Value>(i + 1)?);
              }
              Ok((id, values))
            })
            .optional()?,
        )
      })
      .await?;

    raw
      .map(|(id, values)| decode_row::<R>(id, values))
      .transpose()
  }

  async fn add<R: Record>(&self, record: R) -> Result<RecordId> {
    let params = prepare(record)?;
    let sql = insert_sql::<R>();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(&sql, rusqlite::params_from_iter(params))?;
        Ok(conn.last_insert_rowid())
      })
      .await?;
    Ok(id)
  }

  async fn update<R: Record>(&self, id: RecordId, record: R) -> Result<bool> {
    let mut params = prepare(record)?;
    params.push(rusqlite::types::Value::Integer(id));
    let sql = update_sql::<R>();

    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params_from_iter(params))?))
      .await?;
    Ok(changed > 0)
  }

  async fn delete<R: Record>(&self, id: RecordId) -> Result<bool> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);

    let changed = self
      .conn
      .call(move |conn| Ok(conn.execute(&sql, rusqlite::params![id])?))
      .await?;
    Ok(changed > 0)
  }

  // ── Named aggregates ───────────────────────────────────────────────────────

  async fn experience_durations(
    &self,
    today: NaiveDate,
  ) -> Result<Vec<ExperienceDuration>> {
    let rows = self.list::<Experience>(None).await?;
    Ok(
      rows
        .into_iter()
        .map(|e| ExperienceDuration::compute(e, today))
        .collect(),
    )
  }

  async fn total_experience_years(&self, today: NaiveDate) -> Result<f64> {
    let rows = self.list::<Experience>(None).await?;
    Ok(total_years(&rows, today))
  }

  async fn education_summary(&self) -> Result<EducationSummary> {
    let (total, current, earliest, latest) = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT
             COUNT(*),
             COUNT(CASE WHEN is_current = 1 THEN 1 END),
             MIN(start_date),
             MAX(end_date)
           FROM education",
          [],
          |row| {
            Ok((
              row.get::<_, i64>(0)?,
              row.get::<_, i64>(1)?,
              row.get::<_, Option<String>>(2)?,
              row.get::<_, Option<String>>(3)?,
            ))
          },
        )?)
      })
      .await?;

    Ok(EducationSummary {
      total_education: total,
      current_education: current,
      earliest_start: parse_opt_date(earliest)?,
      latest_end: parse_opt_date(latest)?,
    })
  }

  async fn education_by_degree(&self) -> Result<Vec<DegreeGroup>> {
    let rows: Vec<(String, i64, Option<String>)> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT degree, COUNT(*) AS count, group_concat(institution, ', ')
           FROM education
           GROUP BY degree
           ORDER BY count DESC",
        )?;
        let rows = stmt.query_map([], |row| {
          Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
      })
      .await?;

    Ok(
      rows
        .into_iter()
        .map(|(degree, count, institutions)| DegreeGroup {
          degree,
          count,
          institutions: institutions.unwrap_or_default(),
        })
        .collect(),
    )
  }

  async fn achievement_summary(&self) -> Result<Vec<CategorySummary>> {
    let rows: Vec<(String, i64, Option<String>)> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT category, COUNT(*) AS count, MAX(date_achieved) AS latest
           FROM achievements
           GROUP BY category
           ORDER BY count DESC, latest DESC",
        )?;
        let rows = stmt.query_map([], |row| {
          Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
      })
      .await?;

    rows
      .into_iter()
      .map(|(category, count, latest)| {
        Ok(CategorySummary {
          category,
          count,
          latest: parse_opt_date(latest)?,
        })
      })
      .collect()
  }

  async fn portfolio_stats(&self) -> Result<PortfolioStats> {
    self
      .conn
      .call(|conn| {
        let overview = conn.query_row(
          "SELECT
             (SELECT COUNT(*) FROM skills),
             (SELECT COUNT(*) FROM projects WHERE status = 'completed'),
             (SELECT COUNT(*) FROM certifications),
             (SELECT COUNT(*) FROM achievements),
             (SELECT COUNT(*) FROM education),
             (SELECT COUNT(*) FROM experience),
             (SELECT AVG(proficiency) FROM skills),
             (SELECT MAX(proficiency) FROM skills)",
          [],
          |row| {
            Ok(StatsOverview {
              total_skills: row.get(0)?,
              completed_projects: row.get(1)?,
              total_certifications: row.get(2)?,
              total_achievements: row.get(3)?,
              education_count: row.get(4)?,
              work_experience_count: row.get(5)?,
              avg_skill_proficiency: row.get(6)?,
              max_proficiency: row.get(7)?,
            })
          },
        )?;

        let mut stmt = conn.prepare(
          "SELECT c.name, COUNT(s.id), AVG(s.proficiency), group_concat(s.name, ', ')
           FROM skill_categories c
           LEFT JOIN skills s ON c.id = s.category_id
           GROUP BY c.id, c.name
           HAVING COUNT(s.id) > 0
           ORDER BY AVG(s.proficiency) DESC",
        )?;
        let skills_by_category = stmt
          .query_map([], |row| {
            Ok(SkillCategoryStats {
              category_name: row.get(0)?,
              skill_count: row.get(1)?,
              avg_proficiency: row.get(2)?,
              skills: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut stmt = conn.prepare(
          "SELECT p.id, p.title, COUNT(ps.skill_id),
                  group_concat(s.name, ', '), AVG(s.proficiency)
           FROM projects p
           LEFT JOIN project_skills ps ON p.id = ps.project_id
           LEFT JOIN skills s ON ps.skill_id = s.id
           WHERE p.status = 'completed'
           GROUP BY p.id, p.title
           HAVING COUNT(ps.skill_id) > 0
           ORDER BY AVG(s.proficiency) DESC, COUNT(ps.skill_id) DESC
           LIMIT 5",
        )?;
        let top_projects = stmt
          .query_map([], |row| {
            Ok(TopProject {
              id: row.get(0)?,
              title: row.get(1)?,
              skill_count: row.get(2)?,
              technologies: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
              avg_tech_proficiency: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(PortfolioStats {
          overview,
          skills_by_category,
          top_projects,
        })
      })
      .await
      .map_err(Error::from)
  }
}
