//! The portfolio entities — each one is pure configuration of [`Record`].
//!
//! Field defaults mirror what the endpoints apply when a field is omitted
//! from a request body (e.g. `employment_type` falls back to `"full-time"`,
//! an achievement's `category` to `"other"`). Optional dates carry the
//! meaning "still ongoing" or "not applicable", never an error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Result,
  field::{FieldCursor, FieldValue, RecordId},
  record::Record,
  sanitize::{clean, required, validate_email},
};

/// Fixed identifier of the singleton profile row.
pub const PROFILE_ID: RecordId = 1;

// ─── Profile ─────────────────────────────────────────────────────────────────

/// The site owner's profile. A singleton: read and updated under
/// [`PROFILE_ID`], never created or deleted through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
  pub full_name: String,
  #[serde(default)]
  pub professional_title: String,
  #[serde(default)]
  pub bio: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub phone: String,
  #[serde(default)]
  pub facebook_url: String,
  #[serde(default)]
  pub profile_photo_url: String,
}

impl Record for Profile {
  const TABLE: &'static str = "profile";
  const NOUN: &'static str = "Profile";
  const INSERT_COLUMNS: &'static [&'static str] = &[
    "full_name",
    "professional_title",
    "bio",
    "email",
    "phone",
    "facebook_url",
    "profile_photo_url",
  ];
  const SELECT_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;
  const DEFAULT_ORDER: &'static str = "";

  fn validate(&self) -> Result<()> {
    required("full_name", &self.full_name)
  }

  fn sanitized(self) -> Self {
    Self {
      full_name: clean(&self.full_name),
      professional_title: clean(&self.professional_title),
      bio: clean(&self.bio),
      email: self.email.trim().to_owned(),
      phone: clean(&self.phone),
      facebook_url: clean(&self.facebook_url),
      profile_photo_url: clean(&self.profile_photo_url),
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.full_name.clone().into(),
      self.professional_title.clone().into(),
      self.bio.clone().into(),
      self.email.clone().into(),
      self.phone.clone().into(),
      self.facebook_url.clone().into(),
      self.profile_photo_url.clone().into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      full_name: row.text("full_name")?,
      professional_title: row.text("professional_title")?,
      bio: row.text("bio")?,
      email: row.text("email")?,
      phone: row.text("phone")?,
      facebook_url: row.text("facebook_url")?,
      profile_photo_url: row.text("profile_photo_url")?,
    })
  }
}

// ─── Project ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default = "default_link")]
  pub project_url: String,
  #[serde(default = "default_link")]
  pub repo_url: String,
  #[serde(default = "today")]
  pub project_date: NaiveDate,
  #[serde(default = "default_project_image")]
  pub image_url: String,
  #[serde(default = "default_status")]
  pub status: String,
  #[serde(default)]
  pub featured: bool,
}

impl Record for Project {
  const TABLE: &'static str = "projects";
  const NOUN: &'static str = "Project";
  const INSERT_COLUMNS: &'static [&'static str] = &[
    "title",
    "description",
    "project_url",
    "repo_url",
    "project_date",
    "image_url",
    "status",
    "featured",
  ];
  const SELECT_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;
  const DEFAULT_ORDER: &'static str = "project_date DESC";

  fn validate(&self) -> Result<()> {
    required("title", &self.title)
  }

  fn sanitized(self) -> Self {
    Self {
      title: clean(&self.title),
      description: clean(&self.description),
      project_url: clean(&self.project_url),
      repo_url: clean(&self.repo_url),
      image_url: clean(&self.image_url),
      status: clean(&self.status),
      ..self
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.title.clone().into(),
      self.description.clone().into(),
      self.project_url.clone().into(),
      self.repo_url.clone().into(),
      self.project_date.into(),
      self.image_url.clone().into(),
      self.status.clone().into(),
      self.featured.into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      title: row.text("title")?,
      description: row.text("description")?,
      project_url: row.text("project_url")?,
      repo_url: row.text("repo_url")?,
      project_date: row.date("project_date")?,
      image_url: row.text("image_url")?,
      status: row.text("status")?,
      featured: row.boolean("featured")?,
    })
  }
}

// ─── Skill ───────────────────────────────────────────────────────────────────

/// A skill with an optional category. Reads join `skill_categories` to
/// resolve the category name; that column is never written through here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
  pub name: String,
  #[serde(default)]
  pub proficiency: i64,
  #[serde(default)]
  pub category_id: Option<i64>,
  /// Resolved on read; `"Uncategorized"` when no category is set.
  #[serde(default = "default_category_name")]
  pub category_name: String,
}

impl Record for Skill {
  const TABLE: &'static str = "skills";
  const NOUN: &'static str = "Skill";
  const INSERT_COLUMNS: &'static [&'static str] = &["name", "proficiency", "category_id"];
  const SELECT_COLUMNS: &'static [&'static str] = &[
    "s.name",
    "s.proficiency",
    "s.category_id",
    "c.name AS category_name",
  ];
  const FROM_CLAUSE: &'static str =
    "skills s LEFT JOIN skill_categories c ON s.category_id = c.id";
  const SELECT_ID: &'static str = "s.id";
  const DEFAULT_ORDER: &'static str = "s.proficiency DESC";

  fn validate(&self) -> Result<()> {
    required("name", &self.name)
  }

  fn sanitized(self) -> Self {
    Self { name: clean(&self.name), ..self }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.name.clone().into(),
      self.proficiency.into(),
      self.category_id.into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      name: row.text("name")?,
      proficiency: row.integer("proficiency")?,
      category_id: row.opt_integer("category_id")?,
      category_name: row
        .opt_text("category_name")?
        .unwrap_or_else(default_category_name),
    })
  }
}

// ─── Experience ──────────────────────────────────────────────────────────────

/// A work-experience entry. `end_date: None` means the position is ongoing;
/// `is_current` is kept independently and only drives display ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
  pub company: String,
  pub position: String,
  #[serde(default = "default_employment_type")]
  pub employment_type: String,
  #[serde(default)]
  pub location: String,
  pub start_date: NaiveDate,
  #[serde(default)]
  pub end_date: Option<NaiveDate>,
  #[serde(default)]
  pub is_current: bool,
  #[serde(default)]
  pub description: String,
}

impl Record for Experience {
  const TABLE: &'static str = "experience";
  const NOUN: &'static str = "Experience";
  const INSERT_COLUMNS: &'static [&'static str] = &[
    "company",
    "position",
    "employment_type",
    "location",
    "start_date",
    "end_date",
    "is_current",
    "description",
  ];
  const SELECT_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;
  const DEFAULT_ORDER: &'static str = "is_current DESC, start_date DESC";

  fn validate(&self) -> Result<()> {
    required("company", &self.company)?;
    required("position", &self.position)
  }

  fn sanitized(self) -> Self {
    Self {
      company: clean(&self.company),
      position: clean(&self.position),
      employment_type: clean(&self.employment_type),
      location: clean(&self.location),
      description: clean(&self.description),
      ..self
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.company.clone().into(),
      self.position.clone().into(),
      self.employment_type.clone().into(),
      self.location.clone().into(),
      self.start_date.into(),
      self.end_date.into(),
      self.is_current.into(),
      self.description.clone().into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      company: row.text("company")?,
      position: row.text("position")?,
      employment_type: row.text("employment_type")?,
      location: row.text("location")?,
      start_date: row.date("start_date")?,
      end_date: row.opt_date("end_date")?,
      is_current: row.boolean("is_current")?,
      description: row.text("description")?,
    })
  }
}

// ─── Education ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
  pub institution: String,
  pub degree: String,
  #[serde(default)]
  pub field_of_study: String,
  #[serde(default)]
  pub start_date: Option<NaiveDate>,
  #[serde(default)]
  pub end_date: Option<NaiveDate>,
  #[serde(default)]
  pub grade: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub location: String,
  #[serde(default)]
  pub is_current: bool,
}

impl Record for Education {
  const TABLE: &'static str = "education";
  const NOUN: &'static str = "Education";
  const INSERT_COLUMNS: &'static [&'static str] = &[
    "institution",
    "degree",
    "field_of_study",
    "start_date",
    "end_date",
    "grade",
    "description",
    "location",
    "is_current",
  ];
  const SELECT_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;
  const DEFAULT_ORDER: &'static str = "is_current DESC, start_date DESC";

  fn validate(&self) -> Result<()> {
    required("institution", &self.institution)?;
    required("degree", &self.degree)
  }

  fn sanitized(self) -> Self {
    Self {
      institution: clean(&self.institution),
      degree: clean(&self.degree),
      field_of_study: clean(&self.field_of_study),
      grade: clean(&self.grade),
      description: clean(&self.description),
      location: clean(&self.location),
      ..self
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.institution.clone().into(),
      self.degree.clone().into(),
      self.field_of_study.clone().into(),
      self.start_date.into(),
      self.end_date.into(),
      self.grade.clone().into(),
      self.description.clone().into(),
      self.location.clone().into(),
      self.is_current.into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      institution: row.text("institution")?,
      degree: row.text("degree")?,
      field_of_study: row.text("field_of_study")?,
      start_date: row.opt_date("start_date")?,
      end_date: row.opt_date("end_date")?,
      grade: row.text("grade")?,
      description: row.text("description")?,
      location: row.text("location")?,
      is_current: row.boolean("is_current")?,
    })
  }
}

// ─── Certification ───────────────────────────────────────────────────────────

/// A certification. `expiry_date: None` means it never expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
  pub title: String,
  pub issuing_organization: String,
  #[serde(default)]
  pub issue_date: Option<NaiveDate>,
  #[serde(default)]
  pub expiry_date: Option<NaiveDate>,
  #[serde(default)]
  pub credential_id: String,
  #[serde(default)]
  pub credential_url: String,
  #[serde(default)]
  pub description: String,
}

impl Record for Certification {
  const TABLE: &'static str = "certifications";
  const NOUN: &'static str = "Certification";
  const INSERT_COLUMNS: &'static [&'static str] = &[
    "title",
    "issuing_organization",
    "issue_date",
    "expiry_date",
    "credential_id",
    "credential_url",
    "description",
  ];
  const SELECT_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;
  const DEFAULT_ORDER: &'static str = "issue_date DESC";

  fn validate(&self) -> Result<()> {
    required("title", &self.title)?;
    required("issuing_organization", &self.issuing_organization)
  }

  fn sanitized(self) -> Self {
    Self {
      title: clean(&self.title),
      issuing_organization: clean(&self.issuing_organization),
      credential_id: clean(&self.credential_id),
      credential_url: clean(&self.credential_url),
      description: clean(&self.description),
      ..self
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.title.clone().into(),
      self.issuing_organization.clone().into(),
      self.issue_date.into(),
      self.expiry_date.into(),
      self.credential_id.clone().into(),
      self.credential_url.clone().into(),
      self.description.clone().into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      title: row.text("title")?,
      issuing_organization: row.text("issuing_organization")?,
      issue_date: row.opt_date("issue_date")?,
      expiry_date: row.opt_date("expiry_date")?,
      credential_id: row.text("credential_id")?,
      credential_url: row.text("credential_url")?,
      description: row.text("description")?,
    })
  }
}

// ─── Achievement ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
  pub title: String,
  #[serde(default = "default_achievement_category")]
  pub category: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub date_achieved: Option<NaiveDate>,
  #[serde(default)]
  pub issuing_organization: String,
}

impl Record for Achievement {
  const TABLE: &'static str = "achievements";
  const NOUN: &'static str = "Achievement";
  const INSERT_COLUMNS: &'static [&'static str] = &[
    "title",
    "category",
    "description",
    "date_achieved",
    "issuing_organization",
  ];
  const SELECT_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;
  const DEFAULT_ORDER: &'static str = "date_achieved DESC";

  fn validate(&self) -> Result<()> {
    required("title", &self.title)
  }

  fn sanitized(self) -> Self {
    Self {
      title: clean(&self.title),
      category: clean(&self.category),
      description: clean(&self.description),
      issuing_organization: clean(&self.issuing_organization),
      ..self
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.title.clone().into(),
      self.category.clone().into(),
      self.description.clone().into(),
      self.date_achieved.into(),
      self.issuing_organization.clone().into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      title: row.text("title")?,
      category: row.text("category")?,
      description: row.text("description")?,
      date_achieved: row.opt_date("date_achieved")?,
      issuing_organization: row.text("issuing_organization")?,
    })
  }
}

// ─── Hobby ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hobby {
  pub name: String,
  #[serde(default)]
  pub description: String,
}

impl Record for Hobby {
  const TABLE: &'static str = "hobbies";
  const NOUN: &'static str = "Hobby";
  const INSERT_COLUMNS: &'static [&'static str] = &["name", "description"];
  const SELECT_COLUMNS: &'static [&'static str] = Self::INSERT_COLUMNS;
  const DEFAULT_ORDER: &'static str = "";

  fn validate(&self) -> Result<()> {
    required("name", &self.name)
  }

  fn sanitized(self) -> Self {
    Self {
      name: clean(&self.name),
      description: clean(&self.description),
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![self.name.clone().into(), self.description.clone().into()]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      name: row.text("name")?,
      description: row.text("description")?,
    })
  }
}

// ─── ContactMessage ──────────────────────────────────────────────────────────

/// A visitor contact submission. Write-once: the public API only ever adds
/// these; the list is an admin-style read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
  pub visitor_name: String,
  pub visitor_email: String,
  #[serde(default)]
  pub subject: String,
  pub message: String,
  /// Assigned by the store on insert.
  #[serde(skip_deserializing)]
  pub received_at: Option<DateTime<Utc>>,
}

impl Record for ContactMessage {
  const TABLE: &'static str = "contacts";
  const NOUN: &'static str = "Message";
  const INSERT_COLUMNS: &'static [&'static str] =
    &["visitor_name", "visitor_email", "subject", "message"];
  const SELECT_COLUMNS: &'static [&'static str] =
    &["visitor_name", "visitor_email", "subject", "message", "received_at"];
  const DEFAULT_ORDER: &'static str = "received_at DESC";

  fn validate(&self) -> Result<()> {
    required("visitor_name", &self.visitor_name)?;
    required("visitor_email", &self.visitor_email)?;
    required("message", &self.message)?;
    validate_email(self.visitor_email.trim())
  }

  fn sanitized(self) -> Self {
    Self {
      visitor_name: clean(&self.visitor_name),
      visitor_email: self.visitor_email.trim().to_owned(),
      subject: clean(&self.subject),
      message: clean(&self.message),
      ..self
    }
  }

  fn field_values(&self) -> Vec<FieldValue> {
    vec![
      self.visitor_name.clone().into(),
      self.visitor_email.clone().into(),
      self.subject.clone().into(),
      self.message.clone().into(),
    ]
  }

  fn from_fields(row: &mut FieldCursor) -> Result<Self> {
    Ok(Self {
      visitor_name: row.text("visitor_name")?,
      visitor_email: row.text("visitor_email")?,
      subject: row.text("subject")?,
      message: row.text("message")?,
      received_at: Some(row.timestamp("received_at")?),
    })
  }
}

// ─── Field defaults ──────────────────────────────────────────────────────────

fn today() -> NaiveDate {
  Utc::now().date_naive()
}

fn default_link() -> String {
  "#".to_owned()
}

fn default_project_image() -> String {
  "https://placehold.co/600x400/555/FFF?text=Project".to_owned()
}

fn default_status() -> String {
  "completed".to_owned()
}

fn default_category_name() -> String {
  "Uncategorized".to_owned()
}

fn default_employment_type() -> String {
  "full-time".to_owned()
}

fn default_achievement_category() -> String {
  "other".to_owned()
}
