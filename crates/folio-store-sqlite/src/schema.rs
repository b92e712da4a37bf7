//! SQL schema for the Folio SQLite store.
//!
//! Executed once at connection startup. `AUTOINCREMENT` keeps the identifier
//! invariant: ids are never reused, even after a hard delete. The singleton
//! profile row and the standard skill categories are seeded idempotently.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS` and
/// `INSERT OR IGNORE`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS profile (
    id                  INTEGER PRIMARY KEY CHECK (id = 1),
    full_name           TEXT NOT NULL DEFAULT '',
    professional_title  TEXT NOT NULL DEFAULT '',
    bio                 TEXT NOT NULL DEFAULT '',
    email               TEXT NOT NULL DEFAULT '',
    phone               TEXT NOT NULL DEFAULT '',
    facebook_url        TEXT NOT NULL DEFAULT '',
    profile_photo_url   TEXT NOT NULL DEFAULT ''
);
INSERT OR IGNORE INTO profile (id) VALUES (1);

CREATE TABLE IF NOT EXISTS projects (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    title         TEXT NOT NULL,
    description   TEXT NOT NULL DEFAULT '',
    project_url   TEXT NOT NULL DEFAULT '#',
    repo_url      TEXT NOT NULL DEFAULT '#',
    project_date  TEXT NOT NULL,            -- YYYY-MM-DD
    image_url     TEXT NOT NULL DEFAULT '',
    status        TEXT NOT NULL DEFAULT 'completed',
    featured      INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS skill_categories (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT NOT NULL UNIQUE
);
INSERT OR IGNORE INTO skill_categories (name) VALUES
    ('Programming Languages'),
    ('Frameworks & Libraries'),
    ('Tools & Platforms'),
    ('Databases'),
    ('Soft Skills');

CREATE TABLE IF NOT EXISTS skills (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    proficiency  INTEGER NOT NULL DEFAULT 0,
    category_id  INTEGER REFERENCES skill_categories(id)
);

-- Project <-> skill association; used only by the statistics report.
CREATE TABLE IF NOT EXISTS project_skills (
    project_id  INTEGER NOT NULL REFERENCES projects(id),
    skill_id    INTEGER NOT NULL REFERENCES skills(id),
    PRIMARY KEY (project_id, skill_id)
);

CREATE TABLE IF NOT EXISTS experience (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    company          TEXT NOT NULL,
    position         TEXT NOT NULL,
    employment_type  TEXT NOT NULL DEFAULT 'full-time',
    location         TEXT NOT NULL DEFAULT '',
    start_date       TEXT NOT NULL,         -- YYYY-MM-DD
    end_date         TEXT,                  -- NULL = ongoing
    is_current       INTEGER NOT NULL DEFAULT 0,
    description      TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS education (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    institution     TEXT NOT NULL,
    degree          TEXT NOT NULL,
    field_of_study  TEXT NOT NULL DEFAULT '',
    start_date      TEXT,
    end_date        TEXT,
    grade           TEXT NOT NULL DEFAULT '',
    description     TEXT NOT NULL DEFAULT '',
    location        TEXT NOT NULL DEFAULT '',
    is_current      INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS certifications (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    title                 TEXT NOT NULL,
    issuing_organization  TEXT NOT NULL,
    issue_date            TEXT,
    expiry_date           TEXT,             -- NULL = never expires
    credential_id         TEXT NOT NULL DEFAULT '',
    credential_url        TEXT NOT NULL DEFAULT '',
    description           TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS achievements (
    id                    INTEGER PRIMARY KEY AUTOINCREMENT,
    title                 TEXT NOT NULL,
    category              TEXT NOT NULL DEFAULT 'other',
    description           TEXT NOT NULL DEFAULT '',
    date_achieved         TEXT,
    issuing_organization  TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS hobbies (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    description  TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS contacts (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    visitor_name   TEXT NOT NULL,
    visitor_email  TEXT NOT NULL,
    subject        TEXT NOT NULL DEFAULT '',
    message        TEXT NOT NULL,
    received_at    TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS skills_proficiency_idx     ON skills(proficiency);
CREATE INDEX IF NOT EXISTS projects_date_idx          ON projects(project_date);
CREATE INDEX IF NOT EXISTS experience_start_idx       ON experience(start_date);
CREATE INDEX IF NOT EXISTS certifications_expiry_idx  ON certifications(expiry_date);
CREATE INDEX IF NOT EXISTS achievements_category_idx  ON achievements(category);

PRAGMA user_version = 1;
";
