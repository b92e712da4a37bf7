//! Integration tests over the full router, backed by an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode, header},
};
use folio_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use super::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.unwrap();
  api_router(Arc::new(store))
}

async fn send_raw(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<String>,
) -> (StatusCode, Value) {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(text) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(text))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };
  let resp = app.clone().oneshot(req).await.unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  let json = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap()
  };
  (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
  send_raw(app, "GET", uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
  send_raw(app, "POST", uri, Some(body.to_string())).await
}

// ── Method and action contract ─────────────────────────────────────────────

#[tokio::test]
async fn unsupported_method_is_405() {
  let app = app().await;
  let (status, _) = send_raw(&app, "PUT", "/projects", Some("{}".to_owned())).await;
  assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn post_without_action_is_400() {
  let app = app().await;
  let (status, body) = post(&app, "/skills", json!({ "name": "Rust" })).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["message"], "action parameter is required");
}

#[tokio::test]
async fn post_with_unknown_action_is_400() {
  let app = app().await;
  let (status, body) =
    post(&app, "/skills", json!({ "action": "upsert", "name": "Rust" })).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["message"].as_str().unwrap().contains("invalid action"));
}

#[tokio::test]
async fn malformed_json_body_is_400() {
  let app = app().await;
  let (status, _) = send_raw(&app, "POST", "/skills", Some("{not json".to_owned())).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_with_missing_required_field_is_400() {
  let app = app().await;
  // `position` has no default, so decoding the body already fails.
  let (status, _) = post(
    &app,
    "/experience",
    json!({ "action": "add", "company": "Acme", "start_date": "2020-01-01" }),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Profile ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn profile_is_seeded_and_readable() {
  let app = app().await;
  let (status, body) = get(&app, "/profile").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn profile_update_round_trips() {
  let app = app().await;
  let (status, body) = post(
    &app,
    "/profile",
    json!({ "action": "update", "full_name": "Ada Lovelace", "professional_title": "Engineer" }),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "Profile Updated");

  let (_, body) = get(&app, "/profile").await;
  assert_eq!(body["full_name"], "Ada Lovelace");
  assert_eq!(body["professional_title"], "Engineer");
}

#[tokio::test]
async fn profile_rejects_other_actions() {
  let app = app().await;
  let (status, _) = post(
    &app,
    "/profile",
    json!({ "action": "delete", "full_name": "x" }),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Generic CRUD ───────────────────────────────────────────────────────────

#[tokio::test]
async fn add_project_answers_201_with_id_and_applies_defaults() {
  let app = app().await;
  let (status, body) = post(
    &app,
    "/projects",
    json!({ "action": "add", "title": "Folio" }),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["message"], "Project Added");
  assert!(body["id"].is_i64());

  let (_, list) = get(&app, "/projects").await;
  let rows = list.as_array().unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["title"], "Folio");
  assert_eq!(rows[0]["project_url"], "#");
  assert_eq!(rows[0]["status"], "completed");
}

#[tokio::test]
async fn update_of_missing_record_is_404() {
  let app = app().await;
  let (status, _) = post(
    &app,
    "/projects",
    json!({ "action": "update", "id": 99, "title": "Ghost" }),
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_answers_200_then_404() {
  let app = app().await;
  let (_, body) = post(&app, "/skills", json!({ "action": "add", "name": "Rust" })).await;
  let id = body["id"].as_i64().unwrap();

  let (status, body) =
    post(&app, "/skills", json!({ "action": "delete", "id": id })).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["message"], "Skill Deleted");

  let (status, _) = post(&app, "/skills", json!({ "action": "delete", "id": id })).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn free_text_is_sanitized_on_the_way_in() {
  let app = app().await;
  post(
    &app,
    "/hobbies",
    json!({ "action": "add", "name": "<b>chess</b> & go" }),
  )
  .await;
  let (_, list) = get(&app, "/hobbies").await;
  assert_eq!(list[0]["name"], "chess &amp; go");
}

// ── Read modes ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn achievements_default_category_and_filter() {
  let app = app().await;
  let (status, _) = post(
    &app,
    "/achievements",
    json!({ "action": "add", "title": "Hackathon winner", "date_achieved": "2024-03-01" }),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  post(
    &app,
    "/achievements",
    json!({ "action": "add", "title": "Dean's list", "category": "academic" }),
  )
  .await;

  let (_, filtered) = get(&app, "/achievements?category=other").await;
  let rows = filtered.as_array().unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["title"], "Hackathon winner");

  let (_, summary) = get(&app, "/achievements?summary=true").await;
  assert_eq!(summary.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn certifications_active_excludes_expired() {
  let app = app().await;
  post(
    &app,
    "/certifications",
    json!({
      "action": "add",
      "title": "Old Cert",
      "issuing_organization": "Org",
      "expiry_date": "2000-01-01"
    }),
  )
  .await;
  post(
    &app,
    "/certifications",
    json!({ "action": "add", "title": "Evergreen", "issuing_organization": "Org" }),
  )
  .await;

  let (_, all) = get(&app, "/certifications").await;
  assert_eq!(all.as_array().unwrap().len(), 2);

  let (_, active) = get(&app, "/certifications?active=true").await;
  let rows = active.as_array().unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0]["title"], "Evergreen");
}

#[tokio::test]
async fn experience_duration_and_total_years_modes() {
  let app = app().await;
  post(
    &app,
    "/experience",
    json!({
      "action": "add",
      "company": "Acme",
      "position": "Engineer",
      "start_date": "2020-01-01",
      "end_date": "2022-01-01"
    }),
  )
  .await;

  let (status, rows) = get(&app, "/experience?duration=true").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(rows[0]["months_duration"], 24);
  assert_eq!(rows[0]["duration_text"], "2 years 0 months");

  let (status, body) = get(&app, "/experience?total_years=true").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["total_years"], 2.0);
}

#[tokio::test]
async fn education_summary_and_by_degree_modes() {
  let app = app().await;
  post(
    &app,
    "/education",
    json!({
      "action": "add",
      "institution": "MIT",
      "degree": "BSc",
      "start_date": "2015-09-01",
      "end_date": "2019-06-01"
    }),
  )
  .await;

  let (status, summary) = get(&app, "/education?summary=true").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(summary["total_education"], 1);

  let (status, groups) = get(&app, "/education?by_degree=true").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(groups[0]["degree"], "BSc");
  assert_eq!(groups[0]["count"], 1);
}

// ── Contacts ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn contact_submission_answers_201() {
  let app = app().await;
  let (status, body) = post(
    &app,
    "/contacts",
    json!({
      "visitor_name": "Sam",
      "visitor_email": "sam@example.com",
      "message": "Hello there"
    }),
  )
  .await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body["message"], "Message Sent");
  assert!(body["id"].is_i64());

  let (_, list) = get(&app, "/contacts").await;
  assert_eq!(list[0]["visitor_name"], "Sam");
  assert!(list[0]["received_at"].is_string());
}

#[tokio::test]
async fn contact_missing_message_is_400_and_not_stored() {
  let app = app().await;
  let (status, _) = post(
    &app,
    "/contacts",
    json!({ "visitor_name": "Sam", "visitor_email": "sam@example.com", "message": "" }),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let (_, list) = get(&app, "/contacts").await;
  assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn contact_with_invalid_email_is_400() {
  let app = app().await;
  let (status, body) = post(
    &app,
    "/contacts",
    json!({ "visitor_name": "Sam", "visitor_email": "not-an-email", "message": "Hi" }),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert!(body["message"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn contact_rejects_non_add_actions() {
  let app = app().await;
  let (status, _) = post(
    &app,
    "/contacts",
    json!({ "action": "delete", "id": 1 }),
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ── Stats ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stats_report_reflects_stored_records() {
  let app = app().await;
  post(
    &app,
    "/skills",
    json!({ "action": "add", "name": "Rust", "proficiency": 90, "category_id": 1 }),
  )
  .await;
  post(
    &app,
    "/projects",
    json!({ "action": "add", "title": "Folio" }),
  )
  .await;

  let (status, stats) = get(&app, "/stats").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(stats["overview"]["total_skills"], 1);
  assert_eq!(stats["overview"]["completed_projects"], 1);
  assert_eq!(
    stats["skills_by_category"][0]["category_name"],
    "Programming Languages"
  );
}
