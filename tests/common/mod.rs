//! Shared test infrastructure: backend fixtures, a mock backend and app wiring.
//!
//! # Mock backend
//! Every test gets its own `wiremock::MockServer`; the app under test points its
//! `API_BASE_URL` at `server.uri()`.
//!
//! # App wiring
//! `init_app!(uri)` builds the full route table with cookie sessions, and
//! `csrf_session!(&app)` fetches a page to obtain a session cookie + CSRF token.

#![allow(dead_code, unused_macros)]

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use regex::Regex;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mpp_admin::api::ApiClient;
use mpp_admin::config::AppConfig;

// ============================================================================
// FIXTURES
// ============================================================================

pub const ROLE_ADMIN_ID: i64 = 1;
pub const ROLE_CS_ID: i64 = 2;

pub fn counter_json(id: i64, name: &str, code: &str, quota: Option<i64>) -> Value {
    json!({
        "id": id,
        "name": name,
        "counter_code": code,
        "quota": quota,
        "schedule_start": "08:00:00",
        "schedule_end": "15:00:00",
        "description": format!("Layanan {name}"),
    })
}

pub fn user_json(id: i64, name: &str, role: &str, counter_id: Option<i64>) -> Value {
    let role_id = if role == "admin" { ROLE_ADMIN_ID } else { ROLE_CS_ID };
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@mpp.go.id", name.to_lowercase()),
        "role_id": role_id,
        "role": { "id": role_id, "name": role },
        "counter_id": counter_id,
        "email_verified_at": "2024-01-01T00:00:00.000000Z",
        "created_at": "2024-01-01T08:00:00.000000Z",
        "updated_at": "2024-01-01T08:00:00.000000Z",
        "deleted_at": null,
    })
}

/// Counters 10 (Loket Pajak), 20 (Loket Dukcapil), 30 (Imigrasi Paspor).
pub fn sample_counters() -> Value {
    json!([
        counter_json(10, "Loket Pajak", "PJK", Some(120)),
        counter_json(20, "Loket Dukcapil", "DKC", Some(60)),
        counter_json(30, "Imigrasi Paspor", "IMG", None),
    ])
}

/// Budi holds counter 10, Rina holds counter 20, Admin holds nothing.
pub fn sample_users() -> Value {
    json!([
        user_json(1, "Budi", "customer_service", Some(10)),
        user_json(2, "Rina", "customer_service", Some(20)),
        user_json(3, "Admin", "admin", None),
    ])
}

pub fn sample_roles() -> Value {
    json!([
        { "id": ROLE_ADMIN_ID, "name": "admin" },
        { "id": ROLE_CS_ID, "name": "customer_service" },
    ])
}

pub fn trashed_users() -> Value {
    let mut gone = user_json(4, "Sari", "customer_service", None);
    gone["deleted_at"] = json!("2024-02-10T09:30:00.000000Z");
    json!([gone])
}

// ============================================================================
// MOCK BACKEND
// ============================================================================

pub async fn mount_get(server: &MockServer, p: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(p))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount the standard read endpoints with the sample data.
pub async fn mount_sample_backend(server: &MockServer) {
    mount_get(server, "/counters", sample_counters()).await;
    mount_get(server, "/users", sample_users()).await;
    mount_get(server, "/roles", sample_roles()).await;
    mount_get(server, "/users/trashed", trashed_users()).await;
    mount_get(server, "/users/1", user_json(1, "Budi", "customer_service", Some(10))).await;
    mount_get(server, "/users/2", user_json(2, "Rina", "customer_service", Some(20))).await;
}

// ============================================================================
// APP WIRING
// ============================================================================

pub fn test_config(base_url: &str) -> AppConfig {
    let base = base_url.to_string();
    AppConfig::from_lookup(move |key| match key {
        "API_BASE_URL" => Some(base.clone()),
        "API_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn api_client(base_url: &str) -> ApiClient {
    ApiClient::from_config(&test_config(base_url)).expect("api client")
}

pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[7u8; 64]))
        .cookie_secure(false)
        .build()
}

macro_rules! init_app {
    ($base_url:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(common::session_middleware())
                .app_data(actix_web::web::Data::new(common::api_client($base_url)))
                .app_data(actix_web::web::Data::new(common::test_config($base_url)))
                .configure(mpp_admin::routes::configure),
        )
        .await
    };
}

/// GET /token (no backend traffic) and return (session cookie, csrf token).
macro_rules! csrf_session {
    ($app:expr) => {{
        let req = actix_web::test::TestRequest::get().uri("/token").to_request();
        let resp = actix_web::test::call_service($app, req).await;
        let cookie = common::session_cookie(&resp).expect("session cookie");
        let body = actix_web::test::read_body(resp).await;
        let token = common::extract_csrf_token(std::str::from_utf8(&body).expect("utf8"));
        (cookie, token)
    }};
}

// ============================================================================
// RESPONSE HELPERS
// ============================================================================

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response().cookies().next().map(|c| c.into_owned())
}

/// The cookie set by `resp`, or `previous` when the session was left untouched.
pub fn next_cookie<B>(resp: &ServiceResponse<B>, previous: &Cookie<'static>) -> Cookie<'static> {
    session_cookie(resp).unwrap_or_else(|| previous.clone())
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn extract_csrf_token(html: &str) -> String {
    // <input type="hidden" name="csrf_token" value="...">
    let re = Regex::new(r#"name="csrf_token"\s+value="([^"]+)""#)
        .expect("Failed to compile regex");

    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| {
            eprintln!("CSRF token not found in HTML");
            "invalid_token".to_string()
        })
}
