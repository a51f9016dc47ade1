use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use healthlog::config::Config;
use healthlog::web::{self, AppState};
use tower::ServiceExt;

fn app(dir: &tempfile::TempDir) -> Router {
    let mut cfg = Config::default();
    cfg.use_database(&dir.path().join("web.sqlite").to_string_lossy());
    web::router(AppState::new(cfg))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).to_string())
}

async fn post_form(app: &Router, uri: &str, form: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

fn location(resp: &axum::response::Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn index_shows_zero_totals_and_default_limit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="total-sugar">0<"#));
    assert!(body.contains(r#"id="total-entries">0<"#));
    assert!(body.contains(r#"id="sugar-limit">50<"#));
    assert!(body.contains(r#"<form method="post" action="/">"#));
}

#[tokio::test]
async fn adding_an_entry_redirects_with_flash() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    let resp = post_form(&app, "/", "food=Apple&sugar=12.5&water=1&insulin=").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/?notice=entry-saved");

    let (_, body) = get(&app, "/?notice=entry-saved").await;
    assert!(body.contains("Entry saved successfully!"));
    assert!(body.contains(r#"id="total-sugar">12.5<"#));
    assert!(body.contains(r#"id="total-water">1<"#));
    assert!(body.contains(r#"id="total-entries">1<"#));

    let (_, body) = get(&app, "/entries").await;
    assert!(body.contains("Apple"));
}

#[tokio::test]
async fn invalid_entry_shows_error_and_keeps_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    let resp = post_form(&app, "/", "food=&sugar=7").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body");
    let body = String::from_utf8_lossy(&bytes);
    assert!(body.contains("Food name is required"));
    assert!(body.contains(r#"name="sugar" inputmode="decimal" value="7""#));

    let resp = post_form(&app, "/", "food=Cake&sugar=abc").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = get(&app, "/").await;
    assert!(body.contains(r#"id="total-entries">0<"#));
}

#[tokio::test]
async fn food_is_html_escaped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    post_form(&app, "/", "food=%3Cscript%3Ealert(1)%3C%2Fscript%3E&sugar=1").await;

    let (_, body) = get(&app, "/entries").await;
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn entries_page_empty_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    let (status, body) = get(&app, "/entries").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No entries yet today."));
}

#[tokio::test]
async fn delete_last_and_delete_today() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    post_form(&app, "/", "food=One&sugar=1").await;
    post_form(&app, "/", "food=Two&sugar=2").await;
    post_form(&app, "/", "food=Three&sugar=3").await;

    let resp = post_form(&app, "/entries/delete-last", "").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/entries?notice=last-deleted");

    let (_, body) = get(&app, "/entries?notice=last-deleted").await;
    assert!(body.contains("Last entry deleted."));
    assert!(!body.contains("Three"));
    assert!(body.contains("Two"));

    let resp = post_form(&app, "/entries/delete-today", "").await;
    assert_eq!(location(&resp), "/entries?notice=day-cleared");

    let resp = post_form(&app, "/entries/delete-last", "").await;
    assert_eq!(location(&resp), "/entries?notice=nothing-to-delete");

    let (_, body) = get(&app, "/").await;
    assert!(body.contains(r#"id="total-entries">0<"#));
}

#[tokio::test]
async fn settings_update_and_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    let (_, body) = get(&app, "/settings").await;
    assert!(body.contains(r#"id="current-limit">50 g<"#));

    let resp = post_form(&app, "/settings", "limit=30").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/settings?notice=limit-updated");

    for bad in ["limit=0", "limit=-4", "limit=lots", "limit="] {
        let resp = post_form(&app, "/settings", bad).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{bad}");
    }

    let (_, body) = get(&app, "/settings?notice=limit-updated").await;
    assert!(body.contains("Daily sugar limit updated."));
    assert!(body.contains(r#"id="current-limit">30 g<"#));
}

#[tokio::test]
async fn over_limit_status_on_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    post_form(&app, "/settings", "limit=10").await;
    post_form(&app, "/", "food=Donut&sugar=14").await;

    let (_, body) = get(&app, "/").await;
    assert!(body.contains(r#"class="over""#));
    assert!(body.contains("Over the daily limit by 4 g"));
}

#[tokio::test]
async fn api_totals_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    post_form(&app, "/", "food=Tea&water=2&insulin=3").await;

    let (status, body) = get(&app, "/api/totals").await;
    assert_eq!(status, StatusCode::OK);

    let v: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(v["totals"]["water_cups"], 2.0);
    assert_eq!(v["totals"]["insulin_units"], 3.0);
    assert_eq!(v["totals"]["entries"], 1);
    assert_eq!(v["status"]["limit"], 50.0);
}

#[tokio::test]
async fn chart_routes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    let resp = app
        .clone()
        .oneshot(Request::get("/chart.svg").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).expect("content type"),
        "image/svg+xml"
    );

    let (status, body) = get(&app, "/chart").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn unknown_path_is_404() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = app(&dir);

    let (status, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
