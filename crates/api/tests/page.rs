//! Integration tests for the server-rendered page at `/`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_text, get, post_form};
use todogen_api::ui::display::EMPTY_STATE;
use todogen_core::mock::work_todo_list;
use todogen_llm::scripted::ScriptedCompletions;

// ---------------------------------------------------------------------------
// Test: GET / renders the idle page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_page_shows_empty_state() {
    let client = Arc::new(ScriptedCompletions::with_content("{}"));
    let response = get(common::build_test_app(client.clone()), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains(EMPTY_STATE));
    assert!(html.contains("Switch to Mock Data"));
    assert_eq!(client.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: generate action renders the model's list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generate_renders_list() {
    let client = Arc::new(ScriptedCompletions::with_content(
        r#"{"name":"Trip & Plans","todos":[{"title":"Pack <bags>","priority":"high"}]}"#,
    ));
    let app = common::build_test_app(client.clone());

    let response = post_form(
        app,
        "/",
        &[("prompt", "vacation"), ("mock_mode", "false"), ("action", "generate")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h2>Trip &amp; Plans</h2>"));
    assert!(html.contains("<h3>Pack &lt;bags&gt;</h3>"));
    assert!(html.contains("priority-high"));
    assert!(!html.contains(EMPTY_STATE));
    assert_eq!(client.calls(), 1);
}

// ---------------------------------------------------------------------------
// Test: credit exhaustion switches on mock mode with a banner
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quota_exhaustion_switches_to_mock_mode() {
    let client = Arc::new(ScriptedCompletions::without_choices());
    let app = common::build_test_app(client.clone());

    let response = post_form(
        app,
        "/",
        &[("prompt", "weekend shopping"), ("mock_mode", "false"), ("action", "generate")],
    )
    .await;

    let html = body_text(response).await;
    assert!(html.contains("API credit limit reached. Using mock data instead."));
    assert!(html.contains("name=\"mock_mode\" value=\"true\""));
    assert!(html.contains("<h2>Personal Tasks</h2>"));
    assert!(html.contains("Switch to API"));
    assert_eq!(client.calls(), 1);
}

// ---------------------------------------------------------------------------
// Test: mock mode never calls the generator
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mock_mode_generates_locally() {
    let client = Arc::new(ScriptedCompletions::with_content("{}"));
    let app = common::build_test_app(client.clone());

    let response = post_form(
        app,
        "/",
        &[("prompt", "office work"), ("mock_mode", "true"), ("action", "generate")],
    )
    .await;

    let html = body_text(response).await;
    assert!(html.contains("<h2>Work Tasks</h2>"));
    assert!(!html.contains("role=\"alert\""));
    assert_eq!(client.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: toggle flips mock mode and keeps the displayed list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn toggle_keeps_displayed_list() {
    let client = Arc::new(ScriptedCompletions::with_content("{}"));
    let app = common::build_test_app(client.clone());
    let shown = serde_json::to_string(work_todo_list()).unwrap();

    let response = post_form(
        app,
        "/",
        &[
            ("prompt", "draft"),
            ("mock_mode", "true"),
            ("todo_list", &shown),
            ("action", "toggle-mock"),
        ],
    )
    .await;

    let html = body_text(response).await;
    assert!(html.contains("name=\"mock_mode\" value=\"false\""));
    assert!(html.contains("<h2>Work Tasks</h2>"));
    assert!(html.contains(">draft</textarea>"));
    assert_eq!(client.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: example buttons fill the draft without generating
// ---------------------------------------------------------------------------

#[tokio::test]
async fn example_fills_draft() {
    let client = Arc::new(ScriptedCompletions::with_content("{}"));
    let app = common::build_test_app(client.clone());

    let response = post_form(app, "/", &[("prompt", "old"), ("mock_mode", "false"), ("example", "0")]).await;

    let html = body_text(response).await;
    assert!(html.contains(">Create a work tasks todo list</textarea>"));
    assert!(html.contains(EMPTY_STATE));
    assert_eq!(client.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: blank prompt stays idle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_prompt_does_nothing() {
    let client = Arc::new(ScriptedCompletions::with_content("{}"));
    let app = common::build_test_app(client.clone());

    let response = post_form(app, "/", &[("prompt", "   "), ("mock_mode", "false"), ("action", "generate")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(EMPTY_STATE));
    assert_eq!(client.calls(), 0);
}

// ---------------------------------------------------------------------------
// Test: a tampered hidden list is discarded
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_round_tripped_list_is_dropped() {
    let client = Arc::new(ScriptedCompletions::with_content("{}"));
    let app = common::build_test_app(client);

    let response = post_form(
        app,
        "/",
        &[
            ("prompt", "x"),
            ("mock_mode", "false"),
            ("todo_list", r#"{"name":"Evil","todos":[{"title":"<script>","priority":"now"}]}"#),
        ],
    )
    .await;

    let html = body_text(response).await;
    assert!(!html.contains("Evil"));
    assert!(html.contains(EMPTY_STATE));
}

// ---------------------------------------------------------------------------
// Test: an undecodable form renders the idle page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn undecodable_form_renders_idle_page() {
    let client = Arc::new(ScriptedCompletions::with_content("{}"));
    let app = common::build_test_app(client.clone());

    let response = post_form(
        app,
        "/",
        &[("prompt", "work"), ("mock_mode", "maybe"), ("example", "abc")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(EMPTY_STATE));
    assert_eq!(client.calls(), 0);
}
