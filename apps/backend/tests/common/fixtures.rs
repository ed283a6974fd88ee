//! Test fixtures and factory functions for creating test data.

use axum_test::TestServer;
use serde_json::{json, Value};

/// Request body for registering a question.
pub fn question_request(prompt: &str, category: &str) -> Value {
    json!({
        "prompt": prompt,
        "category": category,
    })
}

/// Register a question and return its minted id.
pub async fn create_question(server: &TestServer, prompt: &str, category: &str) -> String {
    let response = server
        .post("/api/questions")
        .json(&question_request(prompt, category))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["id"].as_str().expect("question id").to_string()
}

/// Request body for submitting a graded review.
pub fn review_request(question_id: &str, score: u8) -> Value {
    json!({
        "question_id": question_id,
        "score": score,
    })
}

/// Request body for ending a session on a fixed calendar date.
pub fn session_end_request(date: &str) -> Value {
    json!({ "session_date": date })
}

/// Request body replacing the preference record with the given category order.
pub fn preferences_request(categories: &[&str]) -> Value {
    json!({
        "preferred_categories": categories,
        "preferred_difficulties": {},
    })
}
