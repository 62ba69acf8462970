// tests/quiz_flow_tests.rs

use careerquiz::{config::Config, quiz::bank, routes, state::AppState};
use serde_json::json;

/// Helper function to spawn the app on a random port for testing.
async fn spawn_app() -> String {
    let config = Config {
        rust_log: "error".to_string(),
        port: 0,
        allowed_origins: vec!["http://localhost:3000".to_string()],
    };

    let state = AppState { config };
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Text of the given option of a bank question, for building answer maps.
fn option_text(question_id: i64, option_index: usize) -> String {
    bank::question_by_id(question_id)
        .expect("question missing from bank")
        .options[option_index]
        .text
        .clone()
}

#[tokio::test]
async fn preview_reports_running_scores_and_top_fields() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: one medical answer worth 5 points
    let response = client
        .post(&format!("{}/api/quiz/preview", address))
        .json(&json!({ "answers": { "6": option_text(6, 0) } }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["answeredCount"], 1);
    assert_eq!(body["fieldScores"]["medical"], 5);
    assert_eq!(body["fieldScores"]["engineering"], 0);

    let top = body["topFields"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["field"], "medical");
    assert_eq!(top[0]["percentage"], 100);
}

#[tokio::test]
async fn preview_tolerates_stale_answers() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: one valid answer plus an unknown id and a mismatched text
    let response = client
        .post(&format!("{}/api/quiz/preview", address))
        .json(&json!({ "answers": {
            "1": option_text(1, 0),
            "9999": "gone after bank upgrade",
            "2": "text that is not an option"
        } }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: stale entries contribute nothing but do not fail the call
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["fieldScores"]["engineering"], 5);
}

#[tokio::test]
async fn preview_excludes_general_from_ranking() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: answer only a general question (id 41)
    let response = client
        .post(&format!("{}/api/quiz/preview", address))
        .json(&json!({ "answers": { "41": option_text(41, 0) } }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert: points land in the general bucket, ranking stays all-zero
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["fieldScores"]["general"].as_i64().unwrap() > 0);
    let top = body["topFields"].as_array().unwrap();
    assert!(top.iter().all(|entry| entry["field"] != "general"));
    assert!(top.iter().all(|entry| entry["score"] == 0));
}

#[tokio::test]
async fn submit_computes_scores_server_side() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Top option of every engineering question except the scenario one
    let answers: serde_json::Map<String, serde_json::Value> = (1..=5)
        .map(|id| (id.to_string(), option_text(id, 0).into()))
        .collect();

    // Act
    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&json!({
            "answers": answers,
            "startedAt": "2026-08-30T10:00:00Z",
            "completedAt": "2026-08-30T10:05:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);

    let result = &body["result"];
    assert_eq!(result["topField"], "engineering");
    assert_eq!(result["topFieldName"], "Engineering & Technology");
    // Five questions answered with their 5-point options.
    assert_eq!(result["submission"]["fieldScores"]["engineering"], 25);
    // Absolute match: 25 of 55 * 5 achievable points, rounded.
    assert_eq!(result["matchPercentage"], 9);
    assert_eq!(result["submission"]["timeElapsed"], 300);
    assert_eq!(result["submission"]["totalQuestions"], 55);

    let ranked = result["rankedFields"].as_array().unwrap();
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0]["field"], "engineering");
    assert_eq!(ranked[0]["percentage"], 100);
}

#[tokio::test]
async fn submit_rejects_empty_answers() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&json!({
            "answers": {},
            "startedAt": "2026-08-30T10:00:00Z",
            "completedAt": "2026-08-30T10:05:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn submit_rejects_negative_duration() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act: completion timestamp precedes the start
    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&json!({
            "answers": { "1": option_text(1, 0) },
            "startedAt": "2026-08-30T10:05:00Z",
            "completedAt": "2026-08-30T10:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("negative quiz duration")
    );
}
