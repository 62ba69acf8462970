// src/handlers/quiz.rs

use axum::{
    Json,
    extract::Query,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        question::SCORED_FIELDS,
        submission::AnswerMap,
    },
    quiz::{
        bank,
        ranking::{self, MAX_OPTION_SCORE},
        scoring,
        submission,
    },
};

/// Query parameters for listing questions.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub field: Option<String>,
    pub category: Option<String>,
}

/// Lists the question bank in its fixed display order, optionally filtered
/// by field or category. Unknown filter values yield an empty list rather
/// than an error.
pub async fn list_questions(
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions: Vec<_> = match (&params.field, &params.category) {
        (Some(field), _) => bank::questions_by_field(field),
        (None, Some(category)) => bank::questions_by_category(category),
        (None, None) => bank::all().iter().collect(),
    };

    let total = questions.len();
    Ok(Json(json!({
        "questions": questions,
        "total": total,
    })))
}

/// Returns the field and category display-name tables used by the frontend.
pub async fn list_fields() -> Result<impl IntoResponse, AppError> {
    let fields: serde_json::Map<String, serde_json::Value> = SCORED_FIELDS
        .iter()
        .map(|field| (field.as_str().to_string(), field.display_name().into()))
        .collect();

    let categories: serde_json::Map<String, serde_json::Value> = bank::CATEGORIES
        .iter()
        .map(|(id, name)| (id.to_string(), (*name).into()))
        .collect();

    Ok(Json(json!({
        "fields": fields,
        "categories": categories,
    })))
}

/// Request body for the live field-strength preview.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Answers so far, keyed by question id. May be empty or partial.
    pub answers: AnswerMap,
}

/// Computes the running field scores for an in-progress attempt.
///
/// Stale entries (ids or option texts that no longer resolve) are
/// tolerated and simply contribute nothing, so a client holding an older
/// bank version still gets a preview.
pub async fn preview_scores(
    Json(payload): Json<PreviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let scores = scoring::compute_field_scores(&payload.answers, bank::all());
    let top = ranking::top_fields(&scores, 3);

    Ok(Json(json!({
        "fieldScores": scores,
        "topFields": top,
        "answeredCount": payload.answers.len(),
    })))
}

/// Request body for submitting a finished attempt.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuizRequest {
    #[validate(length(min = 1, message = "No answers submitted"))]
    pub answers: AnswerMap,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Submits a quiz attempt and returns the assembled result record.
///
/// Field scores are recomputed here from the answers against the
/// authoritative bank; client-side running totals are never trusted. The
/// response carries everything the external persistence and analysis
/// layers consume: the submission payload, the ranked fields, the winning
/// field and its absolute match percentage.
pub async fn submit_quiz(
    Json(payload): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let total_questions = bank::all().len() as u32;
    let scores = scoring::compute_field_scores(&payload.answers, bank::all());

    let ranked = ranking::top_fields(&scores, 3);
    // Ranking always covers the eight scored fields, so a winner exists
    // even for an all-zero attempt.
    let top = ranked
        .first()
        .cloned()
        .ok_or_else(|| AppError::InternalServerError("empty field ranking".to_string()))?;
    let match_percentage =
        ranking::match_percentage(top.score, total_questions, MAX_OPTION_SCORE);

    let submission = submission::assemble(
        payload.answers,
        scores,
        payload.started_at,
        payload.completed_at,
        total_questions,
    )?;

    tracing::info!(
        top_field = %top.field,
        match_percentage,
        answered = submission.answers.len(),
        "quiz attempt submitted"
    );

    Ok(Json(json!({
        "success": true,
        "result": {
            "submission": submission,
            "topField": top.field,
            "topFieldName": top.field.display_name(),
            "matchPercentage": match_percentage,
            "rankedFields": ranked,
        },
    })))
}
