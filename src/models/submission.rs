// src/models/submission.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::question::CareerField;
use crate::quiz::scoring::FieldScores;

/// Answers keyed by question id. Re-answering a question overwrites the
/// prior entry; insertion order is irrelevant.
pub type AnswerMap = BTreeMap<i64, String>;

/// The completed attempt handed to the external persistence layer.
/// Lives for one quiz session; the core keeps no reference after handoff.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub answers: AnswerMap,
    pub field_scores: FieldScores,
    /// Wall-clock seconds between start and completion, tracked by the caller.
    pub time_elapsed: i64,
    pub total_questions: u32,
}

/// One row of the ranked-field summary. `percentage` is relative to the
/// best-scoring field, not to the theoretical maximum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedField {
    pub field: CareerField,
    pub score: i64,
    pub percentage: u8,
}
