// src/quiz/scoring.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::question::{CareerField, QuizQuestion, SCORED_FIELDS};
use crate::models::submission::AnswerMap;
use crate::quiz::QuizError;

/// Accumulated points per career field for one quiz session.
///
/// All eight scored fields are seeded to 0 before any answer is applied.
/// Points from `general` questions land in a separate bucket: they never
/// influence a field recommendation, but they are kept (and serialized)
/// rather than silently dropped.
///
/// One instance is owned exclusively by the in-progress session; the
/// caller serializes answer events into it one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldScores {
    #[serde(flatten)]
    scored: BTreeMap<CareerField, i64>,
    general: i64,
}

impl FieldScores {
    pub fn new() -> FieldScores {
        FieldScores {
            scored: SCORED_FIELDS.iter().map(|field| (*field, 0)).collect(),
            general: 0,
        }
    }

    /// Current total for a field. `General` reads from its own bucket.
    pub fn get(&self, field: CareerField) -> i64 {
        if field == CareerField::General {
            self.general
        } else {
            self.scored.get(&field).copied().unwrap_or(0)
        }
    }

    /// Points accumulated from `general` questions, excluded from ranking.
    pub fn general_points(&self) -> i64 {
        self.general
    }

    /// The eight scored fields and their totals, in field-definition order.
    pub fn iter_scored(&self) -> impl Iterator<Item = (CareerField, i64)> + '_ {
        self.scored.iter().map(|(field, score)| (*field, *score))
    }

    fn add(&mut self, field: CareerField, delta: i64) {
        if field == CareerField::General {
            self.general += delta;
        } else if let Some(total) = self.scored.get_mut(&field) {
            *total += delta;
        }
    }
}

impl Default for FieldScores {
    fn default() -> Self {
        FieldScores::new()
    }
}

/// One-shot authoritative computation from a complete (or partial) answer
/// map, e.g. when answers arrive from storage rather than live interaction.
///
/// Entries whose question id or option text no longer resolve against the
/// bank are skipped silently: stale client state after a bank upgrade
/// degrades that one answer's contribution instead of failing the whole
/// computation.
pub fn compute_field_scores(answers: &AnswerMap, bank: &[QuizQuestion]) -> FieldScores {
    let mut scores = FieldScores::new();

    for (question_id, selected_text) in answers {
        let Some(question) = bank.iter().find(|q| q.id == *question_id) else {
            continue;
        };
        let Some(option) = question.option_by_text(selected_text) else {
            continue;
        };
        scores.add(question.field, option.points());
    }

    scores
}

/// Incremental update for the live preview: apply a newly selected option,
/// retracting the previously selected one if the question was already
/// answered. Folding this over a full answer map yields exactly
/// [`compute_field_scores`]'s result.
///
/// Both options are resolved before any mutation, so an `InvalidOption`
/// rejection leaves `scores` untouched.
pub fn apply_answer_delta(
    scores: &mut FieldScores,
    question: &QuizQuestion,
    previous_text: Option<&str>,
    new_text: &str,
) -> Result<(), QuizError> {
    let new_option = question
        .option_by_text(new_text)
        .ok_or_else(|| QuizError::InvalidOption {
            question_id: question.id,
            text: new_text.to_string(),
        })?;

    let previous_points = match previous_text {
        Some(text) => {
            let previous_option =
                question
                    .option_by_text(text)
                    .ok_or_else(|| QuizError::InvalidOption {
                        question_id: question.id,
                        text: text.to_string(),
                    })?;
            previous_option.points()
        }
        None => 0,
    };

    scores.add(question.field, new_option.points() - previous_points);
    Ok(())
}
