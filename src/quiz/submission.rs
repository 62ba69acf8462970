// src/quiz/submission.rs

use chrono::{DateTime, Utc};

use crate::models::submission::{AnswerMap, QuizSubmission};
use crate::quiz::QuizError;
use crate::quiz::scoring::FieldScores;

/// Packages a finished attempt into the record the persistence layer
/// consumes. Invoked once per attempt.
///
/// A negative duration means the caller's clock handling is broken and is
/// rejected outright instead of being clamped. Completeness
/// (`answers.len() == total_questions`) is NOT enforced here: partial
/// submissions are legal and gating them is the UI's policy.
pub fn assemble(
    answers: AnswerMap,
    field_scores: FieldScores,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total_questions: u32,
) -> Result<QuizSubmission, QuizError> {
    let time_elapsed = (completed_at - started_at).num_seconds();
    if time_elapsed < 0 {
        return Err(QuizError::InvalidDuration {
            seconds: time_elapsed,
        });
    }

    Ok(QuizSubmission {
        answers,
        field_scores,
        time_elapsed,
        total_questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn answers() -> AnswerMap {
        [(1, "top".to_string()), (2, "low".to_string())]
            .into_iter()
            .collect()
    }

    #[test]
    fn assembles_elapsed_seconds_from_timestamps() {
        let start = Utc::now();
        let end = start + TimeDelta::seconds(754);

        let submission = assemble(answers(), FieldScores::new(), start, end, 55).unwrap();
        assert_eq!(submission.time_elapsed, 754);
        assert_eq!(submission.total_questions, 55);
        assert_eq!(submission.answers.len(), 2);
    }

    #[test]
    fn zero_duration_is_valid() {
        let now = Utc::now();
        let submission = assemble(answers(), FieldScores::new(), now, now, 55).unwrap();
        assert_eq!(submission.time_elapsed, 0);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let start = Utc::now();
        let end = start - TimeDelta::seconds(30);

        let err = assemble(answers(), FieldScores::new(), start, end, 55).unwrap_err();
        assert_eq!(err, QuizError::InvalidDuration { seconds: -30 });
    }

    #[test]
    fn submission_serializes_with_camel_case_contract_keys() {
        let start = Utc::now();
        let end = start + TimeDelta::seconds(60);
        let submission = assemble(answers(), FieldScores::new(), start, end, 55).unwrap();

        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("answers").is_some());
        assert!(json.get("fieldScores").is_some());
        assert_eq!(json["timeElapsed"], 60);
        assert_eq!(json["totalQuestions"], 55);
        // Answer keys are question ids rendered as JSON object keys.
        assert_eq!(json["answers"]["1"], "top");
    }
}
