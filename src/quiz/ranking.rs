// src/quiz/ranking.rs

use crate::models::submission::RankedField;
use crate::quiz::scoring::FieldScores;

/// Highest score an option can carry in the shipped bank. Used as the
/// per-question denominator of the absolute match percentage.
pub const MAX_OPTION_SCORE: i64 = 5;

/// Ranks the scored fields and derives a relative percentage for each.
///
/// Ordering is score descending with a lexicographic field-name tie-break,
/// so equal scores always come back in the same relative order. The
/// percentage is relative to the best-scoring field across ALL scored
/// fields (bar-chart comparison), not to a theoretical maximum; when every
/// field is at zero, all percentages are 0.
pub fn top_fields(scores: &FieldScores, count: usize) -> Vec<RankedField> {
    let max_score = scores.iter_scored().map(|(_, score)| score).max().unwrap_or(0);

    let mut ranked: Vec<RankedField> = scores
        .iter_scored()
        .map(|(field, score)| RankedField {
            field,
            score,
            percentage: if max_score > 0 {
                rounded_percent(score, max_score)
            } else {
                0
            },
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.field.as_str().cmp(b.field.as_str()))
    });
    ranked.truncate(count);
    ranked
}

/// Absolute match percentage of the winning field against the maximum
/// achievable score, clamped to [0, 100]. A non-positive denominator
/// (empty quiz) yields 0 rather than dividing by zero.
pub fn match_percentage(top_score: i64, total_questions: u32, max_score_per_question: i64) -> u8 {
    let max_total = total_questions as i64 * max_score_per_question;
    if max_total <= 0 {
        return 0;
    }
    let percent = (top_score as f64 / max_total as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

fn rounded_percent(score: i64, max_score: i64) -> u8 {
    let percent = (score as f64 / max_score as f64 * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{CareerField, QuestionKind, QuestionOption, QuizQuestion};
    use crate::models::submission::AnswerMap;
    use crate::quiz::scoring::compute_field_scores;

    fn engineering_bank() -> Vec<QuizQuestion> {
        // Three questions, all engineering, top option worth 5 points each.
        (1..=3)
            .map(|id| QuizQuestion {
                id,
                field: CareerField::Engineering,
                category: "problem-solving".to_string(),
                question_text: format!("test question {}", id),
                kind: QuestionKind::Mcq,
                options: vec![
                    QuestionOption {
                        text: "top".to_string(),
                        score: 5,
                        weightage: 1,
                    },
                    QuestionOption {
                        text: "low".to_string(),
                        score: 2,
                        weightage: 1,
                    },
                ],
            })
            .collect()
    }

    #[test]
    fn perfect_run_scores_full_match() {
        let bank = engineering_bank();
        let answers: AnswerMap = (1..=3).map(|id| (id, "top".to_string())).collect();
        let scores = compute_field_scores(&answers, &bank);

        assert_eq!(scores.get(CareerField::Engineering), 15);
        let top = top_fields(&scores, 1);
        assert_eq!(top[0].field, CareerField::Engineering);
        assert_eq!(top[0].percentage, 100);
        assert_eq!(match_percentage(15, 3, MAX_OPTION_SCORE), 100);
    }

    #[test]
    fn partial_run_keeps_relative_lead_but_lowers_absolute_match() {
        let bank = engineering_bank();
        let answers: AnswerMap = (1..=2).map(|id| (id, "top".to_string())).collect();
        let scores = compute_field_scores(&answers, &bank);

        // Relative metric is unaffected by incompleteness.
        let top = top_fields(&scores, 1);
        assert_eq!(top[0].field, CareerField::Engineering);
        assert_eq!(top[0].percentage, 100);

        // Absolute metric is not: 10 of 15 possible points.
        assert_eq!(match_percentage(10, 3, MAX_OPTION_SCORE), 67);
    }

    #[test]
    fn all_zero_scores_rank_without_dividing_by_zero() {
        let scores = crate::quiz::scoring::FieldScores::new();
        let ranked = top_fields(&scores, 8);
        assert_eq!(ranked.len(), 8);
        for entry in &ranked {
            assert_eq!(entry.score, 0);
            assert_eq!(entry.percentage, 0);
        }
    }

    #[test]
    fn ties_break_lexicographically_and_deterministically() {
        let scores = crate::quiz::scoring::FieldScores::new();
        let first = top_fields(&scores, 8);
        for _ in 0..10 {
            assert_eq!(top_fields(&scores, 8), first);
        }
        // All-zero is an 8-way tie, so the order is purely lexicographic.
        let names: Vec<&str> = first.iter().map(|r| r.field.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn count_truncates_the_ranking() {
        let bank = engineering_bank();
        let answers: AnswerMap = [(1, "top".to_string())].into_iter().collect();
        let scores = compute_field_scores(&answers, &bank);
        let top3 = top_fields(&scores, 3);
        assert_eq!(top3.len(), 3);
        assert_eq!(top3[0].field, CareerField::Engineering);
    }

    #[test]
    fn match_percentage_is_clamped_to_valid_range() {
        // Synthetic out-of-range score must not exceed 100.
        assert_eq!(match_percentage(1000, 3, MAX_OPTION_SCORE), 100);
        assert_eq!(match_percentage(-5, 3, MAX_OPTION_SCORE), 0);
        assert_eq!(match_percentage(10, 0, MAX_OPTION_SCORE), 0);
        assert_eq!(match_percentage(8, 3, MAX_OPTION_SCORE), 53);
    }
}
