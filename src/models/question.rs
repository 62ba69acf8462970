// src/models/question.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quiz::QuizError;

/// The eight career fields a recommendation can point at, plus `general`
/// for cross-cutting questions that do not count toward any one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerField {
    Engineering,
    Medical,
    Business,
    Creative,
    Science,
    Education,
    Legal,
    Agriculture,
    General,
}

/// Fields that participate in scoring and ranking. `General` is excluded:
/// its points are tracked separately and never drive a recommendation.
pub const SCORED_FIELDS: [CareerField; 8] = [
    CareerField::Engineering,
    CareerField::Medical,
    CareerField::Business,
    CareerField::Creative,
    CareerField::Science,
    CareerField::Education,
    CareerField::Legal,
    CareerField::Agriculture,
];

impl CareerField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerField::Engineering => "engineering",
            CareerField::Medical => "medical",
            CareerField::Business => "business",
            CareerField::Creative => "creative",
            CareerField::Science => "science",
            CareerField::Education => "education",
            CareerField::Legal => "legal",
            CareerField::Agriculture => "agriculture",
            CareerField::General => "general",
        }
    }

    /// Human-readable field name shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            CareerField::Engineering => "Engineering & Technology",
            CareerField::Medical => "Healthcare & Medicine",
            CareerField::Business => "Business & Management",
            CareerField::Creative => "Creative & Arts",
            CareerField::Science => "Science & Research",
            CareerField::Education => "Education & Training",
            CareerField::Legal => "Legal & Government",
            CareerField::Agriculture => "Agriculture & Environment",
            CareerField::General => "General",
        }
    }

    /// Parses a field identifier. Unknown strings are a configuration
    /// defect (the bank and the enumeration drifted apart), so this
    /// surfaces `UnknownField` rather than defaulting.
    pub fn parse(s: &str) -> Result<CareerField, QuizError> {
        match s {
            "engineering" => Ok(CareerField::Engineering),
            "medical" => Ok(CareerField::Medical),
            "business" => Ok(CareerField::Business),
            "creative" => Ok(CareerField::Creative),
            "science" => Ok(CareerField::Science),
            "education" => Ok(CareerField::Education),
            "legal" => Ok(CareerField::Legal),
            "agriculture" => Ok(CareerField::Agriculture),
            "general" => Ok(CareerField::General),
            other => Err(QuizError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for CareerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation hint for the frontend. Carries no scoring semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Mcq,
    Rating,
    Scenario,
}

/// One selectable answer. `weightage` is a free-standing multiplier on
/// `score`; the shipped bank always uses 1 but the model keeps it so
/// future question data can weight options without a schema change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub score: i64,
    pub weightage: i64,
}

impl QuestionOption {
    /// Points this option contributes to its question's field.
    pub fn points(&self) -> i64 {
        self.score * self.weightage
    }
}

/// A single bank entry. `id` is unique across the whole bank and is the
/// key answers are stored under; option `text` values are distinct within
/// a question because selection is keyed by text, not index.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub field: CareerField,
    pub category: String,
    pub question_text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<QuestionOption>,
}

impl QuizQuestion {
    /// Looks up an option by its display text.
    pub fn option_by_text(&self, text: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.text == text)
    }
}
