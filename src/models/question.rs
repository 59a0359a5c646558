use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RegistryError;

use super::Answer;

/// The five answer representations a question can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// A single free-text answer.
    FreeForm,
    /// A boolean answer.
    TrueFalse,
    /// Choices with exactly one marked correct.
    McSingle,
    /// Choices with any number marked correct.
    McMultiple,
    /// Choices that must be put in order.
    Ordered,
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::FreeForm,
        QuestionType::TrueFalse,
        QuestionType::McSingle,
        QuestionType::McMultiple,
        QuestionType::Ordered,
    ];

    /// Wire identifier, as stored and as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::FreeForm => "free_form",
            QuestionType::TrueFalse => "true_false",
            QuestionType::McSingle => "mc_single",
            QuestionType::McMultiple => "mc_multiple",
            QuestionType::Ordered => "ordered",
        }
    }

    /// Whether answers of this type are a sequence of choices.
    pub fn is_choice_based(self) -> bool {
        matches!(
            self,
            QuestionType::McSingle | QuestionType::McMultiple | QuestionType::Ordered
        )
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownType(s.to_string()))
    }
}

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub owner_id: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub answer: Answer,
}

impl Question {
    /// Create a question with an empty answer of the given type.
    pub fn new(owner_id: impl Into<String>, prompt: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: owner_id.into(),
            prompt: prompt.into(),
            question_type,
            answer: Answer::empty_for(question_type),
        }
    }

    /// Whether the answer's shape matches the declared type.
    pub fn is_well_formed(&self) -> bool {
        self.answer.fits(self.question_type)
    }
}
