use std::io;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{ChoiceKey, QuestionType};

/// Lookups the type registry cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown question type: {0:?}")]
    UnknownType(String),

    #[error("no question type is displayed as {0:?}")]
    UnknownDisplay(String),

    #[error("question type {0} has no choices")]
    NotChoiceBased(QuestionType),

    #[error("choices of question type {0} cannot be toggled")]
    NotToggleable(QuestionType),

    #[error("no choice with key {0}")]
    UnknownChoice(ChoiceKey),
}

/// Misuse of the conversion dispatcher. Lossy conversions are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("bad case: from_type={from}, to_type={to}")]
    UnsupportedConversion { from: QuestionType, to: QuestionType },

    #[error("answer does not have the shape of a {expected} answer")]
    ShapeMismatch { expected: QuestionType },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("no type change is waiting for confirmation")]
    NothingPending,

    #[error("a change to {0} is waiting for confirmation")]
    ChangePending(QuestionType),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("question {id} has an answer that does not fit type {question_type}")]
    Malformed { id: Uuid, question_type: QuestionType },

    #[error("{} must contain at least one question", .path.display())]
    Empty { path: PathBuf },
}
