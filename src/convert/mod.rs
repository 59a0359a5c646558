//! Translating an answer when its question changes type.
//!
//! Every change of type goes through [`convert`]. The result is either
//! [`Conversion::Safe`], which the editor installs silently, or
//! [`Conversion::Lossy`], whose proposed answer must not be applied until
//! the author has confirmed the loss.

mod predicates;
mod rules;

use serde::Serialize;
use tracing::debug;

pub use predicates::{has_text, is_answer_empty};

use crate::error::ConversionError;
use crate::models::{Answer, Choice, QuestionType};
use QuestionType::{FreeForm, McMultiple, McSingle, Ordered, TrueFalse};

/// A request to move `answer` from `from_type` to `to_type`.
#[derive(Debug, Clone, Copy)]
pub struct ConversionRequest<'a> {
    pub from_type: QuestionType,
    pub to_type: QuestionType,
    pub answer: &'a Answer,
}

/// Outcome of a conversion.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Conversion {
    /// Nothing the author entered is lost.
    Safe { answer: Answer },
    /// The best-effort answer, applied only after the author agrees.
    Lossy { proposed: Answer },
}

impl Conversion {
    pub fn safe(answer: Answer) -> Self {
        Conversion::Safe { answer }
    }

    pub fn lossy(proposed: Answer) -> Self {
        Conversion::Lossy { proposed }
    }

    pub fn is_lossy(&self) -> bool {
        matches!(self, Conversion::Lossy { .. })
    }

    /// The converted answer, whichever branch produced it.
    pub fn answer(&self) -> &Answer {
        match self {
            Conversion::Safe { answer } => answer,
            Conversion::Lossy { proposed } => proposed,
        }
    }

    pub fn into_answer(self) -> Answer {
        match self {
            Conversion::Safe { answer } => answer,
            Conversion::Lossy { proposed } => proposed,
        }
    }
}

/// A conversion rule, typed by the answer shape it consumes.
#[derive(Clone, Copy)]
enum Rule {
    FromText(fn(&str) -> Conversion),
    FromFlag(fn(bool) -> Conversion),
    FromChoices(fn(&[Choice]) -> Conversion),
}

impl Rule {
    fn apply(self, from_type: QuestionType, answer: &Answer) -> Result<Conversion, ConversionError> {
        match (self, answer) {
            (Rule::FromText(rule), Answer::FreeForm(text)) => Ok(rule(text)),
            (Rule::FromFlag(rule), Answer::TrueFalse(flag)) => Ok(rule(*flag)),
            (Rule::FromChoices(rule), Answer::Choices(choices)) => Ok(rule(choices)),
            _ => Err(ConversionError::ShapeMismatch {
                expected: from_type,
            }),
        }
    }
}

/// `(from, to, rule)` for every pair of distinct types.
const RULES: [(QuestionType, QuestionType, Rule); 20] = [
    (TrueFalse, FreeForm, Rule::FromFlag(rules::free_form_from_true_false)),
    (McSingle, FreeForm, Rule::FromChoices(rules::free_form_from_mc)),
    (McMultiple, FreeForm, Rule::FromChoices(rules::free_form_from_mc)),
    (Ordered, FreeForm, Rule::FromChoices(rules::free_form_from_ordered)),
    (FreeForm, TrueFalse, Rule::FromText(rules::true_false_from_free_form)),
    (McSingle, TrueFalse, Rule::FromChoices(rules::true_false_from_choices)),
    (McMultiple, TrueFalse, Rule::FromChoices(rules::true_false_from_choices)),
    (Ordered, TrueFalse, Rule::FromChoices(rules::true_false_from_choices)),
    (TrueFalse, Ordered, Rule::FromFlag(rules::choices_from_true_false)),
    (FreeForm, Ordered, Rule::FromText(rules::ordered_from_free_form)),
    (McSingle, Ordered, Rule::FromChoices(rules::ordered_from_mc)),
    (McMultiple, Ordered, Rule::FromChoices(rules::ordered_from_mc)),
    (TrueFalse, McSingle, Rule::FromFlag(rules::choices_from_true_false)),
    (FreeForm, McSingle, Rule::FromText(rules::mc_from_free_form)),
    (McMultiple, McSingle, Rule::FromChoices(rules::mc_single_from_mc_multiple)),
    (Ordered, McSingle, Rule::FromChoices(rules::mc_from_ordered)),
    (TrueFalse, McMultiple, Rule::FromFlag(rules::choices_from_true_false)),
    (Ordered, McMultiple, Rule::FromChoices(rules::mc_from_ordered)),
    (McSingle, McMultiple, Rule::FromChoices(rules::mc_multiple_from_mc_single)),
    (FreeForm, McMultiple, Rule::FromText(rules::mc_from_free_form)),
];

fn rule_for(from_type: QuestionType, to_type: QuestionType) -> Result<Rule, ConversionError> {
    RULES
        .iter()
        .find(|(from, to, _)| *from == from_type && *to == to_type)
        .map(|(_, _, rule)| *rule)
        .ok_or(ConversionError::UnsupportedConversion {
            from: from_type,
            to: to_type,
        })
}

/// Compute the answer for `request.to_type`.
///
/// Converting to the same type returns the answer unchanged without
/// inspecting it.
pub fn convert(request: &ConversionRequest<'_>) -> Result<Conversion, ConversionError> {
    let ConversionRequest {
        from_type,
        to_type,
        answer,
    } = *request;

    if from_type == to_type {
        return Ok(Conversion::safe(answer.clone()));
    }

    let conversion = rule_for(from_type, to_type)?.apply(from_type, answer)?;
    debug!(
        from = %from_type,
        to = %to_type,
        lossy = conversion.is_lossy(),
        "converted answer"
    );

    Ok(conversion)
}
