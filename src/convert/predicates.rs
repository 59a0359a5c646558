use crate::models::Choice;

/// Whether a choice carries any non-whitespace text.
pub fn has_text(choice: Option<&Choice>) -> bool {
    choice.is_some_and(|c| !c.text.trim().is_empty())
}

/// An answer is empty when no choice has text.
pub fn is_answer_empty(choices: Option<&[Choice]>) -> bool {
    match choices {
        None => true,
        Some(choices) => !choices.iter().any(|c| has_text(Some(c))),
    }
}
