//! One function per ordered pair of question types.
//!
//! Each rule is total over answers of its source shape and decides on its
//! own whether the result discards information the author entered.

use crate::models::{Answer, Choice, ChoiceValue};

use super::Conversion;
use super::predicates::{has_text, is_answer_empty};

const JOINER: &str = ", ";

pub(super) fn free_form_from_true_false(_: bool) -> Conversion {
    Conversion::safe(Answer::FreeForm(String::new()))
}

/// The correct choices, joined into one line.
pub(super) fn free_form_from_mc(choices: &[Choice]) -> Conversion {
    let correct: Vec<&str> = choices
        .iter()
        .filter(|c| c.is_truthy())
        .map(|c| c.text.trim())
        .collect();

    if correct.is_empty() {
        Conversion::safe(Answer::FreeForm(String::new()))
    } else {
        Conversion::lossy(Answer::FreeForm(correct.join(JOINER)))
    }
}

/// The list items in position order, joined into one line.
pub(super) fn free_form_from_ordered(choices: &[Choice]) -> Conversion {
    let mut with_text: Vec<&Choice> = choices.iter().filter(|c| has_text(Some(*c))).collect();
    if with_text.is_empty() {
        return Conversion::safe(Answer::FreeForm(String::new()));
    }

    with_text.sort_by(|a, b| position_key(a).cmp(&position_key(b)));
    let joined = with_text
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(JOINER);

    Conversion::lossy(Answer::FreeForm(joined))
}

pub(super) fn true_false_from_free_form(text: &str) -> Conversion {
    if text.trim().is_empty() {
        Conversion::safe(Answer::TrueFalse(false))
    } else {
        Conversion::lossy(Answer::TrueFalse(false))
    }
}

pub(super) fn true_false_from_choices(choices: &[Choice]) -> Conversion {
    if is_answer_empty(Some(choices)) {
        Conversion::safe(Answer::TrueFalse(false))
    } else {
        Conversion::lossy(Answer::TrueFalse(false))
    }
}

pub(super) fn choices_from_true_false(_: bool) -> Conversion {
    Conversion::safe(Answer::Choices(Vec::new()))
}

pub(super) fn ordered_from_free_form(text: &str) -> Conversion {
    Conversion::safe(arrayed_from_free_form(text, ChoiceValue::Ordinal(String::new())))
}

pub(super) fn mc_from_free_form(text: &str) -> Conversion {
    Conversion::safe(arrayed_from_free_form(text, ChoiceValue::Flag(true)))
}

/// Keeps every choice and clears its position.
pub(super) fn ordered_from_mc(choices: &[Choice]) -> Conversion {
    let unpositioned = choices
        .iter()
        .map(|c| Choice {
            key: c.key.clone(),
            text: c.text.clone(),
            value: Some(ChoiceValue::Ordinal(String::new())),
        })
        .collect();

    Conversion::safe(Answer::Choices(unpositioned))
}

/// Keeps the first correct choice; later ones are demoted.
pub(super) fn mc_single_from_mc_multiple(choices: &[Choice]) -> Conversion {
    let mut encountered_true = false;
    let single = choices
        .iter()
        .map(|c| {
            if !c.is_truthy() {
                c.clone()
            } else if encountered_true {
                Choice {
                    value: Some(ChoiceValue::Flag(false)),
                    ..c.clone()
                }
            } else {
                encountered_true = true;
                c.clone()
            }
        })
        .collect();

    Conversion::safe(Answer::Choices(single))
}

/// Drops placeholder choices that have no text.
pub(super) fn mc_multiple_from_mc_single(choices: &[Choice]) -> Conversion {
    let filled = choices
        .iter()
        .filter(|c| has_text(Some(*c)))
        .cloned()
        .collect();

    Conversion::safe(Answer::Choices(filled))
}

/// Every item becomes an option marked incorrect.
pub(super) fn mc_from_ordered(choices: &[Choice]) -> Conversion {
    let at_least_one_complete = choices
        .iter()
        .any(|c| c.value.is_some() && has_text(Some(c)));

    let all_false = choices
        .iter()
        .map(|c| Choice {
            value: Some(ChoiceValue::Flag(false)),
            ..c.clone()
        })
        .collect();

    if at_least_one_complete {
        Conversion::lossy(Answer::Choices(all_false))
    } else {
        Conversion::safe(Answer::Choices(all_false))
    }
}

fn arrayed_from_free_form(text: &str, value: ChoiceValue) -> Answer {
    let text = text.trim();
    if text.is_empty() {
        return Answer::Choices(Vec::new());
    }

    Answer::Choices(vec![Choice {
        key: None,
        text: text.to_string(),
        value: Some(value),
    }])
}

// Ordinals compare as plain strings, so `""` comes first. Items with no
// ordinal at all go last.
fn position_key(choice: &Choice) -> (bool, &str) {
    match &choice.value {
        Some(ChoiceValue::Ordinal(s)) => (false, s.as_str()),
        _ => (true, ""),
    }
}
