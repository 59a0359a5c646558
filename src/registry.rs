//! Per-type configuration for questions.
//!
//! The table is fixed at compile time. The display-label index is derived
//! from it on first use.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::RegistryError;
use crate::models::{Choice, ChoiceKey, ChoiceValue, QuestionType};

/// Opaque tag telling the renderer which choice editor to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChoiceCapability(&'static str);

impl ChoiceCapability {
    /// Text plus a correctness checkbox.
    pub const CHOICE: ChoiceCapability = ChoiceCapability("choice");
    /// Text plus a position field.
    pub const ORDERED_CHOICE: ChoiceCapability = ChoiceCapability("ordered_choice");

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ChoiceCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.0)
    }
}

/// Metadata for one question type.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub question_type: QuestionType,
    /// Label shown to authors. Unique across types.
    pub display: &'static str,
    pub choice_capability: Option<ChoiceCapability>,
    pub empty_choice: Option<fn() -> Choice>,
}

impl TypeDescriptor {
    /// A fresh keyless choice, if this type has choices.
    pub fn empty_choice(&self) -> Option<Choice> {
        self.empty_choice.map(|make| make())
    }
}

fn empty_mc_choice() -> Choice {
    Choice::flag("", false)
}

fn empty_ordered_choice() -> Choice {
    Choice::ordinal("", "")
}

static FREE_FORM: TypeDescriptor = TypeDescriptor {
    question_type: QuestionType::FreeForm,
    display: "Simple",
    choice_capability: None,
    empty_choice: None,
};

static TRUE_FALSE: TypeDescriptor = TypeDescriptor {
    question_type: QuestionType::TrueFalse,
    display: "True/False",
    choice_capability: None,
    empty_choice: None,
};

static MC_SINGLE: TypeDescriptor = TypeDescriptor {
    question_type: QuestionType::McSingle,
    display: "Multiple Choice -- Single Answer",
    choice_capability: Some(ChoiceCapability::CHOICE),
    empty_choice: Some(empty_mc_choice),
};

static MC_MULTIPLE: TypeDescriptor = TypeDescriptor {
    question_type: QuestionType::McMultiple,
    display: "Multiple Choice -- Multiple Answers",
    choice_capability: Some(ChoiceCapability::CHOICE),
    empty_choice: Some(empty_mc_choice),
};

static ORDERED: TypeDescriptor = TypeDescriptor {
    question_type: QuestionType::Ordered,
    display: "Ordered",
    choice_capability: Some(ChoiceCapability::ORDERED_CHOICE),
    empty_choice: Some(empty_ordered_choice),
};

static TYPES_BY_DISPLAY: LazyLock<HashMap<&'static str, QuestionType>> = LazyLock::new(|| {
    descriptors()
        .map(|descriptor| (descriptor.display, descriptor.question_type))
        .collect()
});

pub fn descriptor_of(question_type: QuestionType) -> &'static TypeDescriptor {
    match question_type {
        QuestionType::FreeForm => &FREE_FORM,
        QuestionType::TrueFalse => &TRUE_FALSE,
        QuestionType::McSingle => &MC_SINGLE,
        QuestionType::McMultiple => &MC_MULTIPLE,
        QuestionType::Ordered => &ORDERED,
    }
}

/// Look up a descriptor by wire identifier, e.g. `"mc_single"`.
pub fn descriptor_named(name: &str) -> Result<&'static TypeDescriptor, RegistryError> {
    name.parse().map(descriptor_of)
}

/// All descriptors, in declaration order.
pub fn descriptors() -> impl Iterator<Item = &'static TypeDescriptor> {
    QuestionType::ALL.into_iter().map(descriptor_of)
}

pub fn type_of_display(label: &str) -> Result<QuestionType, RegistryError> {
    TYPES_BY_DISPLAY
        .get(label)
        .copied()
        .ok_or_else(|| RegistryError::UnknownDisplay(label.to_string()))
}

pub fn empty_choice_for(question_type: QuestionType) -> Result<Choice, RegistryError> {
    descriptor_of(question_type)
        .empty_choice()
        .ok_or(RegistryError::NotChoiceBased(question_type))
}

/// Toggle the correctness flag of the choice with `key`.
///
/// For `mc_single`, turning a choice on turns every other choice off.
/// For `mc_multiple`, only the toggled choice changes. Other types have
/// nothing to toggle.
pub fn toggle_choice(
    question_type: QuestionType,
    choices: &[Choice],
    key: &ChoiceKey,
) -> Result<Vec<Choice>, RegistryError> {
    if !matches!(question_type, QuestionType::McSingle | QuestionType::McMultiple) {
        return Err(RegistryError::NotToggleable(question_type));
    }

    let toggled = choices
        .iter()
        .find(|choice| choice.key.as_ref() == Some(key))
        .ok_or_else(|| RegistryError::UnknownChoice(key.clone()))?;
    let turning_on = !toggled.is_truthy();

    let toggled_choices = choices
        .iter()
        .map(|choice| {
            let is_target = choice.key.as_ref() == Some(key);
            if is_target {
                Choice {
                    value: Some(ChoiceValue::Flag(turning_on)),
                    ..choice.clone()
                }
            } else if question_type == QuestionType::McSingle && turning_on && choice.is_truthy() {
                Choice {
                    value: Some(ChoiceValue::Flag(false)),
                    ..choice.clone()
                }
            } else {
                choice.clone()
            }
        })
        .collect();

    Ok(toggled_choices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mc(choices: &[(u64, &str, bool)]) -> Vec<Choice> {
        choices
            .iter()
            .map(|(key, text, value)| Choice::flag(*text, *value).with_key(*key))
            .collect()
    }

    fn flags(choices: &[Choice]) -> Vec<bool> {
        choices.iter().map(Choice::is_truthy).collect()
    }

    #[test]
    fn test_display_labels_round_trip() {
        for descriptor in descriptors() {
            assert_eq!(
                type_of_display(descriptor.display).unwrap(),
                descriptor.question_type
            );
        }
        assert_eq!(type_of_display("Ordered").unwrap(), QuestionType::Ordered);
        assert_eq!(
            type_of_display("Essay"),
            Err(RegistryError::UnknownDisplay("Essay".to_string()))
        );
    }

    #[test]
    fn test_capabilities() {
        assert_eq!(descriptor_of(QuestionType::FreeForm).choice_capability, None);
        assert_eq!(descriptor_of(QuestionType::TrueFalse).choice_capability, None);
        assert_eq!(
            descriptor_of(QuestionType::McSingle).choice_capability,
            Some(ChoiceCapability::CHOICE)
        );
        assert_eq!(
            descriptor_of(QuestionType::Ordered).choice_capability,
            Some(ChoiceCapability::ORDERED_CHOICE)
        );
    }

    #[test]
    fn test_descriptor_named() {
        assert_eq!(
            descriptor_named("true_false").unwrap().display,
            "True/False"
        );
        assert_eq!(
            descriptor_named("TrueFalse").unwrap_err(),
            RegistryError::UnknownType("TrueFalse".to_string())
        );
    }

    #[test]
    fn test_empty_choices() {
        assert_eq!(
            empty_choice_for(QuestionType::McSingle).unwrap(),
            Choice::flag("", false)
        );
        assert_eq!(
            empty_choice_for(QuestionType::McMultiple).unwrap(),
            Choice::flag("", false)
        );
        assert_eq!(
            empty_choice_for(QuestionType::Ordered).unwrap(),
            Choice::ordinal("", "")
        );
        assert_eq!(
            empty_choice_for(QuestionType::FreeForm),
            Err(RegistryError::NotChoiceBased(QuestionType::FreeForm))
        );
        assert_eq!(
            empty_choice_for(QuestionType::TrueFalse),
            Err(RegistryError::NotChoiceBased(QuestionType::TrueFalse))
        );
    }

    #[test]
    fn test_toggle_single_makes_only_true() {
        let choices = mc(&[(1, "a", true), (2, "b", false), (3, "c", false)]);
        let toggled = toggle_choice(QuestionType::McSingle, &choices, &ChoiceKey::from(3u64)).unwrap();
        assert_eq!(flags(&toggled), vec![false, false, true]);
    }

    #[test]
    fn test_toggle_single_off() {
        let choices = mc(&[(1, "a", true), (2, "b", false)]);
        let toggled = toggle_choice(QuestionType::McSingle, &choices, &ChoiceKey::from(1u64)).unwrap();
        assert_eq!(flags(&toggled), vec![false, false]);
    }

    #[test]
    fn test_toggle_multiple_flips_one() {
        let choices = mc(&[(1, "a", true), (2, "b", false)]);
        let toggled = toggle_choice(QuestionType::McMultiple, &choices, &ChoiceKey::from(2u64)).unwrap();
        assert_eq!(flags(&toggled), vec![true, true]);
    }

    #[test]
    fn test_toggle_errors() {
        let choices = mc(&[(1, "a", true)]);
        assert_eq!(
            toggle_choice(QuestionType::Ordered, &choices, &ChoiceKey::from(1u64)),
            Err(RegistryError::NotToggleable(QuestionType::Ordered))
        );
        assert_eq!(
            toggle_choice(QuestionType::McMultiple, &choices, &ChoiceKey::from(9u64)),
            Err(RegistryError::UnknownChoice(ChoiceKey::from(9u64)))
        );
    }
}
