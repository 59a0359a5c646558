use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::QuestionType;

/// Identity of a choice. Assigned by the editor; any JSON number or string
/// is accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceKey {
    Number(Number),
    Text(String),
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceKey::Number(n) => write!(f, "{}", n),
            ChoiceKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ChoiceKey {
    fn from(n: u64) -> Self {
        ChoiceKey::Number(n.into())
    }
}

impl From<&str> for ChoiceKey {
    fn from(s: &str) -> Self {
        ChoiceKey::Text(s.to_string())
    }
}

/// Type-dependent payload of a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    /// Correctness marker for multiple-choice questions.
    Flag(bool),
    /// Position marker for ordered questions. Empty means unpositioned.
    Ordinal(String),
}

impl ChoiceValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            ChoiceValue::Flag(b) => *b,
            ChoiceValue::Ordinal(s) => !s.is_empty(),
        }
    }
}

/// One selectable option of a choice-based answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<ChoiceKey>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ChoiceValue>,
}

impl Choice {
    /// A multiple-choice option.
    pub fn flag(text: impl Into<String>, value: bool) -> Self {
        Self {
            key: None,
            text: text.into(),
            value: Some(ChoiceValue::Flag(value)),
        }
    }

    /// An ordered-list item.
    pub fn ordinal(text: impl Into<String>, ordinal: impl Into<String>) -> Self {
        Self {
            key: None,
            text: text.into(),
            value: Some(ChoiceValue::Ordinal(ordinal.into())),
        }
    }

    pub fn with_key(mut self, key: impl Into<ChoiceKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// True for a `true` flag or a non-empty ordinal.
    pub fn is_truthy(&self) -> bool {
        self.value.as_ref().is_some_and(ChoiceValue::is_truthy)
    }
}

/// The answer stored with a question. Its shape depends on the question type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    FreeForm(String),
    TrueFalse(bool),
    Choices(Vec<Choice>),
}

impl Answer {
    /// The blank answer a new question of `question_type` starts with.
    pub fn empty_for(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::FreeForm => Answer::FreeForm(String::new()),
            QuestionType::TrueFalse => Answer::TrueFalse(false),
            QuestionType::McSingle | QuestionType::McMultiple | QuestionType::Ordered => {
                Answer::Choices(Vec::new())
            }
        }
    }

    /// Whether this answer has the shape `question_type` requires.
    pub fn fits(&self, question_type: QuestionType) -> bool {
        match self {
            Answer::FreeForm(_) => question_type == QuestionType::FreeForm,
            Answer::TrueFalse(_) => question_type == QuestionType::TrueFalse,
            Answer::Choices(_) => question_type.is_choice_based(),
        }
    }

    pub fn as_choices(&self) -> Option<&[Choice]> {
        match self {
            Answer::Choices(choices) => Some(choices.as_slice()),
            _ => None,
        }
    }

    pub fn as_choices_mut(&mut self) -> Option<&mut Vec<Choice>> {
        match self {
            Answer::Choices(choices) => Some(choices),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_wire_shapes() {
        let text: Answer = serde_json::from_str("\"Paris\"").unwrap();
        assert_eq!(text, Answer::FreeForm("Paris".to_string()));

        let flag: Answer = serde_json::from_str("true").unwrap();
        assert_eq!(flag, Answer::TrueFalse(true));

        let choices: Answer =
            serde_json::from_str(r#"[{"key":1,"text":"a","value":true},{"key":"b","text":"b","value":"2"}]"#)
                .unwrap();
        assert_eq!(
            choices,
            Answer::Choices(vec![
                Choice::flag("a", true).with_key(1u64),
                Choice::ordinal("b", "2").with_key("b"),
            ])
        );
    }

    #[test]
    fn test_negative_and_fractional_keys() {
        let choices: Answer =
            serde_json::from_str(r#"[{"key":-1,"text":"a","value":true},{"key":2.5,"text":"b","value":false}]"#)
                .unwrap();
        let keys: Vec<String> = choices
            .as_choices()
            .unwrap()
            .iter()
            .map(|c| c.key.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["-1", "2.5"]);
        assert_eq!(
            serde_json::to_string(&choices).unwrap(),
            r#"[{"key":-1,"text":"a","value":true},{"key":2.5,"text":"b","value":false}]"#
        );
    }

    #[test]
    fn test_choice_missing_fields() {
        let choice: Choice = serde_json::from_str("{}").unwrap();
        assert_eq!(choice.key, None);
        assert_eq!(choice.text, "");
        assert_eq!(choice.value, None);
        assert!(!choice.is_truthy());
    }

    #[test]
    fn test_truthiness() {
        assert!(Choice::flag("x", true).is_truthy());
        assert!(!Choice::flag("x", false).is_truthy());
        assert!(Choice::ordinal("x", "1").is_truthy());
        assert!(!Choice::ordinal("x", "").is_truthy());
    }

    #[test]
    fn test_answer_fits() {
        assert!(Answer::FreeForm(String::new()).fits(QuestionType::FreeForm));
        assert!(!Answer::FreeForm(String::new()).fits(QuestionType::TrueFalse));
        assert!(Answer::TrueFalse(true).fits(QuestionType::TrueFalse));
        for t in [QuestionType::McSingle, QuestionType::McMultiple, QuestionType::Ordered] {
            assert!(Answer::Choices(Vec::new()).fits(t));
            assert!(Answer::empty_for(t).fits(t));
        }
        assert!(!Answer::Choices(Vec::new()).fits(QuestionType::FreeForm));
    }
}
