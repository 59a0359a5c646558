use tracing::{info, warn};
use uuid::Uuid;

use crate::convert::{Conversion, ConversionRequest, convert};
use crate::error::{EditorError, RegistryError};
use crate::models::{Answer, Choice, ChoiceKey, Question, QuestionType};
use crate::registry;

/// A lossy type change waiting for the author's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    pub to_type: QuestionType,
    pub proposed: Answer,
}

/// What happened when the author picked a new type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeChange {
    /// The question now has the new type.
    Applied,
    /// Nothing was changed; `proposed` replaces the answer on [`QuestionEditor::confirm`].
    NeedsConfirmation { proposed: Answer },
}

/// Editing session for a single question.
pub struct QuestionEditor {
    question: Question,
    pending: Option<PendingChange>,
}

impl QuestionEditor {
    pub fn new(mut question: Question) -> Self {
        assign_missing_keys(&mut question.answer);
        Self {
            question,
            pending: None,
        }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn pending(&self) -> Option<&PendingChange> {
        self.pending.as_ref()
    }

    pub fn into_question(self) -> Question {
        self.question
    }

    /// Switch the question to `to_type`.
    ///
    /// Safe conversions are applied at once. A lossy one is parked and
    /// replaces any change that was already waiting.
    pub fn change_type(&mut self, to_type: QuestionType) -> Result<TypeChange, EditorError> {
        let request = ConversionRequest {
            from_type: self.question.question_type,
            to_type,
            answer: &self.question.answer,
        };

        match convert(&request)? {
            Conversion::Safe { answer } => {
                self.pending = None;
                self.apply(to_type, answer);
                Ok(TypeChange::Applied)
            }
            Conversion::Lossy { proposed } => {
                warn!(
                    question = %self.question.id,
                    from = %self.question.question_type,
                    to = %to_type,
                    "type change discards answer data, waiting for confirmation"
                );
                self.pending = Some(PendingChange {
                    to_type,
                    proposed: proposed.clone(),
                });
                Ok(TypeChange::NeedsConfirmation { proposed })
            }
        }
    }

    /// Apply the waiting lossy change.
    pub fn confirm(&mut self) -> Result<(), EditorError> {
        let PendingChange { to_type, proposed } =
            self.pending.take().ok_or(EditorError::NothingPending)?;
        self.apply(to_type, proposed);
        Ok(())
    }

    /// Drop the waiting change, leaving the question as it was.
    pub fn cancel(&mut self) -> Option<PendingChange> {
        self.pending.take()
    }

    /// Append the type's empty choice and return its key.
    pub fn add_choice(&mut self) -> Result<ChoiceKey, EditorError> {
        self.ensure_nothing_pending()?;
        let question_type = self.question.question_type;
        let choice = registry::empty_choice_for(question_type)?;
        let key = fresh_key();

        self.choices_mut()?.push(Choice {
            key: Some(key.clone()),
            ..choice
        });
        Ok(key)
    }

    pub fn toggle_choice(&mut self, key: &ChoiceKey) -> Result<(), EditorError> {
        self.ensure_nothing_pending()?;
        let question_type = self.question.question_type;
        let choices = self.choices_mut()?;
        *choices = registry::toggle_choice(question_type, choices.as_slice(), key)?;
        Ok(())
    }

    pub fn set_choice_text(&mut self, key: &ChoiceKey, text: impl Into<String>) -> Result<(), EditorError> {
        self.ensure_nothing_pending()?;
        let choice = self
            .choices_mut()?
            .iter_mut()
            .find(|c| c.key.as_ref() == Some(key))
            .ok_or_else(|| RegistryError::UnknownChoice(key.clone()))?;
        choice.text = text.into();
        Ok(())
    }

    fn apply(&mut self, to_type: QuestionType, mut answer: Answer) {
        assign_missing_keys(&mut answer);
        info!(
            question = %self.question.id,
            from = %self.question.question_type,
            to = %to_type,
            "question type changed"
        );
        self.question.question_type = to_type;
        self.question.answer = answer;
    }

    fn choices_mut(&mut self) -> Result<&mut Vec<Choice>, EditorError> {
        let question_type = self.question.question_type;
        self.question
            .answer
            .as_choices_mut()
            .ok_or(EditorError::Registry(RegistryError::NotChoiceBased(question_type)))
    }

    fn ensure_nothing_pending(&self) -> Result<(), EditorError> {
        match &self.pending {
            Some(pending) => Err(EditorError::ChangePending(pending.to_type)),
            None => Ok(()),
        }
    }
}

fn fresh_key() -> ChoiceKey {
    ChoiceKey::Text(Uuid::new_v4().to_string())
}

fn assign_missing_keys(answer: &mut Answer) {
    if let Some(choices) = answer.as_choices_mut() {
        for choice in choices.iter_mut().filter(|c| c.key.is_none()) {
            choice.key = Some(fresh_key());
        }
    }
}
