mod choice;
mod question;

pub use choice::{Answer, Choice, ChoiceKey, ChoiceValue};
pub use question::{Question, QuestionType};
