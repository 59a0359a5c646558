//! # trivit
//!
//! Authoring core for trivia questions: the per-type registry, the answer
//! conversion engine used when a question changes type, an editing session
//! that holds lossy changes until the author confirms them, and a simple
//! owner-keyed question store.
//!
//! ## Usage
//!
//! ```rust
//! use trivit::{Answer, Conversion, ConversionRequest, QuestionType, convert};
//!
//! let answer = Answer::FreeForm("  hello  ".to_string());
//! let conversion = convert(&ConversionRequest {
//!     from_type: QuestionType::FreeForm,
//!     to_type: QuestionType::Ordered,
//!     answer: &answer,
//! })?;
//!
//! match conversion {
//!     Conversion::Safe { answer } => println!("apply {:?}", answer),
//!     Conversion::Lossy { proposed } => println!("ask first: {:?}", proposed),
//! }
//! # Ok::<(), trivit::ConversionError>(())
//! ```

pub mod convert;
mod data;
mod editor;
pub mod error;
mod models;
pub mod registry;

pub use convert::{Conversion, ConversionRequest, convert, has_text, is_answer_empty};
pub use data::{JsonFileStore, QUERY_LIMIT, QuestionStore, load_questions_from_json};
pub use editor::{PendingChange, QuestionEditor, TypeChange};
pub use error::{ConversionError, EditorError, RegistryError, StoreError};
pub use models::{Answer, Choice, ChoiceKey, ChoiceValue, Question, QuestionType};
pub use registry::{
    ChoiceCapability, TypeDescriptor, descriptor_named, descriptor_of, empty_choice_for,
    toggle_choice, type_of_display,
};
