mod loader;
mod store;

pub use loader::load_questions_from_json;
pub use store::{JsonFileStore, QUERY_LIMIT, QuestionStore};
