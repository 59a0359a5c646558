use std::fs;
use std::path::Path;

use crate::error::StoreError;
use crate::models::Question;

/// Load a question file, rejecting answers that do not fit their type.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, StoreError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(StoreError::Empty {
            path: path.to_path_buf(),
        });
    }

    if let Some(bad) = questions.iter().find(|q| !q.is_well_formed()) {
        return Err(StoreError::Malformed {
            id: bad.id,
            question_type: bad.question_type,
        });
    }

    Ok(questions)
}
