use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::Question;

/// Most questions returned by one [`QuestionStore::load_questions`] call.
pub const QUERY_LIMIT: usize = 100;

/// Where questions live between editing sessions.
pub trait QuestionStore {
    /// Questions belonging to `owner_id`, at most [`QUERY_LIMIT`] of them.
    fn load_questions(&self, owner_id: &str) -> Result<Vec<Question>, StoreError>;

    fn load_question(&self, owner_id: &str, id: Uuid) -> Result<Option<Question>, StoreError>;

    /// Insert the question, or replace the stored one with the same owner and id.
    fn save_question(&mut self, question: &Question) -> Result<(), StoreError>;
}

/// All questions of all owners in one JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Question>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, questions: &[Question]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(questions).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target so the rename stays on one filesystem.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp_path, &self.path).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl QuestionStore for JsonFileStore {
    fn load_questions(&self, owner_id: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|q| q.owner_id == owner_id)
            .take(QUERY_LIMIT)
            .collect())
    }

    fn load_question(&self, owner_id: &str, id: Uuid) -> Result<Option<Question>, StoreError> {
        Ok(self
            .read_all()?
            .into_iter()
            .find(|q| q.owner_id == owner_id && q.id == id))
    }

    fn save_question(&mut self, question: &Question) -> Result<(), StoreError> {
        if !question.is_well_formed() {
            return Err(StoreError::Malformed {
                id: question.id,
                question_type: question.question_type,
            });
        }

        let mut questions = self.read_all()?;
        match questions
            .iter_mut()
            .find(|q| q.owner_id == question.owner_id && q.id == question.id)
        {
            Some(existing) => *existing = question.clone(),
            None => questions.push(question.clone()),
        }

        self.write_all(&questions)?;
        info!(
            question = %question.id,
            owner = %question.owner_id,
            path = %self.path.display(),
            "saved question"
        );
        Ok(())
    }
}
