use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Question;

/// Error raised while reading the question bank file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not a valid list of questions.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file holds no question at all.
    Empty { path: PathBuf },
    /// Two entries share the same id.
    DuplicateId { path: PathBuf, id: u32 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            LoadError::Empty { path } => {
                write!(f, "{} must contain at least one question", path.display())
            }
            LoadError::DuplicateId { path, id } => {
                write!(f, "{} contains question id {} more than once", path.display(), id)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
            LoadError::Empty { .. } | LoadError::DuplicateId { .. } => None,
        }
    }
}

/// Read and check the question bank stored at `path`.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content, path)?;
    tracing::info!(count = questions.len(), path = %path.display(), "question bank loaded");
    Ok(questions)
}

/// Parse a question bank document. `origin` only labels errors.
pub fn parse_questions(json_content: &str, origin: &Path) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> =
        serde_json::from_str(json_content).map_err(|source| LoadError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: origin.to_path_buf(),
        });
    }

    let mut seen = HashSet::with_capacity(questions.len());
    if let Some(question) = questions.iter().find(|q| !seen.insert(q.id)) {
        return Err(LoadError::DuplicateId {
            path: origin.to_path_buf(),
            id: question.id,
        });
    }

    Ok(questions)
}
