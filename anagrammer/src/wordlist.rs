use std::path::Path;
use tracing::debug;

use crate::errors::{SolverError, SolverResult};

/// An in-memory dictionary of candidate words.
///
/// Words are stored exactly as they appear in the source; matching
/// normalizes case, so mixed-case lists work unchanged. Batch callers load
/// a fresh list per run; the server loads one list at startup and shares it
/// immutably across requests.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Reads a word list file and splits it into candidate words.
    pub fn load(path: &Path, delimiter: &str) -> SolverResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SolverError::wordlist_not_found(path),
            std::io::ErrorKind::PermissionDenied => SolverError::permission_denied(path),
            _ => SolverError::IoError(e),
        })?;

        let contents = match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(e) => return Err(SolverError::encoding_error(path, e)),
        };

        let list = Self::parse(&contents, delimiter)?;
        debug!("Loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Splits in-memory content into candidate words.
    ///
    /// Tokens are trimmed of surrounding whitespace and empty tokens are
    /// skipped, so trailing newlines and Windows line endings are harmless.
    pub fn parse(contents: &str, delimiter: &str) -> SolverResult<Self> {
        if delimiter.is_empty() {
            return Err(SolverError::config_error("delimiter must not be empty"));
        }

        let words = contents
            .split(delimiter)
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self { words })
    }

    /// Builds a word list from already-split words
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
