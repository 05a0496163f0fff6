use std::collections::VecDeque;
use std::path::Path;

use tracing::debug;

use crate::error::{AppError, AppResult, ValidationError};

use super::InputProvider;

/// Wordlist held in memory, one value per line.
///
/// Trailing `\r` is stripped and empty lines are skipped; order and
/// duplicates are kept. Entries are raw bytes, so non-UTF-8 lists work.
#[derive(Debug, Clone, Default)]
pub struct WordlistInput {
    entries: VecDeque<Vec<u8>>,
    total: usize,
}

impl WordlistInput {
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or holds no entries.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read(path).map_err(|err| {
            AppError::validation(ValidationError::ReadWordlist {
                path: path.display().to_string(),
                source: err,
            })
        })?;
        let input = Self::from_bytes(&raw);
        if input.total == 0 {
            return Err(AppError::validation(ValidationError::EmptyWordlist {
                path: path.display().to_string(),
            }));
        }
        debug!("Loaded {} entries from {}", input.total, path.display());
        Ok(input)
    }

    #[must_use]
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self::from_lines(raw.split(|byte| *byte == b'\n'))
    }

    #[must_use]
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        let entries: VecDeque<Vec<u8>> = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref();
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                (!line.is_empty()).then(|| line.to_vec())
            })
            .collect();
        Self {
            total: entries.len(),
            entries,
        }
    }
}

impl InputProvider for WordlistInput {
    fn next(&mut self) -> Option<Vec<u8>> {
        self.entries.pop_front()
    }

    fn total(&self) -> usize {
        self.total
    }
}
