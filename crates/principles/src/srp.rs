//! Single Responsibility: a journal that only manages entries.
//!
//! Saving and loading live in [`PersistenceManager`], so a change to storage
//! never touches `Journal`.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Numbered diary entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<String>,
    count: usize,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, prefixed with its running number ("1: ...").
    pub fn add_entry(&mut self, text: &str) {
        self.count += 1;
        self.entries.push(format!("{}: {}", self.count, text));
    }

    /// Remove the entry at `pos`, returning it. `None` if out of range.
    ///
    /// Remaining entries keep their original numbers; the counter steps back
    /// so the next entry reuses the highest number.
    pub fn remove_entry(&mut self, pos: usize) -> Option<String> {
        if pos >= self.entries.len() {
            return None;
        }
        self.count -= 1;
        Some(self.entries.remove(pos))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Journal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries.join("\n"))
    }
}

/// Stores journals outside the journal itself.
pub struct PersistenceManager;

impl PersistenceManager {
    pub fn save_to_file(journal: &Journal, path: &Path) -> io::Result<()> {
        fs::write(path, journal.to_string())?;
        tracing::info!("Saved {} journal entries to {:?}", journal.len(), path);
        Ok(())
    }

    /// Read a saved journal back as text.
    pub fn load_from_file(path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
