//! Result store: persists the last successful study guide.
//!
//! One JSON blob in the user data directory, replaced wholesale on each
//! successful analysis and removed on `clear`. No schema migration: a blob
//! that no longer parses is treated as absent.

use crate::log_warn;
use crate::types::StudyGuide;
use anyhow::{Result, anyhow};
use std::fs;
use std::path::PathBuf;

const RESULT_FILE: &str = "last_analysis.json";

/// Handle to the persisted analysis result
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    /// Opens the store at the default location in the user data directory
    pub fn open() -> Result<Self> {
        let mut path =
            dirs::data_dir().ok_or_else(|| anyhow!("Unable to determine data directory"))?;
        path.push("lexiband");
        fs::create_dir_all(&path)?;
        path.push(RESULT_FILE);
        Ok(Self { path })
    }

    /// Opens a store at an explicit file path (used by tests)
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the stored guide, or `None` if absent or unreadable
    pub fn load(&self) -> Result<Option<StudyGuide>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&content) {
            Ok(guide) => Ok(Some(guide)),
            Err(e) => {
                log_warn!("Ignoring unreadable stored result: {}", e);
                Ok(None)
            }
        }
    }

    /// Replaces the stored guide
    pub fn save(&self, guide: &StudyGuide) -> Result<()> {
        let content = serde_json::to_string_pretty(guide)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Removes the stored guide; succeeds if none exists
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
