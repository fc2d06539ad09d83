use std::cell::Cell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "gridsnake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Failures at the high-score persistence boundary.
///
/// The session treats every variant as non-fatal: a failed load defaults the
/// high score to zero and a failed save is dropped.
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("score file i/o: {0}")]
    Io(#[from] io::Error),
    #[error("score file format: {0}")]
    Format(#[from] serde_json::Error),
}

/// Injected persistence capability for the session's high score.
///
/// Passed into the session at construction rather than accessed as a global,
/// so tests can observe writes through an in-memory fake.
pub trait HighScoreStore {
    /// Loads the persisted high score. A store with no record yet returns 0.
    fn load(&self) -> Result<u32, ScoreStoreError>;

    /// Persists a new high score.
    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// High-score store backed by a JSON file in the platform data directory.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at the platform-correct default location.
    #[must_use]
    pub fn at_default_location() -> Self {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR_NAME);
        path.push(SCORE_FILE_NAME);
        Self { path }
    }

    /// Creates a store at an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> Result<u32, ScoreStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file: ScoreFile = serde_json::from_str(&raw)?;
        Ok(file.high_score)
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { high_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and for running without persistence.
///
/// Clones share the same value, so a test can keep a handle while the
/// session owns its own copy.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<Cell<u32>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(high_score: u32) -> Self {
        Self {
            value: Rc::new(Cell::new(high_score)),
        }
    }

    /// Returns the currently stored value.
    #[must_use]
    pub fn get(&self) -> u32 {
        self.value.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, ScoreStoreError> {
        Ok(self.value.get())
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreStoreError> {
        self.value.set(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{HighScoreStore, JsonFileStore, MemoryStore};

    #[test]
    fn file_store_round_trip() {
        let path = unique_test_path("round_trip");
        let mut store = JsonFileStore::new(&path);

        store.save(42).expect("save should succeed");
        assert_eq!(store.load().expect("load should succeed"), 42);

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_loads_as_zero() {
        let store = JsonFileStore::new(unique_test_path("missing"));
        assert_eq!(store.load().expect("missing file should load as 0"), 0);
    }

    #[test]
    fn malformed_score_file_is_an_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_err());

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_clones_share_the_value() {
        let handle = MemoryStore::new(3);
        let mut owned = handle.clone();

        owned.save(9).expect("memory save cannot fail");

        assert_eq!(handle.get(), 9);
        assert_eq!(owned.load().expect("memory load cannot fail"), 9);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("gridsnake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
