use chrono::{DateTime, Utc};
use log::{debug, error};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
    pub request: Value,
    pub response: Value,
    pub team_hash: String,
}

/// Generated teams persisted to a JSON array file, newest last.
pub struct HistoryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl HistoryStore {
    /// Creates the file, and its parent directories, when absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, "[]")?;
            debug!("created history file {}", path.display());
        }

        Ok(HistoryStore {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends an entry and keeps only the newest entries on disk.
    pub fn add<Req: Serialize, Res: Serialize>(
        &self,
        user_id: &str,
        request: &Req,
        response: &Res,
    ) -> Result<HistoryEntry, HistoryError> {
        let request = serde_json::to_value(request)?;
        let response = serde_json::to_value(response)?;

        let entry = HistoryEntry {
            timestamp: Utc::now(),
            user_id: user_id.to_string(),
            team_hash: team_hash(&response)?,
            request,
            response,
        };

        let _guard = self.lock.lock();

        let mut entries = self.read_or_empty();
        entries.push(entry.clone());

        let skip = entries.len().saturating_sub(MAX_HISTORY_ENTRIES);
        fs::write(&self.path, serde_json::to_vec(&entries[skip..])?)?;

        Ok(entry)
    }

    /// All entries, or only those of `user_id`. An unreadable file reads as empty.
    pub fn history(&self, user_id: Option<&str>) -> Vec<HistoryEntry> {
        let _guard = self.lock.lock();

        let entries = self.read_or_empty();
        match user_id {
            Some(user_id) => entries
                .into_iter()
                .filter(|entry| entry.user_id == user_id)
                .collect(),
            None => entries,
        }
    }

    pub fn last_team(&self, user_id: &str) -> Option<HistoryEntry> {
        self.history(Some(user_id)).pop()
    }

    pub fn similar_teams(&self, team_hash: &str) -> Vec<HistoryEntry> {
        self.history(None)
            .into_iter()
            .filter(|entry| entry.team_hash == team_hash)
            .collect()
    }

    fn read_or_empty(&self) -> Vec<HistoryEntry> {
        match self.read() {
            Ok(entries) => entries,
            Err(e) => {
                error!("failed to read history {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn read(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let content = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&content)?)
    }
}

/// SHA-256 hex digest of the canonical (key sorted) JSON form.
pub fn team_hash(response: &Value) -> Result<String, HistoryError> {
    let canonical = serde_json::to_string(response)?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());

    Ok(hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::open(dir.path().join("nested").join("history.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_creates_empty_file() {
        let (_dir, store) = store();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.history(None).is_empty());
    }

    #[test]
    fn test_add_and_filter_by_user() {
        let (_dir, store) = store();

        store.add("alice", &json!({"formation": "4-3-3"}), &json!({"players": [1]})).unwrap();
        store.add("bob", &json!({"formation": "4-4-2"}), &json!({"players": [2]})).unwrap();
        store.add("alice", &json!({"formation": "3-5-2"}), &json!({"players": [3]})).unwrap();

        assert_eq!(store.history(None).len(), 3);
        assert_eq!(store.history(Some("alice")).len(), 2);
        assert!(store.history(Some("carol")).is_empty());

        let last = store.last_team("alice").unwrap();
        assert_eq!(last.request["formation"], "3-5-2");
        assert!(store.last_team("carol").is_none());
    }

    #[test]
    fn test_keeps_only_newest_entries() {
        let (_dir, store) = store();

        for i in 0..(MAX_HISTORY_ENTRIES + 5) {
            store.add("user", &json!({"n": i}), &json!({"n": i})).unwrap();
        }

        let history = store.history(None);
        assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(history[0].request["n"], 5);
    }

    #[test]
    fn test_team_hash_is_stable_and_key_order_independent() {
        let a = json!({"formation": "4-3-3", "players": [1, 2]});
        let b: Value = serde_json::from_str(r#"{"players": [1, 2], "formation": "4-3-3"}"#).unwrap();

        assert_eq!(team_hash(&a).unwrap(), team_hash(&b).unwrap());
        assert_eq!(team_hash(&a).unwrap().len(), 64);
        assert_ne!(team_hash(&a).unwrap(), team_hash(&json!({})).unwrap());
    }

    #[test]
    fn test_similar_teams() {
        let (_dir, store) = store();

        let first = store.add("a", &json!({}), &json!({"players": [1]})).unwrap();
        store.add("b", &json!({}), &json!({"players": [1]})).unwrap();
        store.add("c", &json!({}), &json!({"players": [9]})).unwrap();

        let similar = store.similar_teams(&first.team_hash);
        assert_eq!(similar.len(), 2);
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (_dir, store) = store();
        fs::write(store.path(), "not json").unwrap();

        assert!(store.history(None).is_empty());

        store.add("a", &json!({}), &json!({})).unwrap();
        assert_eq!(store.history(None).len(), 1);
    }
}
