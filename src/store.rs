//! Single-slot JSON persistence for the current schedule.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::StoreError;
use crate::schedule::ScheduleState;

/// File name of the default save slot
pub const DEFAULT_SAVE_FILE: &str = "bughouse-schedule.json";

/// The one named slot holding the whole schedule
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the slot, treating a missing or corrupted save as no schedule
    pub fn load(&self) -> Option<ScheduleState> {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to load schedule, starting empty: {}", error_chain(&e));
                None
            }
        }
    }

    /// Like [`load`](Self::load) but reports why a present save was unusable
    pub fn try_load(&self) -> Result<Option<ScheduleState>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let state: ScheduleState = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        state.check_structure().map_err(|reason| StoreError::Invalid {
            path: self.path.clone(),
            reason,
        })?;

        Ok(Some(state))
    }

    /// Replaces the slot contents; written to a temp file first, then renamed
    pub fn save(&self, state: &ScheduleState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state).map_err(StoreError::Serialize)?;
        let tmp_path = self.path.with_extension("json.tmp");

        fs::write(&tmp_path, json).map_err(|source| StoreError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved schedule to {}", self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{GameCount, TeamSide};
    use tempfile::TempDir;

    fn sample_state() -> ScheduleState {
        let players = ["Alice", "Bob", "Carol", "Dave"].map(String::from);
        let mut state = ScheduleState::new(players, GameCount::Six);
        state.mark_winner(3, TeamSide::Team1);
        state
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::new(temp_dir.path().join("slot.json"));

        let state = sample_state();
        store.save(&state).unwrap();

        assert_eq!(store.load(), Some(state));
        assert!(!temp_dir.path().join("slot.json.tmp").exists());
    }

    #[test]
    fn test_missing_slot_is_no_schedule() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::new(temp_dir.path().join("absent.json"));
        assert!(matches!(store.try_load(), Ok(None)));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupted_slot_is_recovered_as_no_schedule() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slot.json");
        fs::write(&path, "{\"players\": [\"only one\"]").unwrap();

        let store = ScheduleStore::new(&path);
        assert!(matches!(store.try_load(), Err(StoreError::Parse { .. })));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_clear_removes_slot_and_tolerates_absence() {
        let temp_dir = TempDir::new().unwrap();
        let store = ScheduleStore::new(temp_dir.path().join("slot.json"));
        store.save(&sample_state()).unwrap();

        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_reads_blob_saved_by_the_browser_app() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slot.json");
        let players = ["A", "B", "C", "D"].map(String::from);
        let mut blob = serde_json::to_value(ScheduleState::new(players, GameCount::Twelve)).unwrap();
        blob["games"][0]["winner"] = serde_json::json!("team1");
        assert!(blob.get("allGames").is_none());
        fs::write(&path, blob.to_string()).unwrap();

        let state = ScheduleStore::new(&path).load().unwrap();
        assert_eq!(state.total_games, GameCount::Twelve);
        assert_eq!(state.games[0].winner, Some(TeamSide::Team1));
        assert!(state.all_games.is_none());
    }

    #[test]
    fn test_short_cached_plan_is_recovered_as_no_schedule() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slot.json");
        let mut blob = serde_json::to_value(sample_state()).unwrap();
        blob["allGames"].as_array_mut().unwrap().truncate(1);
        fs::write(&path, blob.to_string()).unwrap();

        let store = ScheduleStore::new(&path);
        assert!(matches!(store.try_load(), Err(StoreError::Invalid { .. })));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_wrong_game_count_is_recovered_as_no_schedule() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("slot.json");
        let mut blob = serde_json::to_value(sample_state()).unwrap();
        blob["totalGames"] = serde_json::json!(12);
        fs::write(&path, blob.to_string()).unwrap();

        assert_eq!(ScheduleStore::new(&path).load(), None);
    }
}
