//! Save-file persistence.
//!
//! State is a single JSON snapshot of `{ hero, quests }`. There is no
//! schema versioning or migration: an absent or unreadable snapshot makes
//! the caller fall back to the hardcoded starter data. The reward catalog
//! is immutable and never persisted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ql_core::{Hero, Quest};

use crate::error::EngineResult;

/// Default file name for the save snapshot.
pub const DEFAULT_SAVE_FILE: &str = "questling.json";

/// The on-disk snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFile {
    /// The hero's state at save time.
    pub hero: Hero,
    /// All quests at save time, newest first.
    pub quests: Vec<Quest>,
}

/// Load a snapshot from `path`.
///
/// Returns `None` when the file is absent or does not parse; the caller
/// substitutes starter data in that case.
pub fn load(path: &Path) -> Option<SaveFile> {
    let raw = fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

/// Serialize and write the current state to `path`.
pub fn save(path: &Path, hero: &Hero, quests: &[Quest]) -> EngineResult<()> {
    let snapshot = serde_json::json!({ "hero": hero, "quests": quests });
    let raw = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, raw)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ql_core::{QuestDraft, QuestStatus};
    use tempfile::TempDir;

    #[test]
    fn load_absent_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nope.json")).is_none());
    }

    #[test]
    fn load_malformed_file_is_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_SAVE_FILE);

        let mut hero = Hero::new("Robin");
        hero.xp = 85;
        hero.level = 2;
        let quests = vec![ql_core::Quest::new(
            QuestDraft::default().with_title("Water the plants"),
        )];

        save(&path, &hero, &quests).unwrap();
        let snapshot = load(&path).unwrap();
        assert_eq!(snapshot.hero.name, "Robin");
        assert_eq!(snapshot.hero.xp, 85);
        assert_eq!(snapshot.hero.level, 2);
        assert_eq!(snapshot.quests.len(), 1);
        assert_eq!(snapshot.quests[0].title, "Water the plants");
        assert_eq!(snapshot.quests[0].status, QuestStatus::Active);
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_SAVE_FILE);

        let hero = Hero::new("Robin");
        save(&path, &hero, &[]).unwrap();

        let mut hero = hero;
        hero.xp = 40;
        save(&path, &hero, &[]).unwrap();

        assert_eq!(load(&path).unwrap().hero.xp, 40);
    }
}
