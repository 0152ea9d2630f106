//! Shared test fixtures
//!
//! Dataset files and helpers used by the integration suites.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A single-persona roster; target selection always lands on its one record.
pub const SOLO_DATASET: &str = r#"{
  "Yatagarasu": { "name": "Yatagarasu", "level": 46, "arcana": "Sun", "highest_stats": ["Agility"], "resistances": ["Bless"], "weaknesses": ["Curse"] }
}"#;

/// A three-persona roster with distinct levels and arcana.
pub const TRIO_DATASET: &str = r#"{
  "Arsene": { "name": "Arsene", "level": 1, "arcana": "Fool", "highest_stats": ["Agility"], "resistances": ["Curse"], "weaknesses": ["Ice"] },
  "Pixie": { "name": "Pixie", "level": 2, "arcana": "Lovers", "highest_stats": ["Luck"], "resistances": ["Electric"], "weaknesses": ["Gun"] },
  "Eligor": { "name": "Eligor", "level": 16, "arcana": "Emperor", "highest_stats": ["Endurance"], "resistances": ["Phys", "Fire"], "weaknesses": ["Electric"] }
}"#;

/// A dataset file written into its own temp directory.
pub struct DatasetFixture {
    _temp: TempDir,
    path: PathBuf,
}

impl DatasetFixture {
    pub fn new(json: &str) -> Self {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("personas.json");
        fs::write(&path, json).expect("write dataset");
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("utf-8 path")
    }
}
