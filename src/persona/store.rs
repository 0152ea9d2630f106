//! Read-only persona store.
//!
//! Loads the guessable roster once at startup and serves name lookups for
//! the rest of the run. The dataset is a JSON object mapping persona names
//! to records; iteration and `all_names` follow the dataset's own order.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};

use super::types::PersonaRecord;

// ─────────────────────────────────────────────────────────────────
// Bundled Dataset
// ─────────────────────────────────────────────────────────────────

/// Default roster compiled into the binary, used when no dataset path
/// is configured.
const BUNDLED_DATASET: &str = include_str!("../../data/personas.json");

// ─────────────────────────────────────────────────────────────────
// Persona Store
// ─────────────────────────────────────────────────────────────────

/// Immutable collection of persona records, keyed by name.
///
/// Built once by one of the constructors and never mutated afterwards;
/// game sessions borrow from it for their whole lifetime.
#[derive(Debug)]
pub struct PersonaStore {
    /// Records in dataset order.
    records: Vec<PersonaRecord>,

    /// Name -> index into `records`.
    index: HashMap<String, usize>,
}

impl PersonaStore {
    /// Build a store from records, validating names and levels.
    pub fn from_records(records: impl IntoIterator<Item = PersonaRecord>) -> Result<Self> {
        let records: Vec<PersonaRecord> = records.into_iter().collect();
        let mut index = HashMap::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(Error::invalid_record(
                    record.name.clone(),
                    "persona name must not be empty",
                ));
            }
            if record.level < 1 {
                return Err(Error::invalid_record(
                    record.name.clone(),
                    format!("level must be at least 1, got {}", record.level),
                ));
            }
            if index.insert(record.name.clone(), i).is_some() {
                return Err(Error::duplicate_name(record.name.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// Parse a store from dataset JSON (an object mapping names to records).
    pub fn from_json(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(json).map_err(|e| Error::DatasetParse {
                message: e.to_string(),
                source: Some(e),
            })?;

        let mut records = Vec::with_capacity(map.len());
        for (key, value) in map {
            let record: PersonaRecord =
                serde_json::from_value(value).map_err(|e| Error::InvalidRecord {
                    key: key.clone(),
                    message: e.to_string(),
                })?;

            // The key is the lookup name; a record disagreeing with its
            // own key would make lookups ambiguous.
            if record.name != key {
                return Err(Error::InvalidRecord {
                    key,
                    message: format!("'name' field '{}' does not match its key", record.name),
                });
            }

            records.push(record);
        }

        Self::from_records(records)
    }

    /// Load a store from a dataset file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::DatasetNotFound {
                path: path.to_path_buf(),
                source: Some(e),
            },
            _ => Error::IoRead {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let store = Self::from_json(&content)?;
        info!(path = %path.display(), personas = store.len(), "Dataset loaded");
        Ok(store)
    }

    /// Load the dataset bundled into the binary.
    pub fn bundled() -> Result<Self> {
        let store = Self::from_json(BUNDLED_DATASET)?;
        debug!(personas = store.len(), "Bundled dataset loaded");
        Ok(store)
    }

    // ─────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────

    /// Look up a record by its exact name.
    pub fn get(&self, name: &str) -> Result<&PersonaRecord> {
        self.find(name).ok_or_else(|| Error::unknown_persona(name))
    }

    /// Look up a record by its exact name, without treating absence as
    /// an error.
    pub fn find(&self, name: &str) -> Option<&PersonaRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Whether a persona with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All persona names, in dataset order.
    pub fn all_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Iterate records in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &PersonaRecord> {
        self.records.iter()
    }

    /// Number of personas in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no personas.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::types::{Arcana, DamageType, Stat};

    fn record(name: &str, level: i32, arcana: Arcana) -> PersonaRecord {
        PersonaRecord {
            name: name.to_string(),
            level,
            arcana,
            highest_stats: vec![Stat::Magic],
            resistances: vec![DamageType::Fire],
            weaknesses: vec![DamageType::Ice],
        }
    }

    #[test]
    fn test_from_records_preserves_order() {
        let store = PersonaStore::from_records(vec![
            record("Zorro", 20, Arcana::Magician),
            record("Arsene", 1, Arcana::Fool),
            record("Milady", 30, Arcana::Empress),
        ])
        .unwrap();

        assert_eq!(store.all_names(), vec!["Zorro", "Arsene", "Milady"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_from_records_rejects_duplicate_name() {
        let result = PersonaStore::from_records(vec![
            record("Pixie", 2, Arcana::Lovers),
            record("Pixie", 5, Arcana::Magician),
        ]);

        assert!(matches!(result, Err(Error::DuplicateName { name }) if name == "Pixie"));
    }

    #[test]
    fn test_from_records_rejects_empty_name() {
        let result = PersonaStore::from_records(vec![record("", 2, Arcana::Lovers)]);
        assert!(matches!(result, Err(Error::InvalidRecord { .. })));
    }

    #[test]
    fn test_from_records_rejects_bad_level() {
        let result = PersonaStore::from_records(vec![record("Pixie", 0, Arcana::Lovers)]);
        assert!(matches!(result, Err(Error::InvalidRecord { key, .. }) if key == "Pixie"));
    }

    #[test]
    fn test_empty_store_is_allowed() {
        let store = PersonaStore::from_records(Vec::new()).unwrap();
        assert!(store.is_empty());
        assert!(store.all_names().is_empty());
    }

    #[test]
    fn test_get_known_and_unknown() {
        let store =
            PersonaStore::from_records(vec![record("Jack Frost", 11, Arcana::Magician)]).unwrap();

        let found = store.get("Jack Frost").unwrap();
        assert_eq!(found.level, 11);

        let missing = store.get("jack frost");
        assert!(matches!(missing, Err(Error::UnknownPersona { name }) if name == "jack frost"));
    }

    #[test]
    fn test_find_does_not_error() {
        let store =
            PersonaStore::from_records(vec![record("Jack Frost", 11, Arcana::Magician)]).unwrap();

        assert!(store.find("Jack Frost").is_some());
        assert!(store.find("jack frost").is_none());
    }

    #[test]
    fn test_from_json_preserves_insertion_order() {
        // Keys deliberately not in alphabetical order.
        let json = r#"{
            "Zorro": { "name": "Zorro", "level": 20, "arcana": "Magician" },
            "Arsene": { "name": "Arsene", "level": 1, "arcana": "Fool" }
        }"#;

        let store = PersonaStore::from_json(json).unwrap();
        assert_eq!(store.all_names(), vec!["Zorro", "Arsene"]);
    }

    #[test]
    fn test_from_json_rejects_key_name_mismatch() {
        let json = r#"{
            "Arsene": { "name": "Pixie", "level": 1, "arcana": "Fool" }
        }"#;

        let result = PersonaStore::from_json(json);
        assert!(matches!(result, Err(Error::InvalidRecord { key, .. }) if key == "Arsene"));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let result = PersonaStore::from_json("[1, 2, 3]");
        assert!(matches!(result, Err(Error::DatasetParse { .. })));
    }

    #[test]
    fn test_from_path_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = PersonaStore::from_path(tmp.path().join("missing.json"));
        assert!(matches!(result, Err(Error::DatasetNotFound { .. })));
    }

    #[test]
    fn test_from_path_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("roster.json");
        std::fs::write(
            &path,
            r#"{ "Arsene": { "name": "Arsene", "level": 1, "arcana": "Fool" } }"#,
        )
        .unwrap();

        let store = PersonaStore::from_path(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.contains("Arsene"));
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let store = PersonaStore::bundled().unwrap();
        assert!(store.len() >= 50);
        assert!(store.contains("Arsene"));
        assert!(store.contains("Satanael"));
        // Bundled roster is ordered by level, lowest first.
        assert_eq!(store.all_names()[0], "Arsene");
    }

    #[test]
    fn test_bundled_psychokinesis_affinities() {
        // These two records carry the roster's only Psychokinesis
        // affinities; a misspelled variant here fails the whole load.
        let store = PersonaStore::bundled().unwrap();

        let hecatoncheires = store.get("Hecatoncheires").unwrap();
        assert!(hecatoncheires
            .weaknesses
            .contains(&DamageType::Psychokinesis));

        let kaiwan = store.get("Kaiwan").unwrap();
        assert!(kaiwan.resistances.contains(&DamageType::Psychokinesis));
    }
}
