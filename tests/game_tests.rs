//! End-to-end tests of the game core
//!
//! Exercises the library the way a front end would: load a roster, run
//! sessions, and check the feedback players see.

mod common;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use personle::game::{daily_target, evaluate, CategoricalFeedback, GuessSession, OrdinalFeedback};
use personle::persona::PersonaStore;
use personle::Error;

use common::{DatasetFixture, SOLO_DATASET, TRIO_DATASET};

fn trio_store() -> PersonaStore {
    let fixture = DatasetFixture::new(TRIO_DATASET);
    PersonaStore::from_path(fixture.path()).unwrap()
}

// ─────────────────────────────────────────────────────────────────
// Round Play
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_round_with_wrong_then_right_guess() {
    let store = trio_store();
    let mut session = GuessSession::start(&store, "Pixie").unwrap();

    // Eligor sits well above the level-2 target and on another arcana.
    let outcome = session.submit_guess("Eligor").unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(outcome.feedback.level, OrdinalFeedback::Lower);
    assert_eq!(outcome.feedback.arcana, CategoricalFeedback::Miss);
    assert!(!session.is_solved());

    let outcome = session.submit_guess("Pixie").unwrap();
    assert!(outcome.is_correct);
    assert!(outcome.feedback.is_all_exact());
    assert!(session.is_solved());
    assert_eq!(session.guess_count(), 2);
}

#[test]
fn test_rejected_guesses_cost_nothing() {
    let store = trio_store();
    let mut session = GuessSession::start(&store, "Arsene").unwrap();
    session.submit_guess("Pixie").unwrap();

    let unknown = session.submit_guess("Unknown Name");
    assert!(matches!(unknown, Err(Error::UnknownPersona { .. })));
    let repeat = session.submit_guess("Pixie");
    assert!(matches!(repeat, Err(Error::DuplicateGuess { .. })));

    assert_eq!(session.guess_count(), 1);
    assert_eq!(session.available_names().len(), 2);
}

#[test]
fn test_solved_round_names_the_target() {
    let store = trio_store();
    let mut session = GuessSession::start(&store, "Eligor").unwrap();
    session.submit_guess("Eligor").unwrap();

    match session.submit_guess("Arsene") {
        Err(Error::SessionComplete { target }) => assert_eq!(target, "Eligor"),
        other => panic!("expected SessionComplete, got {:?}", other),
    }
}

#[test]
fn test_available_names_shrink_with_guesses() {
    let store = PersonaStore::bundled().unwrap();
    let mut session = GuessSession::start(&store, "Jack Frost").unwrap();
    session.submit_guess("Arsene").unwrap();

    let names = session.available_names();
    assert_eq!(names.len(), store.len() - 1);
    assert!(!names.contains(&"Arsene"));
    assert!(names.contains(&"Jack Frost"));
}

// ─────────────────────────────────────────────────────────────────
// Bundled Roster
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_bundled_roster_is_ordered_and_complete() {
    let store = PersonaStore::bundled().unwrap();
    assert!(store.len() >= 50);
    assert!(store.contains("Jack Frost"));

    let names = store.all_names();
    assert_eq!(names.first(), Some(&"Arsene"));
    assert_eq!(names.len(), store.len());
}

#[test]
fn test_self_evaluation_is_all_exact_across_bundled_roster() {
    let store = PersonaStore::bundled().unwrap();
    for record in store.iter() {
        let row = evaluate(record, record);
        assert!(row.is_all_exact(), "{} should match itself", record.name);
    }
}

// ─────────────────────────────────────────────────────────────────
// Target Selection
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_daily_target_is_stable_for_a_date() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let fixture = DatasetFixture::new(SOLO_DATASET);
    let solo = PersonaStore::from_path(fixture.path()).unwrap();
    assert_eq!(daily_target(&solo, date).unwrap().name, "Yatagarasu");

    // Same date, independent loads, same target.
    let first = PersonaStore::bundled().unwrap();
    let second = PersonaStore::bundled().unwrap();
    assert_eq!(
        daily_target(&first, date).unwrap().name,
        daily_target(&second, date).unwrap().name
    );
}

#[test]
fn test_seeded_rounds_are_reproducible() {
    let store = PersonaStore::bundled().unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    let first = GuessSession::random(&store, &mut rng).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let second = GuessSession::random(&store, &mut rng).unwrap();

    assert_eq!(first.target().name, second.target().name);
}

// ─────────────────────────────────────────────────────────────────
// Dataset Errors
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_mismatched_key_rejected_on_load() {
    let fixture =
        DatasetFixture::new(r#"{ "Arsene": { "name": "Pixie", "level": 1, "arcana": "Fool" } }"#);
    let err = PersonaStore::from_path(fixture.path_str()).unwrap_err();
    assert!(matches!(err, Error::InvalidRecord { .. }));
}

#[test]
fn test_error_reporting_surface() {
    let store = trio_store();
    let err = store.get("Nonexistent").unwrap_err();

    assert!(err.format_for_log().contains("E400"));
    assert!(err.suggestion().is_some());
    assert!(err.is_recoverable());
}
