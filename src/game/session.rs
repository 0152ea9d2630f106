//! Guess session lifecycle.
//!
//! A session owns one round: a hidden target drawn from the store, the
//! guesses submitted so far, and a transient selection. Sessions only
//! borrow the store; nothing about a round ever mutates the roster.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::persona::{PersonaRecord, PersonaStore};

use super::feedback::{evaluate, FeedbackRow};

// ─────────────────────────────────────────────────────────────────
// Session State
// ─────────────────────────────────────────────────────────────────

/// Lifecycle state of a guess session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Round in progress, guesses accepted.
    Guessing,
    /// Target was guessed; no further guesses accepted.
    Solved,
}

// ─────────────────────────────────────────────────────────────────
// Guess Outcome
// ─────────────────────────────────────────────────────────────────

/// Result of one accepted guess.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    /// Whether the guessed persona is the target.
    pub is_correct: bool,

    /// Attribute-level feedback for this guess.
    pub feedback: FeedbackRow,
}

// ─────────────────────────────────────────────────────────────────
// Guess Session
// ─────────────────────────────────────────────────────────────────

/// One round of the guessing game against a fixed target.
pub struct GuessSession<'a> {
    /// Store all lookups go through.
    store: &'a PersonaStore,

    /// The persona the player is trying to identify.
    target: &'a PersonaRecord,

    /// Accepted guesses in submission order. The round is solved exactly
    /// when the last entry is the target.
    guesses: Vec<&'a PersonaRecord>,

    /// Names guessed so far, for duplicate checks.
    guessed_names: HashSet<&'a str>,

    /// Candidate highlighted by the front end. UI state only; never
    /// consulted by game logic.
    selected: Option<&'a PersonaRecord>,

    /// Current lifecycle state.
    state: SessionState,
}

impl<'a> GuessSession<'a> {
    // ─────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────

    /// Start a round with an explicitly chosen target.
    ///
    /// The target must exist in the store; the caller picks it by name so
    /// a session can never hold a record the store doesn't know about.
    pub fn start(store: &'a PersonaStore, target_name: &str) -> Result<Self> {
        let target = store.get(target_name)?;

        Ok(Self {
            store,
            target,
            guesses: Vec::new(),
            guessed_names: HashSet::new(),
            selected: None,
            state: SessionState::Guessing,
        })
    }

    /// Start a round with a uniformly random target.
    pub fn random<R: Rng + ?Sized>(store: &'a PersonaStore, rng: &mut R) -> Result<Self> {
        let target = pick_random_target(store, &HashSet::new(), rng)?;
        Self::start(store, &target.name)
    }

    // ─────────────────────────────────────────────────────────────
    // Guessing
    // ─────────────────────────────────────────────────────────────

    /// Submit a guess by exact persona name.
    ///
    /// Rejected guesses (unknown name, repeat, round already solved) leave
    /// the session untouched; submitting the same bad guess twice fails
    /// identically both times.
    pub fn submit_guess(&mut self, name: &str) -> Result<GuessOutcome> {
        if self.state == SessionState::Solved {
            return Err(Error::session_complete(self.target.name.clone()));
        }

        let record = self.store.get(name)?;

        if self.guessed_names.contains(record.name.as_str()) {
            return Err(Error::duplicate_guess(record.name.clone()));
        }

        let feedback = evaluate(record, self.target);
        let is_correct = record.name == self.target.name;

        self.guessed_names.insert(record.name.as_str());
        self.guesses.push(record);
        self.selected = None;

        if is_correct {
            self.state = SessionState::Solved;
        }

        debug!(
            guess = %record.name,
            correct = is_correct,
            total = self.guesses.len(),
            "Guess evaluated"
        );

        Ok(GuessOutcome {
            is_correct,
            feedback,
        })
    }

    // ─────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────

    /// Highlight a candidate without guessing it.
    pub fn select(&mut self, name: &str) -> Result<()> {
        self.selected = Some(self.store.get(name)?);
        Ok(())
    }

    /// The currently highlighted candidate, if any. Cleared by an
    /// accepted guess.
    pub fn selected(&self) -> Option<&PersonaRecord> {
        self.selected
    }

    /// Drop the current highlight.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ─────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────

    /// Names not yet guessed this round, in store order.
    ///
    /// This is the one place the "already guessed" filter lives; front
    /// ends present this list instead of filtering themselves.
    pub fn available_names(&self) -> Vec<&str> {
        self.store
            .all_names()
            .into_iter()
            .filter(|name| !self.guessed_names.contains(*name))
            .collect()
    }

    /// Feedback for every guess so far, in submission order.
    ///
    /// Recomputed from the records on each call; feedback is derived
    /// state, never stored.
    pub fn feedback(&self) -> Vec<FeedbackRow> {
        self.guesses
            .iter()
            .map(|guess| evaluate(guess, self.target))
            .collect()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the target has been guessed.
    pub fn is_solved(&self) -> bool {
        self.state == SessionState::Solved
    }

    /// The hidden target. Callers decide when to reveal it.
    pub fn target(&self) -> &PersonaRecord {
        self.target
    }

    /// Accepted guesses in submission order.
    pub fn guesses(&self) -> &[&'a PersonaRecord] {
        &self.guesses
    }

    /// Number of accepted guesses.
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

// ─────────────────────────────────────────────────────────────────
// Target Selection
// ─────────────────────────────────────────────────────────────────

/// Pick a uniformly random target from the store, skipping excluded names.
///
/// The RNG is passed in so callers control determinism: a seeded RNG gives
/// reproducible rounds, the daily mode derives its seed from the date.
pub fn pick_random_target<'a, R: Rng + ?Sized>(
    store: &'a PersonaStore,
    excluded: &HashSet<&str>,
    rng: &mut R,
) -> Result<&'a PersonaRecord> {
    let candidates: Vec<&PersonaRecord> = store
        .iter()
        .filter(|r| !excluded.contains(r.name.as_str()))
        .collect();

    debug!(pool = candidates.len(), "Selecting random target");

    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| Error::targets_exhausted(store.len()))
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
