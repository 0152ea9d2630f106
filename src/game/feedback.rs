//! Pure guess evaluation.
//!
//! Compares a guessed persona against the hidden target one attribute at a
//! time and reports, per attribute, how close the guess landed. Evaluation
//! never fails and never depends on session state.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::persona::PersonaRecord;

// ─────────────────────────────────────────────────────────────────
// Per-Attribute Feedback
// ─────────────────────────────────────────────────────────────────

/// Feedback for an attribute that either matches or doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoricalFeedback {
    /// Guess and target have the same value.
    Exact,
    /// Values differ.
    Miss,
}

impl CategoricalFeedback {
    pub fn compare<T: PartialEq>(guess: &T, target: &T) -> Self {
        if guess == target {
            CategoricalFeedback::Exact
        } else {
            CategoricalFeedback::Miss
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoricalFeedback::Exact => "exact",
            CategoricalFeedback::Miss => "miss",
        }
    }

    /// Single-character marker for the feedback table.
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoricalFeedback::Exact => "✓",
            CategoricalFeedback::Miss => "✗",
        }
    }
}

impl fmt::Display for CategoricalFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Feedback for an ordered attribute, pointing from the guess towards
/// the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrdinalFeedback {
    /// Guess and target have the same value.
    Exact,
    /// The target's value is higher than the guessed value.
    Higher,
    /// The target's value is lower than the guessed value.
    Lower,
}

impl OrdinalFeedback {
    pub fn compare<T: Ord>(guess: T, target: T) -> Self {
        match target.cmp(&guess) {
            std::cmp::Ordering::Equal => OrdinalFeedback::Exact,
            std::cmp::Ordering::Greater => OrdinalFeedback::Higher,
            std::cmp::Ordering::Less => OrdinalFeedback::Lower,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrdinalFeedback::Exact => "exact",
            OrdinalFeedback::Higher => "higher",
            OrdinalFeedback::Lower => "lower",
        }
    }

    /// Single-character marker for the feedback table.
    pub fn glyph(&self) -> &'static str {
        match self {
            OrdinalFeedback::Exact => "✓",
            OrdinalFeedback::Higher => "↑",
            OrdinalFeedback::Lower => "↓",
        }
    }
}

impl fmt::Display for OrdinalFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Feedback for a set-valued attribute, compared ignoring order and
/// repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetFeedback {
    /// Both sides hold exactly the same set (two empty sets included).
    Exact,
    /// The sides overlap but are not equal.
    Partial,
    /// The sides share no elements.
    Miss,
}

impl SetFeedback {
    pub fn compare<T: Eq + Hash>(guess: &[T], target: &[T]) -> Self {
        let guess: HashSet<&T> = guess.iter().collect();
        let target: HashSet<&T> = target.iter().collect();

        if guess == target {
            SetFeedback::Exact
        } else if guess.is_disjoint(&target) {
            SetFeedback::Miss
        } else {
            SetFeedback::Partial
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SetFeedback::Exact => "exact",
            SetFeedback::Partial => "partial",
            SetFeedback::Miss => "miss",
        }
    }

    /// Single-character marker for the feedback table.
    pub fn glyph(&self) -> &'static str {
        match self {
            SetFeedback::Exact => "✓",
            SetFeedback::Partial => "~",
            SetFeedback::Miss => "✗",
        }
    }
}

impl fmt::Display for SetFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─────────────────────────────────────────────────────────────────
// Feedback Row
// ─────────────────────────────────────────────────────────────────

/// One evaluated guess: per-attribute feedback against the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRow {
    /// Name of the guessed persona.
    pub guess: String,

    /// Level, relative to the target.
    pub level: OrdinalFeedback,

    /// Arcana match.
    pub arcana: CategoricalFeedback,

    /// Highest-stat set overlap.
    pub highest_stats: SetFeedback,

    /// Resistance set overlap.
    pub resistances: SetFeedback,

    /// Weakness set overlap.
    pub weaknesses: SetFeedback,
}

impl FeedbackRow {
    /// Whether every attribute slot came back exact.
    ///
    /// Guessing the target always yields an all-exact row. The converse
    /// does not hold: two distinct personas may share every compared
    /// attribute.
    pub fn is_all_exact(&self) -> bool {
        self.level == OrdinalFeedback::Exact
            && self.arcana == CategoricalFeedback::Exact
            && self.highest_stats == SetFeedback::Exact
            && self.resistances == SetFeedback::Exact
            && self.weaknesses == SetFeedback::Exact
    }
}

// ─────────────────────────────────────────────────────────────────
// Evaluation
// ─────────────────────────────────────────────────────────────────

/// Evaluate a guess against the target, attribute by attribute.
pub fn evaluate(guess: &PersonaRecord, target: &PersonaRecord) -> FeedbackRow {
    FeedbackRow {
        guess: guess.name.clone(),
        level: OrdinalFeedback::compare(guess.level, target.level),
        arcana: CategoricalFeedback::compare(&guess.arcana, &target.arcana),
        highest_stats: SetFeedback::compare(&guess.highest_stats, &target.highest_stats),
        resistances: SetFeedback::compare(&guess.resistances, &target.resistances),
        weaknesses: SetFeedback::compare(&guess.weaknesses, &target.weaknesses),
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
