//! Game engine: sessions and guess evaluation.
//!
//! Everything here is pure with respect to the store: a session borrows
//! the roster, evaluates guesses against a fixed target, and reports
//! per-attribute feedback. Randomness is always injected by the caller.

pub mod daily;
pub mod feedback;
pub mod session;

pub use daily::{daily_seed, daily_session, daily_target, MAX_DAILY_GUESSES};
pub use feedback::{evaluate, CategoricalFeedback, FeedbackRow, OrdinalFeedback, SetFeedback};
pub use session::{pick_random_target, GuessOutcome, GuessSession, SessionState};
