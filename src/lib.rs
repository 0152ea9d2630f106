//! Personle: a persona guessing game.
//!
//! The library carries the whole game core: the persona roster, guess
//! sessions with per-attribute feedback, and the shared daily challenge.
//! The `personle` binary is a thin terminal front end over these modules.

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod persona;
pub mod play;
pub mod version;

pub use error::{Error, Result};
pub use game::{evaluate, FeedbackRow, GuessOutcome, GuessSession};
pub use persona::{PersonaRecord, PersonaStore};
