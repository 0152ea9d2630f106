//! Persona dataset: the roster of guessable personas and their attributes.
//!
//! The store is loaded once (bundled data or a user-supplied JSON file) and
//! shared read-only with every game session.

pub mod store;
pub mod types;

pub use store::PersonaStore;
pub use types::{Arcana, DamageType, PersonaRecord, Stat};
