//! Core types for the persona dataset.
//!
//! A persona record carries the attributes the game compares guesses
//! against: level, arcana, strongest stats, resistances, and weaknesses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Arcana
// ─────────────────────────────────────────────────────────────────

/// The tarot arcana a persona belongs to.
///
/// Serialized under its plain variant name ("Fool", "Magician", ...),
/// matching the dataset format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Fool,
    Magician,
    Priestess,
    Empress,
    Emperor,
    Hierophant,
    Lovers,
    Chariot,
    Justice,
    Hermit,
    Fortune,
    Strength,
    Hanged,
    Death,
    Temperance,
    Devil,
    Tower,
    Star,
    Moon,
    Sun,
    Judgement,
    Faith,
    Councillor,
}

impl Arcana {
    /// Canonical display name, identical to the dataset spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Arcana::Fool => "Fool",
            Arcana::Magician => "Magician",
            Arcana::Priestess => "Priestess",
            Arcana::Empress => "Empress",
            Arcana::Emperor => "Emperor",
            Arcana::Hierophant => "Hierophant",
            Arcana::Lovers => "Lovers",
            Arcana::Chariot => "Chariot",
            Arcana::Justice => "Justice",
            Arcana::Hermit => "Hermit",
            Arcana::Fortune => "Fortune",
            Arcana::Strength => "Strength",
            Arcana::Hanged => "Hanged",
            Arcana::Death => "Death",
            Arcana::Temperance => "Temperance",
            Arcana::Devil => "Devil",
            Arcana::Tower => "Tower",
            Arcana::Star => "Star",
            Arcana::Moon => "Moon",
            Arcana::Sun => "Sun",
            Arcana::Judgement => "Judgement",
            Arcana::Faith => "Faith",
            Arcana::Councillor => "Councillor",
        }
    }

    /// All arcana in tarot order.
    pub fn all() -> &'static [Arcana] {
        &[
            Arcana::Fool,
            Arcana::Magician,
            Arcana::Priestess,
            Arcana::Empress,
            Arcana::Emperor,
            Arcana::Hierophant,
            Arcana::Lovers,
            Arcana::Chariot,
            Arcana::Justice,
            Arcana::Hermit,
            Arcana::Fortune,
            Arcana::Strength,
            Arcana::Hanged,
            Arcana::Death,
            Arcana::Temperance,
            Arcana::Devil,
            Arcana::Tower,
            Arcana::Star,
            Arcana::Moon,
            Arcana::Sun,
            Arcana::Judgement,
            Arcana::Faith,
            Arcana::Councillor,
        ]
    }
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Arcana {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arcana::all()
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let valid: Vec<&str> = Arcana::all().iter().map(|a| a.name()).collect();
                format!("Unknown arcana '{}'. Valid: {}", s, valid.join(", "))
            })
    }
}

// ─────────────────────────────────────────────────────────────────
// Stat
// ─────────────────────────────────────────────────────────────────

/// One of the five base stats a persona can excel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Strength,
    Magic,
    Endurance,
    Agility,
    Luck,
}

impl Stat {
    pub fn name(&self) -> &'static str {
        match self {
            Stat::Strength => "Strength",
            Stat::Magic => "Magic",
            Stat::Endurance => "Endurance",
            Stat::Agility => "Agility",
            Stat::Luck => "Luck",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ─────────────────────────────────────────────────────────────────
// Damage Type
// ─────────────────────────────────────────────────────────────────

/// A damage affinity a persona can resist or be weak to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Phys,
    Gun,
    Fire,
    Ice,
    Electric,
    Wind,
    Psychokinesis,
    Nuclear,
    Bless,
    Curse,
    Almighty,
}

impl DamageType {
    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Phys => "Phys",
            DamageType::Gun => "Gun",
            DamageType::Fire => "Fire",
            DamageType::Ice => "Ice",
            DamageType::Electric => "Electric",
            DamageType::Wind => "Wind",
            DamageType::Psychokinesis => "Psychokinesis",
            DamageType::Nuclear => "Nuclear",
            DamageType::Bless => "Bless",
            DamageType::Curse => "Curse",
            DamageType::Almighty => "Almighty",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ─────────────────────────────────────────────────────────────────
// Persona Record
// ─────────────────────────────────────────────────────────────────

/// One guessable persona, deserialized from the JSON dataset.
///
/// The dataset is a JSON object mapping each persona's name to its
/// record; `name` repeats the key so a record is self-contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaRecord {
    /// Unique display name, also the record's key in the dataset.
    pub name: String,

    /// Base level, compared as an ordinal attribute.
    pub level: i32,

    /// Tarot arcana, compared categorically.
    pub arcana: Arcana,

    /// Stats tied for the persona's highest base value.
    #[serde(default)]
    pub highest_stats: Vec<Stat>,

    /// Damage types the persona resists, drains, or repels.
    #[serde(default)]
    pub resistances: Vec<DamageType>,

    /// Damage types the persona takes extra damage from.
    #[serde(default)]
    pub weaknesses: Vec<DamageType>,
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
