//! Interactive terminal play.
//!
//! Drives a guess session over stdin/stdout: free play draws a random
//! target, daily mode replays the shared calendar target under a guess
//! limit. The compendium views for browsing the roster live here too.

use std::fmt;
use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::{Error, Result};
use crate::game::{
    daily_session, CategoricalFeedback, FeedbackRow, GuessSession, OrdinalFeedback, SetFeedback,
};
use crate::persona::{Arcana, PersonaRecord, PersonaStore};

const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

// ─────────────────────────────────────────────────────────────────
// Game Modes
// ─────────────────────────────────────────────────────────────────

/// Run a free-play round with unlimited guesses.
///
/// A seed makes the round reproducible; without one the target comes from
/// OS entropy.
pub fn run_free_play(store: &PersonaStore, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GuessSession::random(store, &mut rng)?;

    info!(personas = store.len(), seeded = seed.is_some(), "Free play round started");

    println!();
    println!("=== Personle ===");
    println!();
    println!("A hidden persona was drawn from {} candidates.", store.len());
    println!("Guess it by name. Type 'help' for commands.");

    play_loop(store, &mut session, None)
}

/// Run the daily round for the given date (today when omitted).
pub fn run_daily(store: &PersonaStore, date: Option<NaiveDate>, guess_limit: usize) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let mut session = daily_session(store, date)?;

    info!(date = %date, guess_limit, "Daily round started");

    println!();
    println!("=== Personle Daily ===");
    println!();
    println!("Daily challenge for {}.", date.format("%Y-%m-%d"));
    println!("You have {} guesses. Type 'help' for commands.", guess_limit);

    play_loop(store, &mut session, Some(guess_limit))
}

/// Read guesses until the round ends.
///
/// Unlimited when `guess_limit` is `None`; otherwise the target is
/// revealed once the limit is spent. Rejected guesses (unknown names,
/// repeats) never count against the limit.
fn play_loop(
    store: &PersonaStore,
    session: &mut GuessSession<'_>,
    guess_limit: Option<usize>,
) -> Result<()> {
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print_prompt(session.guess_count() + 1, guess_limit)?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            break;
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" => {
                // Daily targets stay hidden on quit so the round can be
                // picked up again later.
                if guess_limit.is_none() {
                    println!("The answer was {}{}{}.", BOLD, session.target().name, RESET);
                }
                break;
            }
            "help" | "?" => {
                print_help();
                continue;
            }
            "names" | "list" => {
                print_names(&session.available_names());
                continue;
            }
            _ => {}
        }

        if let Some(rest) = trimmed.strip_prefix("show ") {
            show_record(store, rest);
            continue;
        }

        let name = match resolve_name(store, trimmed) {
            Resolution::Match(name) => name,
            Resolution::Ambiguous(candidates) => {
                println!("  '{}' matches several personas: {}", trimmed, candidates.join(", "));
                continue;
            }
            Resolution::None => {
                println!("  No persona named '{}'. Try 'names' for the list.", trimmed);
                continue;
            }
        };

        match session.submit_guess(name) {
            Ok(outcome) => {
                render_grid(session);
                if outcome.is_correct {
                    let count = session.guess_count();
                    let noun = if count == 1 { "guess" } else { "guesses" };
                    println!();
                    println!(
                        "{}Correct!{} {} in {} {}.",
                        GREEN,
                        RESET,
                        session.target().name,
                        count,
                        noun
                    );
                    render_summary(session);
                    info!(guesses = count, solved = true, "Round finished");
                    break;
                }
            }
            Err(Error::DuplicateGuess { name }) => {
                println!("  Already guessed {}.", name);
                continue;
            }
            Err(Error::UnknownPersona { name }) => {
                println!("  No persona named '{}'.", name);
                continue;
            }
            Err(e) => return Err(e),
        }

        if let Some(limit) = guess_limit {
            if session.guess_count() >= limit {
                println!();
                println!(
                    "Out of guesses. The answer was {}{}{}.",
                    BOLD,
                    session.target().name,
                    RESET
                );
                render_summary(session);
                info!(guesses = session.guess_count(), solved = false, "Round finished");
                break;
            }
        }
    }

    Ok(())
}

fn print_prompt(next: usize, guess_limit: Option<usize>) -> Result<()> {
    match guess_limit {
        Some(limit) => print!("guess {}/{}> ", next, limit),
        None => print!("guess {}> ", next),
    }
    io::stdout().flush()?;
    Ok(())
}

fn print_help() {
    println!("  names          list personas not yet guessed");
    println!("  show <name>    look up a persona's attributes");
    println!("  quit           leave the round");
    println!("  Anything else is taken as a guess; unique prefixes work.");
}

fn print_names(names: &[&str]) {
    for chunk in names.chunks(4) {
        let row: Vec<String> = chunk.iter().map(|n| format!("{:<18}", n)).collect();
        println!("  {}", row.join(" ").trim_end());
    }
    println!("  ({} remaining)", names.len());
}

fn show_record(store: &PersonaStore, input: &str) {
    match resolve_name(store, input) {
        Resolution::Match(name) => {
            if let Some(record) = store.find(name) {
                print_record(record);
            }
        }
        Resolution::Ambiguous(candidates) => {
            println!("  '{}' matches several personas: {}", input, candidates.join(", "));
        }
        Resolution::None => {
            println!("  No persona named '{}'.", input);
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Name Resolution
// ─────────────────────────────────────────────────────────────────

/// Outcome of resolving player input against the roster.
enum Resolution<'s> {
    /// Input names exactly one persona.
    Match(&'s str),
    /// Input is a prefix shared by several personas.
    Ambiguous(Vec<&'s str>),
    /// Input matches nothing.
    None,
}

/// Resolve player input to a roster name, case-insensitively.
///
/// An exact name always wins; otherwise a prefix carried by exactly one
/// persona resolves to it. Resolution runs against the full roster, so an
/// already-guessed name still resolves and is then rejected as a repeat.
/// Empty input matches nothing.
fn resolve_name<'s>(store: &'s PersonaStore, input: &str) -> Resolution<'s> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Resolution::None;
    }

    let mut prefixed = Vec::new();
    for record in store.iter() {
        let lower = record.name.to_lowercase();
        if lower == needle {
            return Resolution::Match(&record.name);
        }
        if lower.starts_with(&needle) {
            prefixed.push(record.name.as_str());
        }
    }

    match prefixed.len() {
        0 => Resolution::None,
        1 => Resolution::Match(prefixed[0]),
        _ => Resolution::Ambiguous(prefixed),
    }
}

// ─────────────────────────────────────────────────────────────────
// Feedback Rendering
// ─────────────────────────────────────────────────────────────────

fn render_grid(session: &GuessSession<'_>) {
    println!();
    println!(
        "  {:<18} {:<10} {:<16} {:<6} {:<7} {}",
        "Persona", "Level", "Arcana", "Stats", "Resist", "Weak"
    );
    for (record, fb) in session.guesses().iter().zip(session.feedback()) {
        render_row(record, &fb);
    }
}

fn render_row(record: &PersonaRecord, fb: &FeedbackRow) {
    let level = format!("{} {}", record.level, fb.level.glyph());
    let arcana = format!("{} {}", record.arcana, fb.arcana.glyph());

    println!(
        "  {:<18} {} {} {} {} {}",
        record.name,
        cell(&level, 10, ordinal_color(fb.level)),
        cell(&arcana, 16, categorical_color(fb.arcana)),
        cell(fb.highest_stats.glyph(), 6, set_color(fb.highest_stats)),
        cell(fb.resistances.glyph(), 7, set_color(fb.resistances)),
        cell(fb.weaknesses.glyph(), 1, set_color(fb.weaknesses)),
    );
}

/// Compact share-style grid, one glyph row per guess.
fn render_summary(session: &GuessSession<'_>) {
    println!();
    for fb in session.feedback() {
        println!(
            "  {} {} {} {} {}",
            fb.level.glyph(),
            fb.arcana.glyph(),
            fb.highest_stats.glyph(),
            fb.resistances.glyph(),
            fb.weaknesses.glyph()
        );
    }
}

/// Pad to the column width first, then wrap in color, so the escape
/// codes never skew the alignment.
fn cell(text: &str, width: usize, color: &str) -> String {
    format!("{}{:<w$}{}", color, text, RESET, w = width)
}

fn ordinal_color(fb: OrdinalFeedback) -> &'static str {
    match fb {
        OrdinalFeedback::Exact => GREEN,
        OrdinalFeedback::Higher | OrdinalFeedback::Lower => YELLOW,
    }
}

fn categorical_color(fb: CategoricalFeedback) -> &'static str {
    match fb {
        CategoricalFeedback::Exact => GREEN,
        CategoricalFeedback::Miss => RED,
    }
}

fn set_color(fb: SetFeedback) -> &'static str {
    match fb {
        SetFeedback::Exact => GREEN,
        SetFeedback::Partial => YELLOW,
        SetFeedback::Miss => RED,
    }
}

// ─────────────────────────────────────────────────────────────────
// Compendium
// ─────────────────────────────────────────────────────────────────

/// Browse the roster: a single record by name, or a listing with an
/// optional arcana filter.
pub fn run_compendium(
    store: &PersonaStore,
    name: Option<&str>,
    arcana: Option<Arcana>,
) -> Result<()> {
    if let Some(input) = name {
        let record = match resolve_name(store, input) {
            Resolution::Match(name) => store.get(name)?,
            Resolution::Ambiguous(candidates) => {
                println!("'{}' matches several personas: {}", input, candidates.join(", "));
                return Ok(());
            }
            Resolution::None => return Err(Error::unknown_persona(input)),
        };
        print_record(record);
        return Ok(());
    }

    print_listing(store, arcana);
    Ok(())
}

fn print_record(record: &PersonaRecord) {
    println!();
    println!("=== {} ===", record.name);
    println!("  Level:         {}", record.level);
    println!("  Arcana:        {}", record.arcana);
    println!("  Highest stats: {}", join_names(&record.highest_stats));
    println!("  Resistances:   {}", join_names(&record.resistances));
    println!("  Weaknesses:    {}", join_names(&record.weaknesses));
}

fn print_listing(store: &PersonaStore, arcana: Option<Arcana>) {
    println!();
    println!("  {:<18} {:>5}  {}", "Persona", "Level", "Arcana");

    let mut shown = 0;
    for record in store.iter() {
        if let Some(filter) = arcana {
            if record.arcana != filter {
                continue;
            }
        }
        println!("  {:<18} {:>5}  {}", record.name, record.level, record.arcana);
        shown += 1;
    }

    println!();
    match arcana {
        Some(filter) => println!("  {} of {} personas ({} arcana)", shown, store.len(), filter),
        None => println!("  {} personas", shown),
    }
}

fn join_names<T: fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
