//! Error types for Personle
//!
//! Provides structured error handling with:
//! - Numeric error codes for machine parsing
//! - User-friendly messages with suggestions
//! - Error context and chaining
//! - Exit codes for CLI

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, Error>;

/// Numeric error codes for machine parsing and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    // Configuration errors (1xx)
    ConfigNotFound = 100,
    ConfigParseError = 101,
    ConfigValidation = 102,

    // IO errors (2xx)
    IoRead = 200,
    IoWrite = 201,
    IoPermission = 202,
    IoNotFound = 203,

    // Dataset errors (3xx)
    DatasetNotFound = 300,
    DatasetParseError = 301,
    DuplicateName = 302,
    InvalidRecord = 303,

    // Guess errors (4xx)
    UnknownPersona = 400,
    DuplicateGuess = 401,
    SessionComplete = 402,

    // Selection errors (5xx)
    TargetsExhausted = 500,

    // Internal errors (9xx)
    InternalError = 900,
}

impl ErrorCode {
    /// Get the string code (e.g., "E100")
    pub fn as_str(&self) -> String {
        format!("E{}", *self as u16)
    }

    /// Get the exit code for CLI (maps to 1-125 range)
    pub fn exit_code(&self) -> i32 {
        match *self as u16 {
            100..=199 => 10, // Config errors
            200..=299 => 20, // IO errors
            300..=399 => 30, // Dataset errors
            400..=499 => 40, // Guess errors
            500..=599 => 50, // Selection errors
            900..=999 => 90, // Internal errors
            _ => 1,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for the game
#[derive(Error, Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────

    /// Configuration file not found
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration parse error
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String, field: Option<String> },

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────

    /// File read error
    #[error("Failed to read file: {}", .path.display())]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File write error
    #[error("Failed to write file: {}", .path.display())]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Dataset Errors
    // ─────────────────────────────────────────────────────────────

    /// Dataset file not found
    #[error("Dataset file not found: {}", .path.display())]
    DatasetNotFound {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Dataset parse error
    #[error("Failed to parse dataset: {message}")]
    DatasetParse {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Two records share the same persona name
    #[error("Duplicate persona name in dataset: {name}")]
    DuplicateName { name: String },

    /// A record failed structural validation
    #[error("Invalid dataset record {key}: {message}")]
    InvalidRecord { key: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Guess Errors
    // ─────────────────────────────────────────────────────────────

    /// Guessed name does not exist in the store
    #[error("Unknown persona: {name}")]
    UnknownPersona { name: String },

    /// Persona was already guessed this session
    #[error("Already guessed: {name}")]
    DuplicateGuess { name: String },

    /// Session already ended with a correct guess
    #[error("Round already solved: the answer was {target}")]
    SessionComplete { target: String },

    // ─────────────────────────────────────────────────────────────
    // Selection Errors
    // ─────────────────────────────────────────────────────────────

    /// Every persona in the pool has been excluded
    #[error("No personas left to pick from (pool of {pool_size} exhausted)")]
    TargetsExhausted { pool_size: usize },

    // ─────────────────────────────────────────────────────────────
    // Internal Errors
    // ─────────────────────────────────────────────────────────────

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    // ─────────────────────────────────────────────────────────────
    // Error Classification
    // ─────────────────────────────────────────────────────────────

    /// Get the numeric error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            Error::ConfigParse { .. } => ErrorCode::ConfigParseError,
            Error::ConfigValidation { .. } => ErrorCode::ConfigValidation,

            Error::IoRead { .. } => ErrorCode::IoRead,
            Error::IoWrite { .. } => ErrorCode::IoWrite,
            Error::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::IoNotFound,
                std::io::ErrorKind::PermissionDenied => ErrorCode::IoPermission,
                _ => ErrorCode::IoRead,
            },
            Error::Toml(_) => ErrorCode::ConfigParseError,

            Error::DatasetNotFound { .. } => ErrorCode::DatasetNotFound,
            Error::DatasetParse { .. } => ErrorCode::DatasetParseError,
            Error::DuplicateName { .. } => ErrorCode::DuplicateName,
            Error::InvalidRecord { .. } => ErrorCode::InvalidRecord,

            Error::UnknownPersona { .. } => ErrorCode::UnknownPersona,
            Error::DuplicateGuess { .. } => ErrorCode::DuplicateGuess,
            Error::SessionComplete { .. } => ErrorCode::SessionComplete,

            Error::TargetsExhausted { .. } => ErrorCode::TargetsExhausted,

            Error::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Check if the error leaves a running session intact (the player
    /// can simply try again)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::UnknownPersona { .. }
                | Error::DuplicateGuess { .. }
                | Error::SessionComplete { .. }
        )
    }

    /// Check if the error is fatal (the program should exit)
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. }
                | Error::ConfigParse { .. }
                | Error::ConfigValidation { .. }
                | Error::DatasetNotFound { .. }
                | Error::DatasetParse { .. }
                | Error::DuplicateName { .. }
                | Error::InvalidRecord { .. }
                | Error::Internal(_)
        )
    }

    /// Get the exit code for CLI
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    // ─────────────────────────────────────────────────────────────
    // User-Friendly Messages
    // ─────────────────────────────────────────────────────────────

    /// Get a user-friendly suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Error::ConfigNotFound { .. } => Some(
                "Run 'personle config init' to create a default configuration file."
            ),
            Error::ConfigParse { .. } => Some(
                "Check your configuration file syntax. Run 'personle config validate' to see details."
            ),
            Error::ConfigValidation { .. } => Some(
                "Review the configuration file and fix the invalid values. See documentation for valid options."
            ),

            Error::DatasetNotFound { .. } => Some(
                "Check the 'path' setting under [dataset] in your config, or pass --dataset with an existing file."
            ),
            Error::DatasetParse { .. } => Some(
                "The dataset must be a JSON object mapping persona names to records. Validate the file with a JSON linter."
            ),
            Error::DuplicateName { .. } => Some(
                "Each persona may appear only once in the dataset. Remove or rename the duplicate entry."
            ),
            Error::InvalidRecord { .. } => Some(
                "Each record's 'name' field must match its key in the dataset object."
            ),

            Error::UnknownPersona { .. } => Some(
                "Run 'personle compendium' to list every persona in the dataset."
            ),
            Error::DuplicateGuess { .. } => Some(
                "That persona was already guessed this round. Pick a different one."
            ),
            Error::SessionComplete { .. } => Some(
                "The round is over. Start a new one with 'personle play'."
            ),

            Error::TargetsExhausted { .. } => Some(
                "Every persona in the pool has been used. Load a larger dataset or clear the exclusions."
            ),

            _ => None,
        }
    }

    /// Format the error for terminal display with colors
    pub fn format_for_terminal(&self) -> String {
        let code = self.code();
        let suggestion = self.suggestion();

        let mut output = format!(
            "\x1b[31mError [{}]\x1b[0m: {}\n",
            code.as_str(),
            self
        );

        if let Some(hint) = suggestion {
            output.push_str(&format!("\n\x1b[33mHint\x1b[0m: {}\n", hint));
        }

        output
    }

    /// Format the error for logging (no colors)
    pub fn format_for_log(&self) -> String {
        let code = self.code();
        format!("[{}] {}", code.as_str(), self)
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Constructors (for ergonomic error creation)
// ─────────────────────────────────────────────────────────────────

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Error::ConfigNotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Create a config parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Error::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a config validation error
    pub fn config_validation(message: impl Into<String>) -> Self {
        Error::ConfigValidation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a config validation error with field name
    pub fn config_field_invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ConfigValidation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a dataset not found error
    pub fn dataset_not_found(path: impl Into<PathBuf>) -> Self {
        Error::DatasetNotFound {
            path: path.into(),
            source: None,
        }
    }

    /// Create a dataset parse error
    pub fn dataset_parse(message: impl Into<String>) -> Self {
        Error::DatasetParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Error::DuplicateName { name: name.into() }
    }

    /// Create an invalid record error
    pub fn invalid_record(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidRecord {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an unknown persona error
    pub fn unknown_persona(name: impl Into<String>) -> Self {
        Error::UnknownPersona { name: name.into() }
    }

    /// Create a duplicate guess error
    pub fn duplicate_guess(name: impl Into<String>) -> Self {
        Error::DuplicateGuess { name: name.into() }
    }

    /// Create a session complete error
    pub fn session_complete(target: impl Into<String>) -> Self {
        Error::SessionComplete {
            target: target.into(),
        }
    }

    /// Create an exhausted pool error
    pub fn targets_exhausted(pool_size: usize) -> Self {
        Error::TargetsExhausted { pool_size }
    }
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_format() {
        assert_eq!(ErrorCode::ConfigNotFound.as_str(), "E100");
        assert_eq!(ErrorCode::DatasetParseError.as_str(), "E301");
        assert_eq!(ErrorCode::UnknownPersona.as_str(), "E400");
        assert_eq!(ErrorCode::InternalError.as_str(), "E900");
    }

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(ErrorCode::ConfigNotFound.exit_code(), 10);
        assert_eq!(ErrorCode::IoRead.exit_code(), 20);
        assert_eq!(ErrorCode::DuplicateName.exit_code(), 30);
        assert_eq!(ErrorCode::DuplicateGuess.exit_code(), 40);
        assert_eq!(ErrorCode::TargetsExhausted.exit_code(), 50);
        assert_eq!(ErrorCode::InternalError.exit_code(), 90);
    }

    #[test]
    fn test_error_display() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/path/to/config.toml"),
            source: None,
        };
        assert!(err.to_string().contains("/path/to/config.toml"));

        let err = Error::duplicate_guess("Jack Frost");
        assert!(err.to_string().contains("Jack Frost"));
    }

    #[test]
    fn test_error_codes() {
        let err = Error::config_not_found("/test");
        assert_eq!(err.code(), ErrorCode::ConfigNotFound);

        let err = Error::duplicate_name("Pixie");
        assert_eq!(err.code(), ErrorCode::DuplicateName);

        let err = Error::unknown_persona("Nonexistent");
        assert_eq!(err.code(), ErrorCode::UnknownPersona);

        let err = Error::targets_exhausted(3);
        assert_eq!(err.code(), ErrorCode::TargetsExhausted);
    }

    #[test]
    fn test_error_recoverable() {
        assert!(Error::unknown_persona("Nonexistent").is_recoverable());
        assert!(Error::duplicate_guess("Pixie").is_recoverable());
        assert!(Error::session_complete("Arsene").is_recoverable());
        assert!(!Error::dataset_parse("bad json").is_recoverable());
        assert!(!Error::config_not_found("/test").is_recoverable());
    }

    #[test]
    fn test_error_fatal() {
        assert!(Error::config_not_found("/test").is_fatal());
        assert!(Error::duplicate_name("Pixie").is_fatal());
        assert!(Error::invalid_record("Pixie", "name mismatch").is_fatal());
        assert!(!Error::unknown_persona("Nonexistent").is_fatal());
        assert!(!Error::targets_exhausted(0).is_fatal());
    }

    #[test]
    fn test_error_suggestions() {
        let err = Error::config_not_found("/test");
        assert!(err.suggestion().is_some());
        assert!(err.suggestion().unwrap().contains("config init"));

        let err = Error::unknown_persona("Nonexistent");
        assert!(err.suggestion().is_some());
        assert!(err.suggestion().unwrap().contains("compendium"));
    }

    #[test]
    fn test_format_for_terminal() {
        let err = Error::config_not_found("/test/config.toml");
        let formatted = err.format_for_terminal();

        // Should contain error code
        assert!(formatted.contains("E100"));
        // Should contain ANSI color codes
        assert!(formatted.contains("\x1b[31m"));
        // Should contain hint
        assert!(formatted.contains("Hint"));
    }

    #[test]
    fn test_format_for_log() {
        let err = Error::duplicate_name("Pixie");
        let formatted = err.format_for_log();

        // Should contain error code
        assert!(formatted.contains("[E302]"));
        // Should NOT contain ANSI codes
        assert!(!formatted.contains("\x1b["));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        assert_eq!(err.code(), ErrorCode::IoNotFound);
    }
}
