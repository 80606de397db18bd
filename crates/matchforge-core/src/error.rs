//! Error types for MatchForge

use thiserror::Error;

/// Main error type for MatchForge operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchForgeError {
    /// Invalid solver or rule configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A display mode that was never registered
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// Input contains a character that starts no known glyph
    #[error("Unknown glyph '{glyph}' at position {position}")]
    UnknownGlyph { glyph: char, position: usize },
}

/// Result type alias for MatchForge operations
pub type Result<T> = std::result::Result<T, MatchForgeError>;
