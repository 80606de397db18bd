//! MatchForge Core - Symbols, tokenization and stick rules
//!
//! This crate provides the fundamental vocabulary of MatchForge:
//! - [`Symbol`], the closed alphabet of matchstick glyphs
//! - [`TokenSequence`] and blank-stripping normalization
//! - The tokenizer, including the ambiguous readings of runs of ones
//! - [`RuleSet`] tables per display mode and the [`RuleRegistry`]

pub mod error;
pub mod rules;
pub mod sequence;
pub mod symbol;
pub mod tokenizer;

pub use error::{MatchForgeError, Result};
pub use rules::{
    handwritten_rules, standard_rules, RuleRegistry, RuleSet, RuleSetBuilder, RuleTable,
    StickCount,
};
pub use sequence::{normalize, TokenSequence};
pub use symbol::Symbol;
pub use tokenizer::{canonicalize, tokenize, tokenize_variants};
