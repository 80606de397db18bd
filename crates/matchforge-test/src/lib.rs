//! Shared test fixtures for MatchForge crates.
//!
//! - [`puzzles`] - equations with their known solve outcomes
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! matchforge-test = { workspace = true }
//! ```
//!
//! Then iterate the fixtures you need:
//!
//! ```ignore
//! use matchforge_test::puzzles::STANDARD_ONE_STICK;
//!
//! for puzzle in STANDARD_ONE_STICK {
//!     let result = solver_for(puzzle.config()).solve(puzzle.equation)?;
//!     assert_eq!(result.solutions, puzzle.solutions);
//! }
//! ```

pub mod puzzles;

pub use puzzles::Puzzle;
