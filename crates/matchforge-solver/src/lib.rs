//! MatchForge Solver Engine
//!
//! This crate turns an equation into candidate equations and sorts them:
//! - Mutation strategies built from edit-site generators
//! - A budgeted mutation arena and termination conditions
//! - The [`Solver`], which filters, evaluates and de-duplicates candidates
//! - Statistics and an event system for monitoring

pub mod event;
pub mod heuristic;
pub mod result;
pub mod scope;
pub mod solver;
pub mod statistics;
pub mod termination;

#[cfg(test)]
mod solver_tests;

pub use event::{CountingEventListener, SolverEventListener, SolverEventSupport};
pub use heuristic::{MutationArena, MutationStrategy};
pub use result::SolveResult;
pub use scope::SolveScope;
pub use solver::Solver;
pub use statistics::{SolveStatistics, StatisticsCollector, StrategyStatistics};
pub use termination::{MutationCountTermination, OrTermination, Termination, TimeTermination};
