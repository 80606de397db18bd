//! Candidate generation: edit sites, the budgeted arena and the strategies
//! that combine them.

pub mod arena;
pub mod site;
pub mod strategy;

pub use arena::MutationArena;
pub use site::{insertions, rewrites, Site};
pub use strategy::MutationStrategy;
