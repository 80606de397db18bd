//! Event system for solver monitoring.
//!
//! Listeners registered on a [`SolverEventSupport`] are told when a solve
//! starts, after each tokenization variant has been expanded, and when the
//! result is ready. They are called synchronously in registration order.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use matchforge_solver::event::{SolverEventListener, SolverEventSupport};
//! use matchforge_solver::SolveResult;
//!
//! #[derive(Debug)]
//! struct MyListener;
//! impl SolverEventListener for MyListener {
//!     fn on_solving_ended(&self, result: &SolveResult) {
//!         println!("{} solutions", result.solutions.len());
//!     }
//! }
//!
//! let mut support = SolverEventSupport::new();
//! support.add_listener(Arc::new(MyListener));
//! assert!(support.has_listeners());
//! ```

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use matchforge_core::TokenSequence;

use crate::result::SolveResult;

/// Listener for solve progress.
pub trait SolverEventListener: Send + Sync + Debug {
    /// Called before tokenization with the raw input.
    fn on_solving_started(&self, _equation: &str) {}

    /// Called once a variant's candidates are generated.
    ///
    /// `mutations` is the running total across variants so far.
    fn on_variant_generated(&self, _index: usize, _variant: &TokenSequence, _mutations: usize) {}

    /// Called with the final result.
    fn on_solving_ended(&self, _result: &SolveResult) {}
}

/// Central event broadcaster for solver events.
#[derive(Default)]
pub struct SolverEventSupport {
    listeners: Vec<Arc<dyn SolverEventListener>>,
}

impl SolverEventSupport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&mut self, listener: Arc<dyn SolverEventListener>) {
        self.listeners.push(listener);
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn fire_solving_started(&self, equation: &str) {
        for listener in &self.listeners {
            listener.on_solving_started(equation);
        }
    }

    pub fn fire_variant_generated(&self, index: usize, variant: &TokenSequence, mutations: usize) {
        for listener in &self.listeners {
            listener.on_variant_generated(index, variant, mutations);
        }
    }

    pub fn fire_solving_ended(&self, result: &SolveResult) {
        for listener in &self.listeners {
            listener.on_solving_ended(result);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl Debug for SolverEventSupport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverEventSupport")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A listener that counts events, for tests and diagnostics.
#[derive(Debug, Default)]
pub struct CountingEventListener {
    started: AtomicUsize,
    variants: AtomicUsize,
    ended: AtomicUsize,
    last_mutations: AtomicUsize,
}

impl CountingEventListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started_count(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn variant_count(&self) -> usize {
        self.variants.load(Ordering::SeqCst)
    }

    pub fn ended_count(&self) -> usize {
        self.ended.load(Ordering::SeqCst)
    }

    /// Running mutation total reported by the latest variant event.
    pub fn last_mutations(&self) -> usize {
        self.last_mutations.load(Ordering::SeqCst)
    }
}

impl SolverEventListener for CountingEventListener {
    fn on_solving_started(&self, _equation: &str) {
        self.started.fetch_add(1, Ordering::SeqCst);
    }

    fn on_variant_generated(&self, _index: usize, _variant: &TokenSequence, mutations: usize) {
        self.variants.fetch_add(1, Ordering::SeqCst);
        self.last_mutations.store(mutations, Ordering::SeqCst);
    }

    fn on_solving_ended(&self, _result: &SolveResult) {
        self.ended.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
