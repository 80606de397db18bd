//! Budgeted storage for generated candidates.

use std::ops::ControlFlow;

use matchforge_core::TokenSequence;

use crate::scope::SolveScope;
use crate::termination::Termination;

/// Collects candidates in generation order until a termination fires.
///
/// [`push`](Self::push) checks the termination before storing anything, so a
/// budget of `n` mutations stores exactly `n` candidates when the strategies
/// can produce that many. Once terminated, the arena stays terminated and
/// every later push breaks immediately.
///
/// # Example
///
/// ```
/// use std::ops::ControlFlow;
/// use matchforge_core::tokenize;
/// use matchforge_solver::heuristic::MutationArena;
/// use matchforge_solver::termination::MutationCountTermination;
///
/// let mut arena = MutationArena::new(MutationCountTermination::new(2));
/// let seq = tokenize("1+1=2").unwrap();
///
/// assert_eq!(arena.push(seq.clone()), ControlFlow::Continue(()));
/// assert_eq!(arena.push(seq.clone()), ControlFlow::Continue(()));
/// assert_eq!(arena.push(seq), ControlFlow::Break(()));
/// assert_eq!(arena.len(), 2);
/// assert!(arena.is_terminated());
/// ```
#[derive(Debug)]
pub struct MutationArena<T> {
    mutations: Vec<TokenSequence>,
    scope: SolveScope,
    termination: T,
    terminated: bool,
}

impl<T: Termination> MutationArena<T> {
    pub fn new(termination: T) -> Self {
        Self {
            mutations: Vec::new(),
            scope: SolveScope::new(),
            termination,
            terminated: false,
        }
    }

    /// Stores `mutation`, or breaks if generation must stop.
    #[inline]
    pub fn push(&mut self, mutation: TokenSequence) -> ControlFlow<()> {
        if self.terminated || self.termination.is_terminated(&self.scope) {
            self.terminated = true;
            return ControlFlow::Break(());
        }
        self.mutations.push(mutation);
        self.scope.increment_mutation_count();
        ControlFlow::Continue(())
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// True once a push was refused.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn scope(&self) -> &SolveScope {
        &self.scope
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenSequence> {
        self.mutations.iter()
    }

    pub fn into_mutations(self) -> Vec<TokenSequence> {
        self.mutations
    }
}

impl MutationArena<()> {
    /// An arena without any limit.
    pub fn unbounded() -> Self {
        Self::new(())
    }
}
