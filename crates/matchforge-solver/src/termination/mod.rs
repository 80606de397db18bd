//! Termination conditions for candidate generation.

mod composite;
mod mutation_count;
mod time;

use std::fmt::Debug;

use crate::scope::SolveScope;

pub use composite::OrTermination;
pub use mutation_count::MutationCountTermination;
pub use time::TimeTermination;

/// Decides when generation must stop.
pub trait Termination: Send + Debug {
    /// Returns true if no further candidate may be generated.
    fn is_terminated(&self, scope: &SolveScope) -> bool;
}

/// Never terminates.
impl Termination for () {
    fn is_terminated(&self, _scope: &SolveScope) -> bool {
        false
    }
}

/// An absent condition never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &SolveScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}
