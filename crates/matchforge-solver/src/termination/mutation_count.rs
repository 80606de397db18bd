//! Mutation budget.

use super::Termination;
use crate::scope::SolveScope;

/// Terminates once `limit` candidates have been generated.
///
/// The budget is shared by every tokenization variant of an equation, so a
/// first variant that exhausts it leaves nothing for the second.
#[derive(Debug, Clone)]
pub struct MutationCountTermination {
    limit: usize,
}

impl MutationCountTermination {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Termination for MutationCountTermination {
    fn is_terminated(&self, scope: &SolveScope) -> bool {
        scope.mutation_count() >= self.limit
    }
}
