//! Composite termination.

use super::Termination;
use crate::scope::SolveScope;

/// Terminates when ANY of a tuple of terminations does.
///
/// ```
/// use matchforge_solver::termination::{
///     MutationCountTermination, OrTermination, TimeTermination,
/// };
///
/// let termination = OrTermination::new((
///     MutationCountTermination::new(10_000),
///     Some(TimeTermination::millis(250)),
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn is_terminated(&self, scope: &SolveScope) -> bool {
                $((self.0).$idx.is_terminated(scope))||+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
