//! Solvers dedicated to Abstract Argumentation frameworks.
//!
//! Each semantics has its own solver implementing [`ExtensionEnumerator`];
//! acceptance queries come for free through [`CredulousAcceptanceComputer`] and [`SkepticalAcceptanceComputer`].
//! The [`extensions`] function dispatches on a [`Semantics`](crate::aa::Semantics) value.
//!
//! Apart from the grounded one, solvers rely on an exhaustive labelling search: they are exponential in the number of arguments.

mod admissible_semantics_solver;
pub use admissible_semantics_solver::AdmissibleSemanticsSolver;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod conflict_free_semantics_solver;
pub use conflict_free_semantics_solver::ConflictFreeSemanticsSolver;

mod eager_semantics_solver;
pub use eager_semantics_solver::EagerSemanticsSolver;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod ideal_semantics_solver;
pub use ideal_semantics_solver::IdealSemanticsSolver;

mod labelling;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod semi_stable_semantics_solver;
pub use semi_stable_semantics_solver::SemiStableSemanticsSolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;

mod utils;

use crate::{
    aa::{AAFramework, Argument, Semantics},
    utils::LabelType,
};
use anyhow::Result;

/// Builds the solver associated with a semantics.
///
/// # Example
///
/// ```
/// # use crustaspic::aa::{build_af, Semantics};
/// # use crustaspic::solvers::{self, SkepticalAcceptanceComputer};
/// let af = build_af("af", &["a", "b"], &[("a", "b")]).unwrap();
/// let mut solver = solvers::new_solver(&af, Semantics::PR);
/// let a = af.argument_set().get_argument(&"a").unwrap();
/// assert!(solver.is_skeptically_accepted(a).unwrap());
/// ```
pub fn new_solver<'a, T>(
    af: &'a AAFramework<T>,
    semantics: Semantics,
) -> Box<dyn ExtensionEnumerator<'a, T> + 'a>
where
    T: LabelType,
{
    match semantics {
        Semantics::CF => Box::new(ConflictFreeSemanticsSolver::new(af)),
        Semantics::AD => Box::new(AdmissibleSemanticsSolver::new(af)),
        Semantics::CO => Box::new(CompleteSemanticsSolver::new(af)),
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(PreferredSemanticsSolver::new(af)),
        Semantics::ST => Box::new(StableSemanticsSolver::new(af)),
        Semantics::SST => Box::new(SemiStableSemanticsSolver::new(af)),
        Semantics::ID => Box::new(IdealSemanticsSolver::new(af)),
        Semantics::EG => Box::new(EagerSemanticsSolver::new(af)),
    }
}

/// Computes the extensions of a framework under the given semantics.
///
/// The result is canonical: each extension is sorted by argument id, the list is sorted and has no duplicates.
/// Single-status semantics (grounded, ideal, eager) always return exactly one extension;
/// the stable semantics may return none.
///
/// # Example
///
/// ```
/// # use crustaspic::aa::{build_af, Semantics};
/// # use crustaspic::solvers;
/// let af = build_af("af", &["b", "c", "d"], &[("b", "c"), ("c", "d"), ("d", "c")]).unwrap();
/// let grounded = solvers::extensions(&af, Semantics::GR).unwrap();
/// let labels = grounded[0].iter().map(|a| *a.label()).collect::<Vec<&str>>();
/// assert_eq!(vec!["b", "d"], labels);
/// ```
pub fn extensions<T>(af: &AAFramework<T>, semantics: Semantics) -> Result<Vec<Vec<&Argument<T>>>>
where
    T: LabelType,
{
    new_solver(af, semantics).enumerate_extensions()
}
