use super::{admissible_semantics_solver, preferred_semantics_solver, utils, ExtensionEnumerator};
use crate::{
    aa::{AAFramework, Argument, Semantics},
    utils::LabelType,
};
use anyhow::Result;
use log::debug;

/// A solver for the ideal semantics.
///
/// The ideal extension is the maximal admissible set included in every preferred extension.
/// It is computed in two phases: the preferred extensions are enumerated and intersected,
/// then the largest admissible set inside this intersection is selected.
///
/// The certificates for the acceptance queries are extensions.
pub struct IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the ideal semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aa::{AAFramework};
    /// # use crustaspic::utils::LabelType;
    /// # use crustaspic::solvers::{ExtensionEnumerator, IdealSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = IdealSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap();
    ///     println!("found the ideal extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for IdealSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        let preferred = preferred_semantics_solver::preferred_sets(self.af);
        debug!("intersecting {} preferred extension(s)", preferred.len());
        let sets =
            admissible_semantics_solver::maximal_admissible_within(self.af, &preferred, Semantics::PR)?;
        Ok(utils::id_sets_to_extensions(self.af, sets))
    }
}
