use super::{admissible_semantics_solver, semi_stable_semantics_solver, utils, ExtensionEnumerator};
use crate::{
    aa::{AAFramework, Argument, Semantics},
    utils::LabelType,
};
use anyhow::Result;
use log::debug;

/// A solver for the eager semantics.
///
/// The eager extension is the maximal admissible set included in every semi-stable extension.
/// Like the ideal semantics, it is single-status; it always contains the grounded extension
/// and is contained in the ideal one.
pub struct EagerSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> EagerSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the eager semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for EagerSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        let semi_stable = semi_stable_semantics_solver::semi_stable_sets(self.af);
        debug!("intersecting {} semi-stable extension(s)", semi_stable.len());
        let sets = admissible_semantics_solver::maximal_admissible_within(
            self.af,
            &semi_stable,
            Semantics::SST,
        )?;
        Ok(utils::id_sets_to_extensions(self.af, sets))
    }
}
