use super::{complete_semantics_solver, utils, ExtensionEnumerator};
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};
use anyhow::Result;

/// A solver used to solve queries for the semi-stable semantics.
///
/// Semi-stable extensions are the complete extensions whose range (the extension and the arguments it defeats) is maximal
/// with respect to set inclusion.
/// They are computed from the complete labellings having a minimal set of undecided arguments.
/// When the framework admits stable extensions, the semi-stable and stable extensions coincide.
pub struct SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the semi-stable semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for SemiStableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        Ok(utils::id_sets_to_extensions(
            self.af,
            semi_stable_sets(self.af),
        ))
    }
}

pub(crate) fn semi_stable_sets<T>(af: &AAFramework<T>) -> Vec<Vec<usize>>
where
    T: LabelType,
{
    let labellings = complete_semantics_solver::complete_labellings(af);
    let undecs = labellings
        .iter()
        .map(|l| l.undec_ids())
        .collect::<Vec<Vec<usize>>>();
    let sets = labellings
        .iter()
        .zip(undecs.iter())
        .filter(|(_, u)| !undecs.iter().any(|other| utils::is_strict_subset(other, u)))
        .map(|(l, _)| l.in_ids())
        .collect();
    utils::canonicalize(sets)
}
