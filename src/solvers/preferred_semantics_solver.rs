use super::{admissible_semantics_solver, utils, ExtensionEnumerator};
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};
use anyhow::Result;

/// A solver used to solve queries for the preferred semantics.
///
/// Preferred extensions are the admissible sets that are maximal with respect to set inclusion.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the preferred semantics.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        Ok(utils::id_sets_to_extensions(
            self.af,
            preferred_sets(self.af),
        ))
    }
}

pub(crate) fn preferred_sets<T>(af: &AAFramework<T>) -> Vec<Vec<usize>>
where
    T: LabelType,
{
    utils::maximal_sets(admissible_semantics_solver::admissible_sets(af))
}
