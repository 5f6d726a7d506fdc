use super::{
    labelling::{self, Labelling, LabellingFilter},
    utils, ExtensionEnumerator,
};
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};
use anyhow::Result;

/// A solver used to solve queries for the complete semantics.
///
/// A complete extension is an admissible set containing every argument it defends.
/// Extensions are computed from complete labellings: an argument is undecided only if none of its attackers is accepted
/// and at least one of them is not rejected.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the complete semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aa::{AAFramework};
    /// # use crustaspic::utils::LabelType;
    /// # use crustaspic::solvers::{ExtensionEnumerator, CompleteSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = CompleteSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap();
    ///     println!("found a complete extension: {:?}", ext);
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        let sets = complete_labellings(self.af)
            .iter()
            .map(|l| l.in_ids())
            .collect();
        Ok(utils::id_sets_to_extensions(self.af, sets))
    }
}

pub(crate) fn complete_labellings<T>(af: &AAFramework<T>) -> Vec<Labelling>
where
    T: LabelType,
{
    labelling::search_labellings(af, LabellingFilter::Complete)
}
