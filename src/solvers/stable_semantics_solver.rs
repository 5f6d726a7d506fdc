use super::{
    labelling::{self, LabellingFilter},
    utils, ExtensionEnumerator,
};
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};
use anyhow::Result;

/// A solver used to solve queries for the stable semantics.
///
/// A stable extension is a conflict-free set defeating every argument outside of it.
/// Some frameworks (e.g. odd cycles) have no stable extension; in this case the enumeration is empty,
/// every argument is rejected for the credulous acceptance and accepted for the skeptical acceptance.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the stable semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aa::{AAFramework};
    /// # use crustaspic::utils::LabelType;
    /// # use crustaspic::solvers::{ExtensionEnumerator, StableSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = StableSemanticsSolver::new(af);
    ///     match solver.compute_one_extension().unwrap() {
    ///         Some(ext) => println!("found a stable extension: {:?}", ext),
    ///         None => println!("there is no stable extension"),
    ///     }
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        let sets = labelling::search_labellings(self.af, LabellingFilter::Stable)
            .iter()
            .map(|l| l.in_ids())
            .collect();
        Ok(utils::id_sets_to_extensions(self.af, sets))
    }
}
