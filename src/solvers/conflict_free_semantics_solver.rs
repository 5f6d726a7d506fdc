use super::{
    labelling::{self, LabellingFilter},
    utils, ExtensionEnumerator,
};
use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};
use anyhow::Result;

/// A solver enumerating the conflict-free sets of a framework.
///
/// A set of arguments is conflict-free if no argument of the set defeats an argument of the set.
/// A self-defeating argument thus never belongs to a conflict-free set.
pub struct ConflictFreeSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> ConflictFreeSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to conflict-free sets.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for ConflictFreeSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        let sets = labelling::search_labellings(self.af, LabellingFilter::ConflictFree)
            .iter()
            .map(|l| l.in_ids())
            .collect();
        Ok(utils::id_sets_to_extensions(self.af, sets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::build_af;
    use crate::solvers::CredulousAcceptanceComputer;

    #[test]
    fn test_conflict_free_sets() {
        let af = build_af("af", &["a", "b", "c"], &[("a", "b"), ("c", "c")]).unwrap();
        let mut solver = ConflictFreeSemanticsSolver::new(&af);
        let labels = solver
            .enumerate_extensions()
            .unwrap()
            .iter()
            .map(|e| e.iter().map(|a| *a.label()).collect::<Vec<&str>>())
            .collect::<Vec<Vec<&str>>>();
        assert_eq!(vec![vec![], vec!["a"], vec!["b"]], labels);
    }

    #[test]
    fn test_self_defeating_not_accepted() {
        let af = build_af("af", &["a"], &[("a", "a")]).unwrap();
        let mut solver = ConflictFreeSemanticsSolver::new(&af);
        let a = af.argument_set().get_argument(&"a").unwrap();
        assert!(!solver.is_credulously_accepted(a).unwrap());
    }
}
