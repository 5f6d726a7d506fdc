use super::{
    labelling::{self, LabellingFilter},
    utils, ExtensionEnumerator,
};
use crate::{
    aa::{AAFramework, Argument, Semantics},
    error::ArgumentationError,
    utils::LabelType,
};
use anyhow::Result;

/// A solver enumerating the admissible sets of a framework.
///
/// An admissible set is a conflict-free set defending each of its members against all their attackers.
/// The empty set is always admissible.
pub struct AdmissibleSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> AdmissibleSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to admissible sets.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aa::build_af;
    /// # use crustaspic::solvers::{AdmissibleSemanticsSolver, ExtensionEnumerator};
    /// let af = build_af("af", &["b", "c", "d"], &[("b", "c"), ("c", "d"), ("d", "c")]).unwrap();
    /// let mut solver = AdmissibleSemanticsSolver::new(&af);
    /// assert_eq!(4, solver.enumerate_extensions().unwrap().len());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }
}

impl<'a, T> ExtensionEnumerator<'a, T> for AdmissibleSemanticsSolver<'a, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<Vec<&'a Argument<T>>>> {
        Ok(utils::id_sets_to_extensions(
            self.af,
            admissible_sets(self.af),
        ))
    }
}

/// Returns the admissible sets of the framework as sorted lists of ids.
pub(crate) fn admissible_sets<T>(af: &AAFramework<T>) -> Vec<Vec<usize>>
where
    T: LabelType,
{
    utils::canonicalize(
        labelling::search_labellings(af, LabellingFilter::Admissible)
            .iter()
            .map(|l| l.in_ids())
            .collect(),
    )
}

/// Returns the maximal admissible sets included in the intersection of the provided extensions.
///
/// The extensions are the ones of the given semantics; it is used to report an error if the list is empty.
pub(crate) fn maximal_admissible_within<T>(
    af: &AAFramework<T>,
    extensions: &[Vec<usize>],
    semantics: Semantics,
) -> Result<Vec<Vec<usize>>>
where
    T: LabelType,
{
    let pool = utils::intersection(extensions).ok_or(ArgumentationError::EmptyIntersection(semantics))?;
    let candidates = admissible_sets(af)
        .into_iter()
        .filter(|s| utils::is_subset(s, &pool))
        .collect();
    Ok(utils::maximal_sets(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::build_af;

    #[test]
    fn test_admissible_sets() {
        let af = build_af("af", &["b", "c", "d"], &[("b", "c"), ("c", "d"), ("d", "c")]).unwrap();
        assert_eq!(
            vec![vec![], vec![0], vec![0, 2], vec![2]],
            admissible_sets(&af)
        );
    }

    #[test]
    fn test_unattacked_argument_alone_is_admissible() {
        let af = build_af("af", &["a", "b"], &[("a", "b")]).unwrap();
        let mut solver = AdmissibleSemanticsSolver::new(&af);
        let exts = solver.enumerate_extensions().unwrap();
        assert_eq!(2, exts.len());
        assert!(exts[0].is_empty());
        assert_eq!("a", *exts[1][0].label());
    }

    #[test]
    fn test_maximal_admissible_within() {
        let af = build_af("af", &["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
        assert_eq!(
            vec![Vec::<usize>::new()],
            maximal_admissible_within(&af, &[vec![0], vec![1]], Semantics::PR).unwrap()
        );
        assert_eq!(
            vec![vec![0]],
            maximal_admissible_within(&af, &[vec![0]], Semantics::PR).unwrap()
        );
    }

    #[test]
    fn test_maximal_admissible_within_empty_pool() {
        let af = build_af("af", &["a"], &[]).unwrap();
        let err = maximal_admissible_within(&af, &[], Semantics::SST).unwrap_err();
        assert_eq!(
            Some(&ArgumentationError::EmptyIntersection(Semantics::SST)),
            err.downcast_ref::<ArgumentationError>()
        );
    }
}
