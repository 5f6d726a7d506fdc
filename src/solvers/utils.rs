use crate::{
    aa::{AAFramework, Argument},
    utils::LabelType,
};

// Sorts each set of ids, then sorts the list of sets and removes duplicates.
pub(crate) fn canonicalize(mut sets: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    sets.iter_mut().for_each(|s| s.sort_unstable());
    sets.sort_unstable();
    sets.dedup();
    sets
}

// Translates canonical sets of argument ids into sets of arguments of the framework.
pub(crate) fn id_sets_to_extensions<'a, T>(
    af: &'a AAFramework<T>,
    sets: Vec<Vec<usize>>,
) -> Vec<Vec<&'a Argument<T>>>
where
    T: LabelType,
{
    canonicalize(sets)
        .into_iter()
        .map(|s| {
            s.into_iter()
                .map(|id| af.argument_set().get_argument_by_id(id))
                .collect()
        })
        .collect()
}

// Both slices must be sorted.
pub(crate) fn is_subset(sub: &[usize], sup: &[usize]) -> bool {
    let mut j = 0;
    for x in sub {
        while j < sup.len() && sup[j] < *x {
            j += 1;
        }
        if j == sup.len() || sup[j] != *x {
            return false;
        }
        j += 1;
    }
    true
}

pub(crate) fn is_strict_subset(sub: &[usize], sup: &[usize]) -> bool {
    sub.len() < sup.len() && is_subset(sub, sup)
}

// Keeps the sets that are not strictly included in another one. Sets must be sorted.
pub(crate) fn maximal_sets(sets: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let maximal = sets
        .iter()
        .filter(|s| !sets.iter().any(|other| is_strict_subset(s, other)))
        .cloned()
        .collect();
    canonicalize(maximal)
}

// Intersects sorted sets; returns None if no set is provided.
pub(crate) fn intersection(sets: &[Vec<usize>]) -> Option<Vec<usize>> {
    let (first, others) = sets.split_first()?;
    Some(
        first
            .iter()
            .filter(|x| others.iter().all(|s| s.binary_search(x).is_ok()))
            .copied()
            .collect(),
    )
}
