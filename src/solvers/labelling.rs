use crate::{aa::AAFramework, utils::LabelType};
use log::trace;

/// The status of an argument during the labelling search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    Blank,
    In,
    Out,
    MustOut,
    Undec,
}

/// The condition a completed labelling must satisfy to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LabellingFilter {
    ConflictFree,
    Admissible,
    Complete,
    Stable,
}

/// A (possibly partial) labelling of the arguments of a framework, indexed by argument ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Labelling {
    statuses: Vec<Status>,
}

impl Labelling {
    fn new(n_arguments: usize) -> Self {
        Self {
            statuses: vec![Status::Blank; n_arguments],
        }
    }

    /// Returns the sorted ids of the arguments labelled `In`.
    pub(crate) fn in_ids(&self) -> Vec<usize> {
        self.ids_with_status(Status::In)
    }

    /// Returns the sorted ids of the arguments labelled `Undec`.
    pub(crate) fn undec_ids(&self) -> Vec<usize> {
        self.ids_with_status(Status::Undec)
    }

    fn ids_with_status(&self, status: Status) -> Vec<usize> {
        self.statuses
            .iter()
            .enumerate()
            .filter_map(|(i, s)| if *s == status { Some(i) } else { None })
            .collect()
    }

    fn first_blank_from(&self, from: usize) -> Option<usize> {
        (from..self.statuses.len()).find(|i| self.statuses[*i] == Status::Blank)
    }

    // labels an argument In and propagates; returns false if a conflict arises
    fn label_in<T>(&mut self, af: &AAFramework<T>, id: usize) -> bool
    where
        T: LabelType,
    {
        self.statuses[id] = Status::In;
        for attacked in af.attacked_ids(id) {
            if self.statuses[attacked] == Status::In {
                return false;
            }
            self.statuses[attacked] = Status::Out;
        }
        for attacker in af.attacker_ids(id) {
            match self.statuses[attacker] {
                Status::In => return false,
                Status::Out => {}
                _ => self.statuses[attacker] = Status::MustOut,
            }
        }
        true
    }

    fn is_accepted<T>(&self, af: &AAFramework<T>, filter: LabellingFilter) -> bool
    where
        T: LabelType,
    {
        let no_must_out = || self.statuses.iter().all(|s| *s != Status::MustOut);
        match filter {
            LabellingFilter::ConflictFree => true,
            LabellingFilter::Admissible => no_must_out(),
            LabellingFilter::Complete => {
                no_must_out()
                    && self
                        .undec_ids()
                        .into_iter()
                        .all(|id| self.is_legally_undec(af, id))
            }
            LabellingFilter::Stable => self
                .statuses
                .iter()
                .all(|s| *s == Status::In || *s == Status::Out),
        }
    }

    // an undecided argument is legal if it has no accepted attacker and at least one attacker that is not out
    fn is_legally_undec<T>(&self, af: &AAFramework<T>, id: usize) -> bool
    where
        T: LabelType,
    {
        let mut has_not_out_attacker = false;
        for attacker in af.attacker_ids(id) {
            match self.statuses[attacker] {
                Status::In => return false,
                Status::Out => {}
                _ => has_not_out_attacker = true,
            }
        }
        has_not_out_attacker
    }
}

/// Enumerates the labellings of a framework that satisfy the given filter.
///
/// The search assigns the arguments in increasing id order, trying `In` before `Undec`.
/// Labellings are returned in the order they are found.
pub(crate) fn search_labellings<T>(af: &AAFramework<T>, filter: LabellingFilter) -> Vec<Labelling>
where
    T: LabelType,
{
    let mut results = vec![];
    search(af, Labelling::new(af.n_arguments()), 0, filter, &mut results);
    trace!(
        "found {} labelling(s) with filter {:?}",
        results.len(),
        filter
    );
    results
}

fn search<T>(
    af: &AAFramework<T>,
    labelling: Labelling,
    from: usize,
    filter: LabellingFilter,
    results: &mut Vec<Labelling>,
) where
    T: LabelType,
{
    match labelling.first_blank_from(from) {
        None => {
            if labelling.is_accepted(af, filter) {
                results.push(labelling)
            }
        }
        Some(id) => {
            let mut in_branch = labelling.clone();
            if in_branch.label_in(af, id) {
                search(af, in_branch, id + 1, filter, results);
            }
            let mut undec_branch = labelling;
            undec_branch.statuses[id] = Status::Undec;
            search(af, undec_branch, id + 1, filter, results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::build_af;

    fn in_sets(af: &AAFramework<&str>, filter: LabellingFilter) -> Vec<Vec<usize>> {
        let mut sets = search_labellings(af, filter)
            .iter()
            .map(|l| l.in_ids())
            .collect::<Vec<Vec<usize>>>();
        sets.sort_unstable();
        sets.dedup();
        sets
    }

    #[test]
    fn test_conflict_free() {
        let af = build_af("af", &["a", "b"], &[("a", "b")]).unwrap();
        assert_eq!(
            vec![vec![], vec![0], vec![1]],
            in_sets(&af, LabellingFilter::ConflictFree)
        );
    }

    #[test]
    fn test_admissible() {
        let af = build_af("af", &["b", "c", "d"], &[("b", "c"), ("c", "d"), ("d", "c")]).unwrap();
        assert_eq!(
            vec![vec![], vec![0], vec![0, 2], vec![2]],
            in_sets(&af, LabellingFilter::Admissible)
        );
    }

    #[test]
    fn test_complete() {
        let af = build_af("af", &["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
        assert_eq!(
            vec![vec![], vec![0], vec![1]],
            in_sets(&af, LabellingFilter::Complete)
        );
    }

    #[test]
    fn test_complete_rejects_undefended_undec() {
        let af = build_af("af", &["a", "b"], &[("a", "b")]).unwrap();
        assert_eq!(vec![vec![0]], in_sets(&af, LabellingFilter::Complete));
    }

    #[test]
    fn test_stable() {
        let af = build_af("af", &["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
        assert!(in_sets(&af, LabellingFilter::Stable).is_empty());
    }

    #[test]
    fn test_self_defeating_never_in() {
        let af = build_af("af", &["a"], &[("a", "a")]).unwrap();
        assert_eq!(vec![Vec::<usize>::new()], in_sets(&af, LabellingFilter::ConflictFree));
        let labellings = search_labellings(&af, LabellingFilter::Complete);
        assert_eq!(1, labellings.len());
        assert_eq!(vec![0], labellings[0].undec_ids());
    }

    #[test]
    fn test_empty_framework() {
        let af = build_af::<&str>("af", &[], &[]).unwrap();
        assert_eq!(vec![Vec::<usize>::new()], in_sets(&af, LabellingFilter::Stable));
    }
}
