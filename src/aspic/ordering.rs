use anyhow::{anyhow, Result};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// A preorder over a set of elements addressed by their indices.
///
/// The preorder is given by `(weaker, stronger)` pairs; its reflexive and transitive closure is computed when it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preorder {
    n_elements: usize,
    leq: Vec<bool>,
}

impl Preorder {
    /// Builds the preorder generated by the given pairs over `n_elements` elements.
    ///
    /// An error is returned if a pair refers to an index greater than or equal to `n_elements`.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aspic::Preorder;
    /// let order = Preorder::try_new(3, &[(0, 1), (1, 2)]).unwrap();
    /// assert!(order.is_strictly_weaker(0, 2));
    /// assert!(!order.is_strictly_weaker(2, 0));
    /// assert!(Preorder::try_new(3, &[(0, 3)]).is_err());
    /// ```
    pub fn try_new(n_elements: usize, pairs: &[(usize, usize)]) -> Result<Self> {
        if let Some((weaker, stronger)) = pairs
            .iter()
            .find(|(weaker, stronger)| *weaker >= n_elements || *stronger >= n_elements)
        {
            return Err(anyhow!(
                "cannot order ({}, {}) in a preorder over {} element(s)",
                weaker,
                stronger,
                n_elements
            ));
        }
        Ok(Self::new(n_elements, pairs))
    }

    // pairs must be in range; the framework builders check it
    pub(crate) fn new(n_elements: usize, pairs: &[(usize, usize)]) -> Self {
        let mut leq = vec![false; n_elements * n_elements];
        (0..n_elements).for_each(|i| leq[i * n_elements + i] = true);
        for (weaker, stronger) in pairs {
            leq[weaker * n_elements + stronger] = true;
        }
        for k in 0..n_elements {
            for i in 0..n_elements {
                if !leq[i * n_elements + k] {
                    continue;
                }
                for j in 0..n_elements {
                    if leq[k * n_elements + j] {
                        leq[i * n_elements + j] = true;
                    }
                }
            }
        }
        Preorder { n_elements, leq }
    }

    /// Returns `true` iff `x <= y`.
    pub fn is_weaker_or_equal(&self, x: usize, y: usize) -> bool {
        self.leq[x * self.n_elements + y]
    }

    /// Returns `true` iff `x < y`, that is `x <= y` and not `y <= x`.
    pub fn is_strictly_weaker(&self, x: usize, y: usize) -> bool {
        self.is_weaker_or_equal(x, y) && !self.is_weaker_or_equal(y, x)
    }
}

/// The strategies used to compare arguments.
///
/// The elitist/democratic axis tells how sets are compared;
/// the last-link/weakest-link axis tells which rules and premises are compared.
///
/// ```
/// # use crustaspic::aspic::OrderingStrategy;
/// # use std::str::FromStr;
/// assert_eq!(OrderingStrategy::LastLinkElitist, OrderingStrategy::from_str("last_link_elitist").unwrap());
/// assert_eq!(OrderingStrategy::WeakestLinkDemocratic, OrderingStrategy::from_str("wld").unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum OrderingStrategy {
    /// Last-link principle with elitist set comparison (the default strategy)
    #[default]
    #[strum(to_string = "LLE", serialize = "last_link_elitist")]
    LastLinkElitist,
    /// Last-link principle with democratic set comparison
    #[strum(to_string = "LLD", serialize = "last_link_democratic")]
    LastLinkDemocratic,
    /// Weakest-link principle with elitist set comparison
    #[strum(to_string = "WLE", serialize = "weakest_link_elitist")]
    WeakestLinkElitist,
    /// Weakest-link principle with democratic set comparison
    #[strum(to_string = "WLD", serialize = "weakest_link_democratic")]
    WeakestLinkDemocratic,
}

impl OrderingStrategy {
    /// Returns `true` iff this strategy uses the elitist set comparison.
    pub fn is_elitist(&self) -> bool {
        matches!(
            self,
            OrderingStrategy::LastLinkElitist | OrderingStrategy::WeakestLinkElitist
        )
    }

    /// Returns `true` iff this strategy follows the last-link principle.
    pub fn is_last_link(&self) -> bool {
        matches!(
            self,
            OrderingStrategy::LastLinkElitist | OrderingStrategy::LastLinkDemocratic
        )
    }

    /// Returns `true` iff the set `weak` is strictly weaker than the set `strong` under the given preorder.
    ///
    /// The empty set is never weaker than another set, and a non-empty set is weaker than the empty set.
    pub(crate) fn is_set_strictly_weaker(
        &self,
        weak: &[usize],
        strong: &[usize],
        order: &Preorder,
    ) -> bool {
        if weak.is_empty() {
            return false;
        }
        if strong.is_empty() {
            return true;
        }
        if self.is_elitist() {
            strong
                .iter()
                .any(|s| weak.iter().all(|w| order.is_strictly_weaker(*w, *s)))
        } else {
            weak.iter()
                .all(|w| strong.iter().any(|s| order.is_strictly_weaker(*w, *s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_preorder_closure() {
        let order = Preorder::new(4, &[(0, 1), (1, 2), (2, 1)]);
        assert!(order.is_weaker_or_equal(3, 3));
        assert!(order.is_weaker_or_equal(0, 2));
        assert!(order.is_strictly_weaker(0, 2));
        assert!(!order.is_strictly_weaker(1, 2));
        assert!(!order.is_strictly_weaker(2, 1));
        assert!(!order.is_strictly_weaker(0, 3));
    }

    #[test]
    fn test_try_new_out_of_range() {
        assert!(Preorder::try_new(2, &[(0, 2)]).is_err());
        assert!(Preorder::try_new(2, &[(5, 0)]).is_err());
        assert!(Preorder::try_new(0, &[(0, 0)]).is_err());
        assert_eq!(Preorder::new(2, &[(0, 1)]), Preorder::try_new(2, &[(0, 1)]).unwrap());
    }

    #[test]
    fn test_strategy_strings() {
        for s in OrderingStrategy::iter() {
            assert_eq!(s, OrderingStrategy::from_str(s.as_ref()).unwrap());
        }
        assert!(OrderingStrategy::from_str("foo").is_err());
        assert_eq!(OrderingStrategy::LastLinkElitist, OrderingStrategy::default());
    }

    #[test]
    fn test_empty_sets() {
        let order = Preorder::new(2, &[]);
        for s in OrderingStrategy::iter() {
            assert!(!s.is_set_strictly_weaker(&[], &[], &order));
            assert!(!s.is_set_strictly_weaker(&[], &[0], &order));
            assert!(s.is_set_strictly_weaker(&[0], &[], &order));
            assert!(!s.is_set_strictly_weaker(&[0], &[1], &order));
        }
    }

    #[test]
    fn test_elitist_vs_democratic() {
        // 0 < 2, 1 < 3
        let order = Preorder::new(4, &[(0, 2), (1, 3)]);
        let elitist = OrderingStrategy::LastLinkElitist;
        let democratic = OrderingStrategy::LastLinkDemocratic;
        assert!(!elitist.is_set_strictly_weaker(&[0, 1], &[2, 3], &order));
        assert!(democratic.is_set_strictly_weaker(&[0, 1], &[2, 3], &order));
        let order = Preorder::new(3, &[(0, 2), (1, 2)]);
        assert!(elitist.is_set_strictly_weaker(&[0, 1], &[2], &order));
        assert!(democratic.is_set_strictly_weaker(&[0, 1], &[2], &order));
    }
}
