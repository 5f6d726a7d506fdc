use crate::{error::ArgumentationError, utils::LabelType};
use anyhow::{Context, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;

/// Handles a literal of the language.
///
/// Each literal has a label and an identifier which are unique in a language.
/// Literals are made from [Language] objects, and not directly by the [Literal] struct.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Literal<T>
where
    T: LabelType,
{
    id: usize,
    label: T,
}

impl<T> Literal<T>
where
    T: LabelType,
{
    /// Returns the label of the literal.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the literal.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Literal<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the literals used in an ASPIC+ framework, together with their contrariness relation.
///
/// Negation is not structural: the conflicts between literals are given explicitly.
/// A literal `x` is a contrary of `l` if concluding `x` conflicts with `l`;
/// this relation may be asymmetric, and two literals that are contraries of each other are contradictory.
///
/// # Example
///
/// ```
/// # use crustaspic::aspic::Language;
/// let mut language = Language::new_with_labels(&["p", "-p", "q", "r"]);
/// language.new_contradictory(&"p", &"-p").unwrap();
/// language.new_contrary(&"r", &"q").unwrap();
/// let p = language.get_literal(&"p").unwrap();
/// let q = language.get_literal(&"q").unwrap();
/// let contraries = language.iter_contraries_of(p).map(|l| *l.label()).collect::<Vec<&str>>();
/// assert_eq!(vec!["-p"], contraries);
/// assert_eq!(1, language.iter_contraries_of(q).count());
/// ```
#[derive(Debug, Clone)]
pub struct Language<T>
where
    T: LabelType,
{
    literals: Vec<Literal<T>>,
    label_to_id: HashMap<T, usize>,
    contraries: Vec<Vec<usize>>,
}

impl<T> Language<T>
where
    T: LabelType,
{
    /// Builds a new language given the labels of the literals.
    ///
    /// Each literal will be assigned an id equal to its index in the provided slice of labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    /// No contrariness is set.
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut label_to_id = HashMap::new();
        let mut literals = Vec::with_capacity(labels.len());
        for l in labels.iter() {
            match label_to_id.entry(l.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(e) => {
                    e.insert(literals.len());
                }
            }
            literals.push(Literal {
                id: literals.len(),
                label: l.clone(),
            });
        }
        let contraries = vec![vec![]; literals.len()];
        Language {
            literals,
            label_to_id,
            contraries,
        }
    }

    /// Returns the number of literals in the language.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Returns `true` iff the language has no literal.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Returns the literal with the given label.
    ///
    /// An [ArgumentationError::InvalidLanguage] error is returned if no literal corresponds to the provided label.
    pub fn get_literal(&self, label: &T) -> Result<&Literal<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.literals[*i])
            .ok_or_else(|| {
                ArgumentationError::InvalidLanguage {
                    element: label.to_string(),
                    context: "unknown literal".to_string(),
                }
                .into()
            })
    }

    /// Returns the literal with the corresponding identifier.
    ///
    /// # Panics
    ///
    /// Panics if no literal has the corresponding identifier.
    pub fn get_literal_by_id(&self, id: usize) -> &Literal<T> {
        &self.literals[id]
    }

    /// Provides an iterator to the literals, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Literal<T>> {
        self.literals.iter()
    }

    /// Declares `contrary` as a contrary of `literal`: concluding `contrary` conflicts with `literal`.
    ///
    /// The relation is directed; use [new_contradictory](Self::new_contradictory) for mutual conflicts.
    /// Declaring the same contrary twice has no effect.
    pub fn new_contrary(&mut self, contrary: &T, literal: &T) -> Result<()> {
        let context = || format!("cannot set {:?} as a contrary of {:?}", contrary, literal);
        let contrary_id = self.get_literal(contrary).with_context(context)?.id();
        let literal_id = self.get_literal(literal).with_context(context)?.id();
        self.push_contrary(contrary_id, literal_id);
        Ok(())
    }

    /// Declares two literals as contradictory, i.e. each one is a contrary of the other.
    pub fn new_contradictory(&mut self, l0: &T, l1: &T) -> Result<()> {
        let context = || format!("cannot set {:?} and {:?} as contradictory", l0, l1);
        let id0 = self.get_literal(l0).with_context(context)?.id();
        let id1 = self.get_literal(l1).with_context(context)?.id();
        self.push_contrary(id0, id1);
        self.push_contrary(id1, id0);
        Ok(())
    }

    fn push_contrary(&mut self, contrary_id: usize, literal_id: usize) {
        let contraries = &mut self.contraries[literal_id];
        if let Err(i) = contraries.binary_search(&contrary_id) {
            contraries.insert(i, contrary_id);
        }
    }

    /// Iterates over the contraries of a literal, in id order.
    pub fn iter_contraries_of(&self, literal: &Literal<T>) -> impl Iterator<Item = &Literal<T>> + '_ {
        self.contraries[literal.id()]
            .iter()
            .map(|i| &self.literals[*i])
    }

    /// Returns `true` iff the literal with id `x` is a contrary of the literal with id `l`.
    pub(crate) fn is_contrary_of(&self, x: usize, l: usize) -> bool {
        self.contraries[l].binary_search(&x).is_ok()
    }

    /// Returns `true` iff `x` is a contrary of `l` while `l` is not a contrary of `x`.
    pub(crate) fn is_one_way_contrary_of(&self, x: usize, l: usize) -> bool {
        self.is_contrary_of(x, l) && !self.are_contradictory(x, l)
    }

    /// Returns `true` iff the two literals are contraries of each other.
    pub(crate) fn are_contradictory(&self, x: usize, l: usize) -> bool {
        self.is_contrary_of(x, l) && self.is_contrary_of(l, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let literals = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let l = Language::new_with_labels(&literals);
        assert_eq!(3, l.len());
        assert!(!l.is_empty());
        for (i, s) in l.iter().enumerate() {
            assert_eq!(i, s.id());
            assert_eq!(literals[i], *s.label());
            assert_eq!(s, l.get_literal(s.label()).unwrap());
        }
    }

    #[test]
    fn test_new_empty() {
        let l = Language::new_with_labels(&[] as &[String]);
        assert_eq!(0, l.len());
        assert!(l.is_empty());
    }

    #[test]
    fn test_duplicate_literal() {
        assert_eq!(1, Language::new_with_labels(&["a", "a"]).len());
    }

    #[test]
    fn test_unknown_literal() {
        let l = Language::new_with_labels(&["a"]);
        let err = l.get_literal(&"b").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ArgumentationError>(),
            Some(ArgumentationError::InvalidLanguage { .. })
        ));
    }

    #[test]
    fn test_contrary_is_directed() {
        let mut l = Language::new_with_labels(&["a", "b"]);
        l.new_contrary(&"a", &"b").unwrap();
        l.new_contrary(&"a", &"b").unwrap();
        assert!(l.is_contrary_of(0, 1));
        assert!(!l.is_contrary_of(1, 0));
        assert!(l.is_one_way_contrary_of(0, 1));
        assert!(!l.are_contradictory(0, 1));
        assert_eq!(1, l.iter_contraries_of(l.get_literal_by_id(1)).count());
    }

    #[test]
    fn test_contradictory() {
        let mut l = Language::new_with_labels(&["a", "b"]);
        l.new_contradictory(&"a", &"b").unwrap();
        assert!(l.are_contradictory(0, 1));
        assert!(!l.is_one_way_contrary_of(0, 1));
    }

    #[test]
    fn test_contrary_unknown_literal() {
        let mut l = Language::new_with_labels(&["a"]);
        assert!(l.new_contrary(&"a", &"z").is_err());
        assert!(l.new_contradictory(&"z", &"a").is_err());
        assert_eq!(0, l.iter_contraries_of(l.get_literal_by_id(0)).count());
    }
}
