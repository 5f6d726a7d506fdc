use super::{Literal, Rule, RuleKind};
use crate::utils::LabelType;

/// The way an argument concludes its literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentOrigin {
    /// The argument is an axiom of the knowledge base.
    Axiom,
    /// The argument is an ordinary premise of the knowledge base.
    OrdinaryPremise,
    /// The argument applies the rule with the given index on top of its direct sub-arguments.
    Rule(usize),
}

/// The structural identity of an argument: its premises and its conclusion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct ArgumentKey {
    premises: Vec<usize>,
    conclusion: usize,
}

/// An argument instantiated from an ASPIC+ framework.
///
/// Arguments are built by [ArgumentationTheory](crate::aspic::ArgumentationTheory) objects, which store them in an arena;
/// sub-arguments are referred to by their ids in this arena.
/// Rules are referred to by their index in the framework, and premises by their literal ids.
/// All the id lists are sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredArgument<T>
where
    T: LabelType,
{
    id: usize,
    name: String,
    conclusion: Literal<T>,
    origin: ArgumentOrigin,
    direct_subs: Vec<usize>,
    subs: Vec<usize>,
    defeasible_rules: Vec<usize>,
    strict_rules: Vec<usize>,
    last_defeasible_rules: Vec<usize>,
    premises: Vec<usize>,
    ordinary_premises: Vec<usize>,
}

fn sorted_union<'a, I>(slices: I) -> Vec<usize>
where
    I: Iterator<Item = &'a [usize]>,
{
    let mut union = slices.flatten().copied().collect::<Vec<usize>>();
    union.sort_unstable();
    union.dedup();
    union
}

fn argument_name(id: usize) -> String {
    format!("A{}", id + 1)
}

impl<T> StructuredArgument<T>
where
    T: LabelType,
{
    pub(crate) fn new_premise(id: usize, literal: Literal<T>, ordinary: bool) -> Self {
        let literal_id = literal.id();
        StructuredArgument {
            id,
            name: argument_name(id),
            conclusion: literal,
            origin: if ordinary {
                ArgumentOrigin::OrdinaryPremise
            } else {
                ArgumentOrigin::Axiom
            },
            direct_subs: vec![],
            subs: vec![id],
            defeasible_rules: vec![],
            strict_rules: vec![],
            last_defeasible_rules: vec![],
            premises: vec![literal_id],
            ordinary_premises: if ordinary { vec![literal_id] } else { vec![] },
        }
    }

    pub(crate) fn new_from_rule(
        id: usize,
        rule_index: usize,
        rule: &Rule<T>,
        conclusion: Literal<T>,
        direct_subs: &[&StructuredArgument<T>],
    ) -> Self {
        let mut subs = sorted_union(direct_subs.iter().map(|s| s.subs.as_slice()));
        subs.push(id);
        subs.sort_unstable();
        let mut defeasible_rules = sorted_union(direct_subs.iter().map(|s| s.defeasible_rules.as_slice()));
        let mut strict_rules = sorted_union(direct_subs.iter().map(|s| s.strict_rules.as_slice()));
        let last_defeasible_rules = match rule.kind() {
            RuleKind::Defeasible => {
                defeasible_rules.push(rule_index);
                defeasible_rules.sort_unstable();
                defeasible_rules.dedup();
                vec![rule_index]
            }
            RuleKind::Strict => {
                strict_rules.push(rule_index);
                strict_rules.sort_unstable();
                strict_rules.dedup();
                sorted_union(direct_subs.iter().map(|s| s.last_defeasible_rules.as_slice()))
            }
        };
        StructuredArgument {
            id,
            name: argument_name(id),
            conclusion,
            origin: ArgumentOrigin::Rule(rule_index),
            direct_subs: direct_subs.iter().map(|s| s.id).collect(),
            subs,
            defeasible_rules,
            strict_rules,
            last_defeasible_rules,
            premises: sorted_union(direct_subs.iter().map(|s| s.premises.as_slice())),
            ordinary_premises: sorted_union(
                direct_subs.iter().map(|s| s.ordinary_premises.as_slice()),
            ),
        }
    }

    pub(crate) fn key(&self) -> ArgumentKey {
        ArgumentKey {
            premises: self.premises.clone(),
            conclusion: self.conclusion.id(),
        }
    }

    /// Returns the id of the argument, that is its index in the theory.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the name of the argument (`A1` for the argument with id 0, and so on).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the conclusion of the argument.
    pub fn conclusion(&self) -> &Literal<T> {
        &self.conclusion
    }

    /// Returns the way the argument concludes its literal.
    pub fn origin(&self) -> ArgumentOrigin {
        self.origin
    }

    /// Returns the index of the rule applied at the root of this argument, if any.
    pub fn top_rule(&self) -> Option<usize> {
        match self.origin {
            ArgumentOrigin::Rule(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the ids of the immediate sub-arguments, one per antecedent of the top rule.
    pub fn direct_sub_argument_ids(&self) -> &[usize] {
        &self.direct_subs
    }

    /// Returns the ids of all the sub-arguments, including this argument.
    pub fn sub_argument_ids(&self) -> &[usize] {
        &self.subs
    }

    /// Returns the indices of the defeasible rules used in this argument.
    pub fn defeasible_rule_indices(&self) -> &[usize] {
        &self.defeasible_rules
    }

    /// Returns the indices of the strict rules used in this argument.
    pub fn strict_rule_indices(&self) -> &[usize] {
        &self.strict_rules
    }

    /// Returns the indices of the last defeasible rules, used by last-link orderings.
    ///
    /// If the top rule is defeasible, it is the only last defeasible rule.
    /// Otherwise, the last defeasible rules are the ones of the direct sub-arguments.
    pub fn last_defeasible_rule_indices(&self) -> &[usize] {
        &self.last_defeasible_rules
    }

    /// Returns the literal ids of the premises.
    pub fn premise_ids(&self) -> &[usize] {
        &self.premises
    }

    /// Returns the literal ids of the ordinary premises.
    pub fn ordinary_premise_ids(&self) -> &[usize] {
        &self.ordinary_premises
    }

    /// Returns `true` iff no defeasible rule is used in this argument.
    pub fn is_strict(&self) -> bool {
        self.defeasible_rules.is_empty()
    }

    /// Returns `true` iff all the premises of this argument are axioms.
    pub fn is_firm(&self) -> bool {
        self.ordinary_premises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspic::Language;

    #[test]
    fn test_derived_sets() {
        let language = Language::new_with_labels(&["a", "b", "p", "q"]);
        let literal = |i: usize| language.get_literal_by_id(i).clone();
        let a = StructuredArgument::new_premise(0, literal(0), true);
        let b = StructuredArgument::new_premise(1, literal(1), false);
        let d = Rule {
            id: "d",
            antecedents: vec![0, 1],
            consequent: 2,
            kind: RuleKind::Defeasible,
            applicability: None,
        };
        let p = StructuredArgument::new_from_rule(2, 0, &d, literal(2), &[&a, &b]);
        let s = Rule {
            id: "s",
            antecedents: vec![2],
            consequent: 3,
            kind: RuleKind::Strict,
            applicability: None,
        };
        let q = StructuredArgument::new_from_rule(3, 1, &s, literal(3), &[&p]);
        assert_eq!("A4", q.name());
        assert_eq!(Some(1), q.top_rule());
        assert_eq!(&[2], q.direct_sub_argument_ids());
        assert_eq!(&[0, 1, 2, 3], q.sub_argument_ids());
        assert_eq!(&[0], q.defeasible_rule_indices());
        assert_eq!(&[1], q.strict_rule_indices());
        assert_eq!(&[0], q.last_defeasible_rule_indices());
        assert_eq!(&[0, 1], q.premise_ids());
        assert_eq!(&[0], q.ordinary_premise_ids());
        assert!(!q.is_strict());
        assert!(!q.is_firm());
        assert!(b.is_strict());
        assert!(b.is_firm());
        assert_eq!(ArgumentOrigin::Axiom, b.origin());
        assert_eq!(p.key(), StructuredArgument::new_from_rule(7, 0, &d, literal(2), &[&a, &b]).key());
    }
}
