use super::{
    argument::ArgumentKey, ArgumentOrigin, AspicFramework, Language, OrderingStrategy, Preorder, Premise,
    Rule, RuleKind, StructuredArgument,
};
use crate::{
    aa::{build_af, AAFramework},
    error::ArgumentationError,
    utils::LabelType,
};
use anyhow::{Context, Result};
use log::{debug, info, trace};
use permutator::CartesianProduct;
use std::collections::HashSet;

/// An immutable snapshot of the arguments instantiated from an [AspicFramework].
///
/// The theory owns a copy of the framework it was built from; updating the rules or the knowledge base
/// requires building a new theory.
/// Arguments are stored in an arena and addressed by their ids; they are named `A1`, `A2`, ... in creation order.
///
/// # Example
///
/// ```
/// # use crustaspic::aspic::{ArgumentationTheory, AspicFramework, Language, OrderingStrategy};
/// let mut language = Language::new_with_labels(&["a", "b", "p", "-p"]);
/// language.new_contradictory(&"p", &"-p").unwrap();
/// let mut framework = AspicFramework::new_with_language(language);
/// framework.new_defeasible_rule(&"d1", &[&"a"], &"p").unwrap();
/// framework.new_defeasible_rule(&"d2", &[&"b"], &"-p").unwrap();
/// framework.new_ordinary_premise(&"a").unwrap();
/// framework.new_ordinary_premise(&"b").unwrap();
/// framework.new_rule_preference(&"d1", &"d2").unwrap();
/// let theory = ArgumentationTheory::new(framework, OrderingStrategy::LastLinkElitist);
/// assert_eq!(4, theory.n_arguments());
/// let p = theory.arguments_by_conclusion(&"p").unwrap()[0];
/// let not_p = theory.arguments_by_conclusion(&"-p").unwrap()[0];
/// assert!(theory.attacks(p, not_p) && theory.attacks(not_p, p));
/// assert!(!theory.defeats(p, not_p));
/// assert!(theory.defeats(not_p, p));
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentationTheory<T>
where
    T: LabelType,
{
    framework: AspicFramework<T>,
    strategy: OrderingStrategy,
    rule_order: Preorder,
    premise_order: Preorder,
    arguments: Vec<StructuredArgument<T>>,
    by_conclusion: Vec<Vec<usize>>,
}

impl<T> ArgumentationTheory<T>
where
    T: LabelType,
{
    /// Builds all the arguments of the framework, and sets the ordering strategy used to compute defeats.
    ///
    /// Arguments are built as the least fixpoint of the rule applications on top of the premises.
    /// An argument is admitted only if no argument with the same premises and conclusion already exists,
    /// and if the consequent of its top rule is not the conclusion of one of its sub-arguments.
    pub fn new(framework: AspicFramework<T>, strategy: OrderingStrategy) -> Self {
        let rule_order = Preorder::new(framework.n_rules(), framework.rule_preferences());
        let premise_order = Preorder::new(framework.language().len(), framework.premise_preferences());
        let (arguments, by_conclusion) = compute_arguments(&framework);
        info!(
            "built {} argument(s) from {} rule(s) and {} premise(s)",
            arguments.len(),
            framework.n_rules(),
            framework.iter_premises().count()
        );
        ArgumentationTheory {
            framework,
            strategy,
            rule_order,
            premise_order,
            arguments,
            by_conclusion,
        }
    }

    /// Returns the framework the theory was built from.
    pub fn framework(&self) -> &AspicFramework<T> {
        &self.framework
    }

    /// Returns the language of the theory.
    pub fn language(&self) -> &Language<T> {
        self.framework.language()
    }

    /// Returns the ordering strategy used to compute defeats.
    pub fn strategy(&self) -> OrderingStrategy {
        self.strategy
    }

    /// Returns the number of arguments.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Provides an iterator to the arguments, in creation order.
    pub fn iter_arguments(&self) -> impl Iterator<Item = &StructuredArgument<T>> + '_ {
        self.arguments.iter()
    }

    /// Returns the argument with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has this id.
    pub fn get_argument_by_id(&self, id: usize) -> &StructuredArgument<T> {
        &self.arguments[id]
    }

    /// Returns the argument with the given name (`A1`, `A2`, ...).
    ///
    /// An [ArgumentationError::NoSuchArgument] error is returned if no argument has this name.
    pub fn get_argument(&self, name: &str) -> Result<&StructuredArgument<T>> {
        name.strip_prefix('A')
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1))
            .and_then(|id| self.arguments.get(id))
            .filter(|a| a.name() == name)
            .ok_or_else(|| ArgumentationError::NoSuchArgument(name.to_string()).into())
    }

    /// Returns the arguments concluding the given literal, in creation order.
    pub fn arguments_by_conclusion(&self, literal: &T) -> Result<Vec<&StructuredArgument<T>>> {
        let id = self.language().get_literal(literal)?.id();
        Ok(self.by_conclusion[id]
            .iter()
            .map(|i| &self.arguments[*i])
            .collect())
    }

    fn sub_arguments<'a>(
        &'a self,
        arg: &'a StructuredArgument<T>,
    ) -> impl Iterator<Item = &'a StructuredArgument<T>> + 'a {
        arg.sub_argument_ids().iter().map(|i| &self.arguments[*i])
    }

    fn is_defeasible_top(&self, arg: &StructuredArgument<T>) -> bool {
        arg.top_rule()
            .map(|r| self.framework.get_rule_by_index(r).kind() == RuleKind::Defeasible)
            .unwrap_or(false)
    }

    fn rebuts_on(&self, a: &StructuredArgument<T>, sub: &StructuredArgument<T>) -> bool {
        self.is_defeasible_top(sub)
            && self
                .language()
                .is_contrary_of(a.conclusion().id(), sub.conclusion().id())
    }

    fn undercuts_on(&self, a: &StructuredArgument<T>, sub: &StructuredArgument<T>) -> bool {
        sub.top_rule()
            .map(|r| self.framework.get_rule_by_index(r))
            .filter(|r| r.is_defeasible())
            .and_then(|r| r.applicability_id())
            .map(|l| self.language().is_contrary_of(a.conclusion().id(), l))
            .unwrap_or(false)
    }

    fn undermines_on(&self, a: &StructuredArgument<T>, sub: &StructuredArgument<T>) -> bool {
        sub.origin() == ArgumentOrigin::OrdinaryPremise
            && self
                .language()
                .is_contrary_of(a.conclusion().id(), sub.conclusion().id())
    }

    fn is_one_way(&self, a: &StructuredArgument<T>, sub: &StructuredArgument<T>) -> bool {
        self.language()
            .is_one_way_contrary_of(a.conclusion().id(), sub.conclusion().id())
    }

    /// Returns `true` iff `a` concludes a contrary of the conclusion of a sub-argument of `b` whose top rule is defeasible.
    pub fn rebuts(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.sub_arguments(b).any(|s| self.rebuts_on(a, s))
    }

    /// Returns `true` iff `a` concludes a contrary of the applicability literal of the top rule of a sub-argument of `b`.
    pub fn undercuts(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.sub_arguments(b).any(|s| self.undercuts_on(a, s))
    }

    /// Returns `true` iff `a` concludes a contrary of an ordinary premise of `b`.
    pub fn undermines(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.sub_arguments(b).any(|s| self.undermines_on(a, s))
    }

    /// Returns `true` iff `a` rebuts `b` on a sub-argument whose conclusion is not a contrary of the conclusion of `a`.
    pub fn contrary_rebuts(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.sub_arguments(b)
            .any(|s| self.rebuts_on(a, s) && self.is_one_way(a, s))
    }

    /// Returns `true` iff `a` undermines `b` on a premise which is not a contrary of the conclusion of `a`.
    pub fn contrary_undermines(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.sub_arguments(b)
            .any(|s| self.undermines_on(a, s) && self.is_one_way(a, s))
    }

    /// Returns `true` iff `a` rebuts, undercuts or undermines `b`.
    pub fn attacks(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.rebuts(a, b) || self.undercuts(a, b) || self.undermines(a, b)
    }

    /// Returns `true` iff `a` is strictly weaker than `b` under the strategy of the theory.
    pub fn is_strictly_weaker(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.is_strictly_weaker_with_strategy(a, b, self.strategy)
    }

    /// Returns `true` iff `a` is strictly weaker than `b` under the given strategy.
    ///
    /// Last-link strategies compare the last defeasible rules, or the ordinary premises if both arguments have no defeasible rule.
    /// Weakest-link strategies compare the ordinary premises of strict arguments, the defeasible rules of firm arguments,
    /// and both in the other cases.
    pub fn is_strictly_weaker_with_strategy(
        &self,
        a: &StructuredArgument<T>,
        b: &StructuredArgument<T>,
        strategy: OrderingStrategy,
    ) -> bool {
        let weaker_premises = || {
            strategy.is_set_strictly_weaker(
                a.ordinary_premise_ids(),
                b.ordinary_premise_ids(),
                &self.premise_order,
            )
        };
        let weaker_rules = |weak: &[usize], strong: &[usize]| {
            strategy.is_set_strictly_weaker(weak, strong, &self.rule_order)
        };
        if strategy.is_last_link() {
            if a.last_defeasible_rule_indices().is_empty() && b.last_defeasible_rule_indices().is_empty() {
                weaker_premises()
            } else {
                weaker_rules(a.last_defeasible_rule_indices(), b.last_defeasible_rule_indices())
            }
        } else if a.is_strict() && b.is_strict() {
            weaker_premises()
        } else if a.is_firm() && b.is_firm() {
            weaker_rules(a.defeasible_rule_indices(), b.defeasible_rule_indices())
        } else {
            weaker_premises() && weaker_rules(a.defeasible_rule_indices(), b.defeasible_rule_indices())
        }
    }

    /// Returns `true` iff `a` defeats `b` under the strategy of the theory.
    pub fn defeats(&self, a: &StructuredArgument<T>, b: &StructuredArgument<T>) -> bool {
        self.defeats_with_strategy(a, b, self.strategy)
    }

    /// Returns `true` iff `a` defeats `b` under the given strategy.
    ///
    /// Undercuts and one-way contrary attacks always succeed.
    /// Rebuts and undermines succeed on a sub-argument of `b` unless `a` is strictly weaker than this sub-argument.
    pub fn defeats_with_strategy(
        &self,
        a: &StructuredArgument<T>,
        b: &StructuredArgument<T>,
        strategy: OrderingStrategy,
    ) -> bool {
        self.sub_arguments(b).any(|s| {
            let undercut = self.undercuts_on(a, s);
            let rebut = self.rebuts_on(a, s);
            let undermine = self.undermines_on(a, s);
            undercut
                || ((rebut || undermine) && self.is_one_way(a, s))
                || ((rebut || undermine) && !self.is_strictly_weaker_with_strategy(a, s, strategy))
        })
    }

    /// Returns the defeats of the theory, as pairs of argument ids, ordered by attacker and then by attacked argument.
    pub fn defeat_ids(&self) -> Vec<(usize, usize)> {
        let mut defeats = vec![];
        for a in self.arguments.iter() {
            for b in self.arguments.iter() {
                if self.defeats(a, b) {
                    defeats.push((a.id(), b.id()))
                }
            }
        }
        debug!("computed {} defeat(s)", defeats.len());
        defeats
    }

    /// Builds the abstract framework whose arguments are the ones of the theory (by name) and whose edges are the defeats.
    ///
    /// The ids of the arguments in the abstract framework are the ones they have in the theory.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aspic::{build_arguments, Language, OrderingStrategy, Premise};
    /// let mut language = Language::new_with_labels(&["a", "-a"]);
    /// language.new_contradictory(&"a", &"-a").unwrap();
    /// let theory = build_arguments(
    ///     language,
    ///     &[],
    ///     &[],
    ///     &[Premise::Ordinary("a"), Premise::Ordinary("-a")],
    ///     &[],
    ///     &[],
    ///     OrderingStrategy::default(),
    /// )
    /// .unwrap();
    /// let af = theory.to_framework("af").unwrap();
    /// assert_eq!(2, af.n_arguments());
    /// assert_eq!(2, af.n_defeats());
    /// ```
    pub fn to_framework(&self, name: &str) -> Result<AAFramework<String>> {
        let names = self
            .arguments
            .iter()
            .map(|a| a.name().to_string())
            .collect::<Vec<String>>();
        let defeats = self
            .defeat_ids()
            .into_iter()
            .map(|(a, b)| (names[a].clone(), names[b].clone()))
            .collect::<Vec<(String, String)>>();
        let af = build_af(name, &names, &defeats)
            .with_context(|| format!("while building the framework of theory {:?}", name))?;
        info!(
            "framework {:?} has {} argument(s) and {} defeat(s)",
            name,
            af.n_arguments(),
            af.n_defeats()
        );
        Ok(af)
    }

    /// Returns a human readable description of an argument.
    ///
    /// Premises are described by their literal; other arguments by their direct sub-arguments,
    /// an arrow depending on the kind of the top rule (`->` for strict rules, `=>` for defeasible ones), and their conclusion.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aspic::{build_arguments, Language, OrderingStrategy, Premise};
    /// let language = Language::new_with_labels(&["a", "b", "p"]);
    /// let theory = build_arguments(
    ///     language,
    ///     &[("s1", vec!["a", "b"], "p")],
    ///     &[],
    ///     &[Premise::Axiom("a"), Premise::Ordinary("b")],
    ///     &[],
    ///     &[],
    ///     OrderingStrategy::default(),
    /// )
    /// .unwrap();
    /// assert_eq!("A1: a", theory.describe(theory.get_argument_by_id(0)));
    /// assert_eq!("A3: A1, A2 -> p", theory.describe(theory.get_argument_by_id(2)));
    /// ```
    pub fn describe(&self, arg: &StructuredArgument<T>) -> String {
        match arg.top_rule() {
            None => format!("{}: {}", arg.name(), arg.conclusion()),
            Some(r) => {
                let arrow = match self.framework.get_rule_by_index(r).kind() {
                    RuleKind::Strict => "->",
                    RuleKind::Defeasible => "=>",
                };
                let subs = arg
                    .direct_sub_argument_ids()
                    .iter()
                    .map(|i| self.arguments[*i].name())
                    .collect::<Vec<&str>>()
                    .join(", ");
                if subs.is_empty() {
                    format!("{}: {} {}", arg.name(), arrow, arg.conclusion())
                } else {
                    format!("{}: {} {} {}", arg.name(), subs, arrow, arg.conclusion())
                }
            }
        }
    }
}

struct ArgumentArena<T>
where
    T: LabelType,
{
    arguments: Vec<StructuredArgument<T>>,
    by_conclusion: Vec<Vec<usize>>,
    keys: HashSet<ArgumentKey>,
}

impl<T> ArgumentArena<T>
where
    T: LabelType,
{
    fn new(n_literals: usize) -> Self {
        ArgumentArena {
            arguments: vec![],
            by_conclusion: vec![vec![]; n_literals],
            keys: HashSet::new(),
        }
    }

    // returns false if an argument with the same key is already known
    fn admit(&mut self, arg: StructuredArgument<T>) -> bool {
        if !self.keys.insert(arg.key()) {
            return false;
        }
        self.by_conclusion[arg.conclusion().id()].push(arg.id());
        self.arguments.push(arg);
        true
    }

    fn candidate(
        &self,
        language: &Language<T>,
        rule_index: usize,
        rule: &Rule<T>,
        combination: &[usize],
    ) -> Option<StructuredArgument<T>> {
        let subs = combination
            .iter()
            .map(|i| &self.arguments[*i])
            .collect::<Vec<&StructuredArgument<T>>>();
        let creates_cycle = subs.iter().any(|s| {
            s.sub_argument_ids()
                .iter()
                .any(|i| self.arguments[*i].conclusion().id() == rule.consequent_id())
        });
        if creates_cycle {
            return None;
        }
        Some(StructuredArgument::new_from_rule(
            self.arguments.len(),
            rule_index,
            rule,
            language.get_literal_by_id(rule.consequent_id()).clone(),
            &subs,
        ))
    }
}

fn rule_combinations(domains: &[Vec<usize>]) -> Vec<Vec<usize>> {
    if domains.is_empty() {
        return vec![vec![]];
    }
    let domain_refs = domains.iter().map(|d| d.as_slice()).collect::<Vec<&[usize]>>();
    domain_refs
        .as_slice()
        .cart_prod()
        .map(|p| p.into_iter().copied().collect::<Vec<usize>>())
        .collect()
}

fn compute_arguments<T>(framework: &AspicFramework<T>) -> (Vec<StructuredArgument<T>>, Vec<Vec<usize>>)
where
    T: LabelType,
{
    let language = framework.language();
    let mut arena = ArgumentArena::new(language.len());
    for premise in framework.iter_premises() {
        if let Ok(literal) = language.get_literal(premise.literal()) {
            let arg = StructuredArgument::new_premise(
                arena.arguments.len(),
                literal.clone(),
                premise.is_ordinary(),
            );
            arena.admit(arg);
        }
    }
    let mut n_iterations = 0;
    loop {
        n_iterations += 1;
        let n_before = arena.arguments.len();
        for (rule_index, rule) in framework.iter_rules().enumerate() {
            let domains = rule
                .antecedent_ids()
                .iter()
                .map(|l| arena.by_conclusion[*l].clone())
                .collect::<Vec<Vec<usize>>>();
            if domains.iter().any(|d| d.is_empty()) {
                continue;
            }
            for combination in rule_combinations(&domains) {
                if let Some(arg) = arena.candidate(language, rule_index, rule, &combination) {
                    let name = arg.name().to_string();
                    if arena.admit(arg) {
                        trace!(
                            "admitted argument {} for {}",
                            name,
                            language.get_literal_by_id(rule.consequent_id())
                        );
                    }
                }
            }
        }
        debug!(
            "argument closure iteration {}: {} new argument(s)",
            n_iterations,
            arena.arguments.len() - n_before
        );
        if arena.arguments.len() == n_before {
            break;
        }
    }
    (arena.arguments, arena.by_conclusion)
}

/// Builds the arguments of an ASPIC+ framework given by its components.
///
/// Rules are given as `(id, antecedents, consequent)` triples, and preferences as `(weaker, stronger)` pairs.
/// Strict rules are declared before defeasible ones.
/// If a component refers to a literal outside of the language, an [ArgumentationError::InvalidLanguage] error is returned
/// and no theory is built.
///
/// # Example
///
/// ```
/// # use crustaspic::aspic::{build_arguments, Language, OrderingStrategy, Premise};
/// let mut language = Language::new_with_labels(&["a", "r", "-r", "-s", "s", "t", "q", "p", "-p"]);
/// language.new_contradictory(&"r", &"-r").unwrap();
/// language.new_contradictory(&"s", &"-s").unwrap();
/// language.new_contradictory(&"p", &"-p").unwrap();
/// let theory = build_arguments(
///     language,
///     &[("s1", vec!["t", "q"], "-p")],
///     &[("d1", vec!["-s"], "t"), ("d2", vec!["r"], "q"), ("d3", vec!["a"], "p")],
///     &["a", "r", "-r", "-s"].map(Premise::Ordinary),
///     &[],
///     &[],
///     OrderingStrategy::LastLinkElitist,
/// )
/// .unwrap();
/// assert_eq!(8, theory.n_arguments());
/// assert_eq!(5, theory.defeat_ids().len());
/// ```
pub fn build_arguments<T>(
    language: Language<T>,
    strict_rules: &[(T, Vec<T>, T)],
    defeasible_rules: &[(T, Vec<T>, T)],
    premises: &[Premise<T>],
    rule_preferences: &[(T, T)],
    premise_preferences: &[(T, T)],
    strategy: OrderingStrategy,
) -> Result<ArgumentationTheory<T>>
where
    T: LabelType,
{
    let mut framework = AspicFramework::new_with_language(language);
    for (id, antecedents, consequent) in strict_rules {
        framework.new_strict_rule(id, &antecedents.iter().collect::<Vec<&T>>(), consequent)?;
    }
    for (id, antecedents, consequent) in defeasible_rules {
        framework.new_defeasible_rule(id, &antecedents.iter().collect::<Vec<&T>>(), consequent)?;
    }
    for premise in premises {
        framework.new_premise(premise.clone())?;
    }
    for (weaker, stronger) in rule_preferences {
        framework.new_rule_preference(weaker, stronger)?;
    }
    for (weaker, stronger) in premise_preferences {
        framework.new_premise_preference(weaker, stronger)?;
    }
    Ok(ArgumentationTheory::new(framework, strategy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::Semantics;
    use crate::solvers;
    use strum::IntoEnumIterator;

    fn scenario_b_language() -> Language<&'static str> {
        let mut language =
            Language::new_with_labels(&["a", "r", "-r", "-s", "s", "t", "q", "p", "-p"]);
        language.new_contradictory(&"r", &"-r").unwrap();
        language.new_contradictory(&"s", &"-s").unwrap();
        language.new_contradictory(&"p", &"-p").unwrap();
        language
    }

    fn scenario_b(strategy: OrderingStrategy) -> ArgumentationTheory<&'static str> {
        build_arguments(
            scenario_b_language(),
            &[("s1", vec!["t", "q"], "-p")],
            &[
                ("d1", vec!["-s"], "t"),
                ("d2", vec!["r"], "q"),
                ("d3", vec!["a"], "p"),
            ],
            &["a", "r", "-r", "-s"].map(Premise::Ordinary),
            &[],
            &[],
            strategy,
        )
        .unwrap()
    }

    fn defeat_names(theory: &ArgumentationTheory<&'static str>) -> Vec<(String, String)> {
        theory
            .defeat_ids()
            .into_iter()
            .map(|(a, b)| {
                (
                    theory.get_argument_by_id(a).name().to_string(),
                    theory.get_argument_by_id(b).name().to_string(),
                )
            })
            .collect()
    }

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_scenario_b_arguments() {
        let theory = scenario_b(OrderingStrategy::LastLinkElitist);
        let descriptions = theory
            .iter_arguments()
            .map(|a| theory.describe(a))
            .collect::<Vec<String>>();
        assert_eq!(
            vec![
                "A1: a",
                "A2: r",
                "A3: -r",
                "A4: -s",
                "A5: A4 => t",
                "A6: A2 => q",
                "A7: A1 => p",
                "A8: A5, A6 -> -p",
            ],
            descriptions
        );
    }

    #[test]
    fn test_scenario_b_defeats() {
        let theory = scenario_b(OrderingStrategy::LastLinkElitist);
        assert_eq!(
            pairs(&[
                ("A2", "A3"),
                ("A3", "A2"),
                ("A3", "A6"),
                ("A3", "A8"),
                ("A8", "A7"),
            ]),
            defeat_names(&theory)
        );
    }

    #[test]
    fn test_scenario_b_attack_kinds() {
        let theory = scenario_b(OrderingStrategy::LastLinkElitist);
        let arg = |name: &str| theory.get_argument(name).unwrap();
        assert!(theory.undermines(arg("A3"), arg("A8")));
        assert!(!theory.rebuts(arg("A3"), arg("A8")));
        assert!(theory.rebuts(arg("A8"), arg("A7")));
        assert!(!theory.rebuts(arg("A7"), arg("A8")));
        assert!(!theory.attacks(arg("A7"), arg("A8")));
        assert!(!theory.undercuts(arg("A8"), arg("A7")));
        assert!(!theory.contrary_rebuts(arg("A8"), arg("A7")));
    }

    #[test]
    fn test_round_trip_is_deterministic() {
        let t0 = scenario_b(OrderingStrategy::LastLinkElitist);
        let t1 = scenario_b(OrderingStrategy::LastLinkElitist);
        assert_eq!(t0.defeat_ids(), t1.defeat_ids());
        let af0 = t0.to_framework("b").unwrap();
        let af1 = t1.to_framework("b").unwrap();
        let edges = |af: &AAFramework<String>| {
            af.iter_defeats()
                .map(|d| (d.attacker().id(), d.attacked().id()))
                .collect::<Vec<(usize, usize)>>()
        };
        assert_eq!(edges(&af0), edges(&af1));
        assert_eq!(t0.defeat_ids(), edges(&af0));
    }

    #[test]
    fn test_scenario_b_grounded() {
        let theory = scenario_b(OrderingStrategy::LastLinkElitist);
        let af = theory.to_framework("b").unwrap();
        let grounded = solvers::extensions(&af, Semantics::GR).unwrap();
        assert_eq!(
            vec!["A1", "A4", "A5"],
            grounded[0]
                .iter()
                .map(|a| a.label().as_str())
                .collect::<Vec<&str>>()
        );
    }

    #[test]
    fn test_nested_undermine() {
        let mut language = Language::new_with_labels(&["a", "b", "p", "q", "na"]);
        language.new_contrary(&"na", &"a").unwrap();
        let theory = build_arguments(
            language,
            &[("s1", vec!["p"], "q")],
            &[("d1", vec!["a", "b"], "p")],
            &[
                Premise::Ordinary("a"),
                Premise::Axiom("b"),
                Premise::Ordinary("na"),
            ],
            &[],
            &[],
            OrderingStrategy::default(),
        )
        .unwrap();
        let na = theory.arguments_by_conclusion(&"na").unwrap()[0];
        let q = theory.arguments_by_conclusion(&"q").unwrap()[0];
        let a = theory.arguments_by_conclusion(&"a").unwrap()[0];
        assert!(theory.undermines(na, q));
        assert!(theory.attacks(na, q));
        assert!(theory.contrary_undermines(na, q));
        assert!(theory.defeats(na, q));
        assert!(!theory.attacks(a, na));
    }

    #[test]
    fn test_axiom_not_undermined() {
        let mut language = Language::new_with_labels(&["a", "-a"]);
        language.new_contradictory(&"a", &"-a").unwrap();
        let theory = build_arguments(
            language,
            &[],
            &[],
            &[Premise::Axiom("a"), Premise::Ordinary("-a")],
            &[],
            &[],
            OrderingStrategy::default(),
        )
        .unwrap();
        assert_eq!(vec![(0, 1)], theory.defeat_ids());
    }

    #[test]
    fn test_undercut() {
        let mut language = Language::new_with_labels(&["a", "b", "p", "d1", "-d1"]);
        language.new_contradictory(&"d1", &"-d1").unwrap();
        let theory = build_arguments(
            language,
            &[],
            &[("d1", vec!["a"], "p"), ("d2", vec!["b"], "-d1")],
            &[Premise::Ordinary("a"), Premise::Ordinary("b")],
            &[("d2", "d1")],
            &[],
            OrderingStrategy::LastLinkElitist,
        )
        .unwrap();
        let p = theory.arguments_by_conclusion(&"p").unwrap()[0];
        let cut = theory.arguments_by_conclusion(&"-d1").unwrap()[0];
        assert!(theory.undercuts(cut, p));
        assert!(theory.is_strictly_weaker(cut, p));
        assert!(theory.defeats(cut, p));
        assert!(!theory.attacks(p, cut));
    }

    #[test]
    fn test_one_way_contrary_ignores_preferences() {
        let mut language = Language::new_with_labels(&["a", "b", "p", "q"]);
        language.new_contrary(&"q", &"p").unwrap();
        let theory = build_arguments(
            language,
            &[],
            &[("d1", vec!["a"], "p"), ("d2", vec!["b"], "q")],
            &[Premise::Ordinary("a"), Premise::Ordinary("b")],
            &[("d2", "d1")],
            &[],
            OrderingStrategy::LastLinkElitist,
        )
        .unwrap();
        let p = theory.arguments_by_conclusion(&"p").unwrap()[0];
        let q = theory.arguments_by_conclusion(&"q").unwrap()[0];
        assert!(theory.contrary_rebuts(q, p));
        assert!(theory.is_strictly_weaker(q, p));
        assert!(theory.defeats(q, p));
        assert!(!theory.attacks(p, q));
    }

    #[test]
    fn test_premise_preferences() {
        let mut language = Language::new_with_labels(&["a", "-a"]);
        language.new_contradictory(&"a", &"-a").unwrap();
        let theory = build_arguments(
            language,
            &[],
            &[],
            &[Premise::Ordinary("a"), Premise::Ordinary("-a")],
            &[],
            &[("a", "-a")],
            OrderingStrategy::LastLinkElitist,
        )
        .unwrap();
        assert_eq!(vec![(1, 0)], theory.defeat_ids());
    }

    #[test]
    fn test_last_link_vs_weakest_link() {
        let mut language = Language::new_with_labels(&["a", "b", "p", "-p"]);
        language.new_contradictory(&"p", &"-p").unwrap();
        let build = |strategy| {
            build_arguments(
                language.clone(),
                &[],
                &[("d1", vec!["a"], "p"), ("d2", vec!["b"], "-p")],
                &[Premise::Ordinary("a"), Premise::Ordinary("b")],
                &[("d2", "d1")],
                &[("a", "b")],
                strategy,
            )
            .unwrap()
        };
        // last link only looks at d1 > d2
        let last_link = build(OrderingStrategy::LastLinkElitist);
        assert_eq!(vec![(2, 3)], last_link.defeat_ids());
        // weakest link needs both the premises and the rules to be weaker
        let weakest_link = build(OrderingStrategy::WeakestLinkElitist);
        assert_eq!(vec![(2, 3), (3, 2)], weakest_link.defeat_ids());
    }

    #[test]
    fn test_cycle_guard() {
        let language = Language::new_with_labels(&["a", "b"]);
        let theory = build_arguments(
            language,
            &[("s1", vec!["a"], "b"), ("s2", vec!["b"], "a")],
            &[],
            &[Premise::Ordinary("a")],
            &[],
            &[],
            OrderingStrategy::default(),
        )
        .unwrap();
        assert_eq!(2, theory.n_arguments());
        assert_eq!("A2: A1 -> b", theory.describe(theory.get_argument_by_id(1)));
    }

    #[test]
    fn test_rule_without_antecedent() {
        let language = Language::new_with_labels(&["p", "q"]);
        let theory = build_arguments(
            language,
            &[],
            &[("d1", vec![], "p"), ("d2", vec!["p"], "q")],
            &[],
            &[],
            &[],
            OrderingStrategy::default(),
        )
        .unwrap();
        assert_eq!(2, theory.n_arguments());
        assert_eq!("A1: => p", theory.describe(theory.get_argument_by_id(0)));
        assert_eq!("A2: A1 => q", theory.describe(theory.get_argument_by_id(1)));
    }

    #[test]
    fn test_invalid_language() {
        let language = Language::new_with_labels(&["a", "p"]);
        let err = build_arguments(
            language,
            &[],
            &[("d1", vec!["a"], "z")],
            &[Premise::Ordinary("a")],
            &[],
            &[],
            OrderingStrategy::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err.downcast_ref::<ArgumentationError>(),
            Some(ArgumentationError::InvalidLanguage { .. })
        ));
    }

    #[test]
    fn test_firm_arguments_compare_rules() {
        let mut language = Language::new_with_labels(&["a", "b", "p", "-p"]);
        language.new_contradictory(&"p", &"-p").unwrap();
        for strategy in OrderingStrategy::iter() {
            let theory = build_arguments(
                language.clone(),
                &[],
                &[("d1", vec!["a"], "p"), ("d2", vec!["b"], "-p")],
                &[Premise::Axiom("a"), Premise::Axiom("b")],
                &[("d1", "d2")],
                &[],
                strategy,
            )
            .unwrap();
            assert_eq!(pairs(&[("A4", "A3")]), defeat_names(&theory), "{}", strategy);
        }
    }

    #[test]
    fn test_strict_arguments_compare_premises() {
        let mut language = Language::new_with_labels(&["a", "-a", "b", "-b"]);
        language.new_contradictory(&"a", &"-a").unwrap();
        language.new_contradictory(&"b", &"-b").unwrap();
        for strategy in OrderingStrategy::iter() {
            let theory = build_arguments(
                language.clone(),
                &[("s1", vec!["a"], "-b"), ("s2", vec!["b"], "-a")],
                &[],
                &[Premise::Ordinary("a"), Premise::Ordinary("b")],
                &[],
                &[("a", "b")],
                strategy,
            )
            .unwrap();
            assert_eq!(
                pairs(&[("A4", "A1"), ("A4", "A3")]),
                defeat_names(&theory),
                "{}",
                strategy
            );
        }
    }

    #[test]
    fn test_elitist_vs_democratic_defeats() {
        let mut language = Language::new_with_labels(&["a", "b", "x", "y", "p", "-p"]);
        language.new_contradictory(&"p", &"-p").unwrap();
        let build = |strategy| {
            build_arguments(
                language.clone(),
                &[],
                &[
                    ("d1", vec!["a"], "x"),
                    ("d2", vec!["x"], "p"),
                    ("d3", vec!["b"], "y"),
                    ("d4", vec!["y"], "-p"),
                ],
                &[Premise::Axiom("a"), Premise::Axiom("b")],
                &[("d1", "d3"), ("d2", "d4")],
                &[],
                strategy,
            )
            .unwrap()
        };
        for (strategy, p_defeats_np) in [
            (OrderingStrategy::WeakestLinkElitist, true),
            (OrderingStrategy::WeakestLinkDemocratic, false),
            (OrderingStrategy::LastLinkElitist, false),
            (OrderingStrategy::LastLinkDemocratic, false),
        ] {
            let theory = build(strategy);
            let p = theory.arguments_by_conclusion(&"p").unwrap()[0];
            let np = theory.arguments_by_conclusion(&"-p").unwrap()[0];
            assert!(theory.rebuts(p, np));
            assert_eq!(p_defeats_np, theory.defeats(p, np), "{}", strategy);
            assert!(theory.defeats(np, p), "{}", strategy);
        }
    }

    #[test]
    fn test_get_argument() {
        let theory = scenario_b(OrderingStrategy::default());
        assert_eq!(0, theory.get_argument("A1").unwrap().id());
        for name in ["A0", "A9", "B1", "A", "A01", "A+1", " A1"] {
            let err = theory.get_argument(name).unwrap_err();
            assert_eq!(
                Some(&ArgumentationError::NoSuchArgument(name.to_string())),
                err.downcast_ref::<ArgumentationError>()
            );
        }
        assert!(theory.arguments_by_conclusion(&"s").unwrap().is_empty());
        assert!(theory.arguments_by_conclusion(&"x").is_err());
    }
}
