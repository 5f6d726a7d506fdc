use super::{Language, Literal, Premise, Rule, RuleKind};
use crate::{error::ArgumentationError, utils::LabelType};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Handles an ASPIC+ framework: a language with its contrariness, strict and defeasible rules,
/// a knowledge base made of axioms and ordinary premises, and preferences over defeasible rules and premises.
///
/// Such kind of framework is initialized with its language. Rules, premises and preferences are defined after
/// with dedicated methods checking they only refer to known literals (and rules).
/// These methods check their input before updating the framework: in case an error is returned, the framework is unchanged.
///
/// Arguments are not built by the framework itself; see [ArgumentationTheory](crate::aspic::ArgumentationTheory).
///
/// # Example
///
/// ```
/// # use crustaspic::aspic::{AspicFramework, Language};
/// let mut language = Language::new_with_labels(&["a", "r", "-r", "-s", "s", "t", "q", "p", "-p"]);
/// language.new_contradictory(&"r", &"-r").unwrap();
/// language.new_contradictory(&"s", &"-s").unwrap();
/// language.new_contradictory(&"p", &"-p").unwrap();
/// let mut framework = AspicFramework::new_with_language(language);
/// framework.new_strict_rule(&"s1", &[&"t", &"q"], &"-p").unwrap();
/// framework.new_defeasible_rule(&"d1", &[&"-s"], &"t").unwrap();
/// framework.new_defeasible_rule(&"d2", &[&"r"], &"q").unwrap();
/// framework.new_defeasible_rule(&"d3", &[&"a"], &"p").unwrap();
/// for p in ["a", "r", "-r", "-s"] {
///     framework.new_ordinary_premise(&p).unwrap();
/// }
/// assert_eq!(4, framework.iter_rules().count());
/// ```
#[derive(Debug, Clone)]
pub struct AspicFramework<T>
where
    T: LabelType,
{
    language: Language<T>,
    rules: Vec<Rule<T>>,
    rule_id_to_index: HashMap<T, usize>,
    premises: Vec<Premise<T>>,
    is_premise: Vec<bool>,
    rule_preferences: Vec<(usize, usize)>,
    premise_preferences: Vec<(usize, usize)>,
}

impl<T> AspicFramework<T>
where
    T: LabelType,
{
    /// Builds an ASPIC+ framework given its language.
    pub fn new_with_language(language: Language<T>) -> Self {
        let n_literals = language.len();
        AspicFramework {
            language,
            rules: vec![],
            rule_id_to_index: HashMap::new(),
            premises: vec![],
            is_premise: vec![false; n_literals],
            rule_preferences: vec![],
            premise_preferences: vec![],
        }
    }

    /// Returns the language of the framework.
    pub fn language(&self) -> &Language<T> {
        &self.language
    }

    /// Adds a strict rule to the framework.
    ///
    /// The literals are given by their labels.
    /// If a literal is not part of the language, or if a rule with the same identifier exists, an error is returned.
    pub fn new_strict_rule(&mut self, id: &T, antecedents: &[&T], consequent: &T) -> Result<()> {
        self.new_rule(id, antecedents, consequent, RuleKind::Strict)
    }

    /// Adds a defeasible rule to the framework.
    ///
    /// The literals are given by their labels.
    /// If a literal is not part of the language, or if a rule with the same identifier exists, an error is returned.
    /// If the identifier of the rule is itself a literal of the language, this literal states the rule is applicable
    /// and its contraries undercut the arguments built on top of this rule.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aspic::{AspicFramework, Language};
    /// let language = Language::new_with_labels(&["a", "b", "c", "p", "q"]);
    /// let mut framework = AspicFramework::new_with_language(language);
    /// framework.new_defeasible_rule(&"d1", &[&"a", &"b"], &"p").unwrap();
    /// framework.new_defeasible_rule(&"d2", &[], &"q").unwrap();
    /// assert!(framework.new_defeasible_rule(&"d1", &[&"c"], &"q").is_err());
    /// assert!(framework.new_defeasible_rule(&"d3", &[&"x"], &"q").is_err());
    /// ```
    pub fn new_defeasible_rule(&mut self, id: &T, antecedents: &[&T], consequent: &T) -> Result<()> {
        self.new_rule(id, antecedents, consequent, RuleKind::Defeasible)
    }

    fn new_rule(&mut self, id: &T, antecedents: &[&T], consequent: &T, kind: RuleKind) -> Result<()> {
        let context = || {
            format!(
                "cannot add rule {:?} with {:?} as antecedents and {:?} as consequent",
                id, antecedents, consequent
            )
        };
        if self.rule_id_to_index.contains_key(id) {
            return Err(ArgumentationError::DuplicateRule(id.to_string())).with_context(context);
        }
        let mut antecedent_ids = antecedents
            .iter()
            .map(|a| self.literal_in_rule(a, id).map(|l| l.id()))
            .collect::<Result<Vec<usize>>>()
            .with_context(context)?;
        antecedent_ids.sort_unstable();
        antecedent_ids.dedup();
        let consequent_id = self
            .literal_in_rule(consequent, id)
            .with_context(context)?
            .id();
        let applicability = match kind {
            RuleKind::Defeasible => self.language.get_literal(id).ok().map(|l| l.id()),
            RuleKind::Strict => None,
        };
        self.rule_id_to_index.insert(id.clone(), self.rules.len());
        self.rules.push(Rule {
            id: id.clone(),
            antecedents: antecedent_ids,
            consequent: consequent_id,
            kind,
            applicability,
        });
        Ok(())
    }

    fn literal_in_rule(&self, label: &T, rule_id: &T) -> Result<&Literal<T>> {
        self.language.get_literal(label).map_err(|_| {
            ArgumentationError::InvalidLanguage {
                element: label.to_string(),
                context: format!("in rule {}", rule_id),
            }
            .into()
        })
    }

    /// Adds a premise to the knowledge base.
    ///
    /// An error is returned if the literal is not part of the language or if it is already a premise.
    pub fn new_premise(&mut self, premise: Premise<T>) -> Result<()> {
        let label = premise.literal();
        let context = || format!("cannot add premise {:?}", premise);
        let id = self
            .language
            .get_literal(label)
            .map_err(|_| {
                anyhow::Error::from(ArgumentationError::InvalidLanguage {
                    element: label.to_string(),
                    context: "in knowledge base".to_string(),
                })
            })
            .with_context(context)?
            .id();
        if self.is_premise[id] {
            return Err(ArgumentationError::DuplicatePremise(label.to_string())).with_context(context);
        }
        self.is_premise[id] = true;
        self.premises.push(premise);
        Ok(())
    }

    /// Adds an axiom (a premise that cannot be attacked) to the knowledge base.
    pub fn new_axiom(&mut self, literal: &T) -> Result<()> {
        self.new_premise(Premise::Axiom(literal.clone()))
    }

    /// Adds an ordinary (attackable) premise to the knowledge base.
    pub fn new_ordinary_premise(&mut self, literal: &T) -> Result<()> {
        self.new_premise(Premise::Ordinary(literal.clone()))
    }

    /// Declares the defeasible rule `weaker` is not stronger than the defeasible rule `stronger`.
    ///
    /// Preferences are closed by reflexivity and transitivity when arguments are built:
    /// `weaker` is strictly weaker than `stronger` unless the converse is also (transitively) declared.
    /// An error is returned if one of the identifiers does not refer to a defeasible rule.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aspic::{AspicFramework, Language};
    /// let language = Language::new_with_labels(&["a", "p", "q"]);
    /// let mut framework = AspicFramework::new_with_language(language);
    /// framework.new_defeasible_rule(&"d1", &[&"a"], &"p").unwrap();
    /// framework.new_defeasible_rule(&"d2", &[&"a"], &"q").unwrap();
    /// framework.new_strict_rule(&"s1", &[&"p"], &"q").unwrap();
    /// framework.new_rule_preference(&"d1", &"d2").unwrap();
    /// assert!(framework.new_rule_preference(&"d1", &"s1").is_err());
    /// ```
    pub fn new_rule_preference(&mut self, weaker: &T, stronger: &T) -> Result<()> {
        let context = || format!("cannot set rule {:?} as weaker than {:?}", weaker, stronger);
        let weaker_index = self.defeasible_rule_index(weaker).with_context(context)?;
        let stronger_index = self.defeasible_rule_index(stronger).with_context(context)?;
        self.rule_preferences.push((weaker_index, stronger_index));
        Ok(())
    }

    fn defeasible_rule_index(&self, id: &T) -> Result<usize> {
        match self.rule_id_to_index.get(id) {
            Some(i) if self.rules[*i].is_defeasible() => Ok(*i),
            _ => Err(ArgumentationError::InvalidLanguage {
                element: id.to_string(),
                context: "not a defeasible rule".to_string(),
            }
            .into()),
        }
    }

    /// Declares the premise `weaker` is not stronger than the premise `stronger`.
    ///
    /// Preferences are closed by reflexivity and transitivity when arguments are built.
    /// An error is returned if one of the literals is not part of the language.
    pub fn new_premise_preference(&mut self, weaker: &T, stronger: &T) -> Result<()> {
        let context = || format!("cannot set premise {:?} as weaker than {:?}", weaker, stronger);
        let weaker_id = self.language.get_literal(weaker).with_context(context)?.id();
        let stronger_id = self.language.get_literal(stronger).with_context(context)?.id();
        self.premise_preferences.push((weaker_id, stronger_id));
        Ok(())
    }

    /// Provides an iterator to the rules, in declaration order.
    ///
    /// The index of a rule in this iteration is the one used by arguments to refer to it.
    pub fn iter_rules(&self) -> impl Iterator<Item = &Rule<T>> + '_ {
        self.rules.iter()
    }

    /// Returns the rule with the given index.
    ///
    /// # Panics
    ///
    /// Panics if no rule has this index.
    pub fn get_rule_by_index(&self, index: usize) -> &Rule<T> {
        &self.rules[index]
    }

    /// Returns the number of rules.
    pub fn n_rules(&self) -> usize {
        self.rules.len()
    }

    /// Provides an iterator to the premises, in declaration order.
    pub fn iter_premises(&self) -> impl Iterator<Item = &Premise<T>> + '_ {
        self.premises.iter()
    }

    pub(crate) fn rule_preferences(&self) -> &[(usize, usize)] {
        &self.rule_preferences
    }

    pub(crate) fn premise_preferences(&self) -> &[(usize, usize)] {
        &self.premise_preferences
    }
}
