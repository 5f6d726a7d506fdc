use crate::utils::LabelType;

/// The kind of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// A strict rule: its consequent holds whenever its antecedents hold.
    Strict,
    /// A defeasible rule: its consequent presumably holds when its antecedents hold.
    Defeasible,
}

/// A rule of an ASPIC+ framework.
///
/// Rules are built by [AspicFramework](crate::aspic::AspicFramework) objects, which ensure they only refer to literals of the language.
/// Antecedents are stored as a set of literal ids (sorted, without duplicates).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<T>
where
    T: LabelType,
{
    pub(crate) id: T,
    pub(crate) antecedents: Vec<usize>,
    pub(crate) consequent: usize,
    pub(crate) kind: RuleKind,
    pub(crate) applicability: Option<usize>,
}

impl<T> Rule<T>
where
    T: LabelType,
{
    /// Returns the identifier of the rule.
    pub fn id(&self) -> &T {
        &self.id
    }

    /// Returns the kind of the rule.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Returns `true` iff the rule is defeasible.
    pub fn is_defeasible(&self) -> bool {
        self.kind == RuleKind::Defeasible
    }

    /// Returns the ids of the antecedent literals, sorted.
    pub fn antecedent_ids(&self) -> &[usize] {
        &self.antecedents
    }

    /// Returns the id of the consequent literal.
    pub fn consequent_id(&self) -> usize {
        self.consequent
    }

    /// Returns the id of the literal stating this rule is applicable, if any.
    ///
    /// Such a literal exists when the identifier of a defeasible rule is also a literal of the language.
    /// Arguments concluding a contrary of it undercut the arguments built on top of this rule.
    pub fn applicability_id(&self) -> Option<usize> {
        self.applicability
    }
}

/// A premise of the knowledge base.
///
/// The kind of a premise is chosen once, when the premise is declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Premise<T>
where
    T: LabelType,
{
    /// A certain premise, that cannot be attacked.
    Axiom(T),
    /// An attackable premise.
    Ordinary(T),
}

impl<T> Premise<T>
where
    T: LabelType,
{
    /// Returns the literal label of the premise.
    pub fn literal(&self) -> &T {
        match self {
            Premise::Axiom(l) | Premise::Ordinary(l) => l,
        }
    }

    /// Returns `true` iff the premise is an ordinary one.
    pub fn is_ordinary(&self) -> bool {
        matches!(self, Premise::Ordinary(_))
    }
}
