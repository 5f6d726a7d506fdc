//! Structured argumentation following the ASPIC+ formalism.
//!
//! An [AspicFramework] gathers a [Language] (with an explicit contrariness relation), strict and defeasible [Rule]s,
//! a knowledge base of [Premise]s and preferences over defeasible rules and premises.
//! An [ArgumentationTheory] is the immutable set of arguments built from a framework, together with the attack and defeat relations;
//! it can be turned into an [AAFramework](crate::aa::AAFramework) to compute extensions.

mod argument;
pub use argument::ArgumentOrigin;
pub use argument::StructuredArgument;

mod argumentation_theory;
pub use argumentation_theory::build_arguments;
pub use argumentation_theory::ArgumentationTheory;

mod aspic_framework;
pub use aspic_framework::AspicFramework;

mod language;
pub use language::Language;
pub use language::Literal;

mod ordering;
pub use ordering::OrderingStrategy;
pub use ordering::Preorder;

mod rules;
pub use rules::Premise;
pub use rules::Rule;
pub use rules::RuleKind;
