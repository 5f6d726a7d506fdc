//! Typed errors raised by the library.
//!
//! Library functions return [`anyhow::Result`]; the errors callers may need to tell apart are built from
//! [`ArgumentationError`] values and can be recovered with [`anyhow::Error::downcast_ref`].
//!
//! ```
//! # use crustaspic::aspic::{AspicFramework, Language};
//! # use crustaspic::error::ArgumentationError;
//! let mut framework = AspicFramework::new_with_language(Language::new_with_labels(&["a", "b"]));
//! let err = framework.new_defeasible_rule(&"d1", &[&"a"], &"c").unwrap_err();
//! assert!(matches!(
//!     err.downcast_ref::<ArgumentationError>(),
//!     Some(ArgumentationError::InvalidLanguage { .. })
//! ));
//! ```

use crate::aa::Semantics;
use thiserror::Error;

/// The errors that may be raised while building or querying argumentation frameworks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentationError {
    /// A rule, a premise, a contrary or a preference refers to a literal that is not part of the language.
    #[error("{element:?} is not part of the language ({context})")]
    InvalidLanguage {
        /// the unknown element
        element: String,
        /// what was being built
        context: String,
    },
    /// Two rules share the same identifier.
    #[error("a rule with identifier {0:?} is already defined")]
    DuplicateRule(String),
    /// A literal is declared twice as a premise.
    #[error("literal {0:?} is already registered as a premise")]
    DuplicatePremise(String),
    /// An argument label does not refer to an argument of the framework.
    #[error("no such argument: {0}")]
    NoSuchArgument(String),
    /// A semantics defined as an intersection was applied to an empty set of extensions.
    #[error("cannot intersect an empty set of {0} extensions")]
    EmptyIntersection(Semantics),
}
