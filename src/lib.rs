//! Crustaspic is a structured (ASPIC+) and abstract argumentation reasoner.
//!
//! Structured argumentation theories are built in the [aspic] module; their defeat graphs are
//! [AAFramework](aa::AAFramework)s on which the [solvers] compute extensions under the classical
//! Dung semantics (conflict-free, admissible, complete, grounded, preferred, stable, semi-stable, ideal and eager).
//!
//! ```
//! # use crustaspic::aa::Semantics;
//! # use crustaspic::aspic::{build_arguments, Language, OrderingStrategy, Premise};
//! # use crustaspic::solvers::extensions;
//! let mut language = Language::new_with_labels(&["p", "q", "-p"]);
//! language.new_contradictory(&"p", &"-p").unwrap();
//! let theory = build_arguments(
//!     language,
//!     &[],
//!     &[("d1", vec!["q"], "-p")],
//!     &[Premise::Ordinary("p"), Premise::Axiom("q")],
//!     &[],
//!     &[],
//!     OrderingStrategy::default(),
//! )
//! .unwrap();
//! let af = theory.to_framework("example").unwrap();
//! let grounded = extensions(&af, Semantics::GR).unwrap();
//! assert_eq!(1, grounded.len());
//! ```

#![warn(missing_docs)]

pub mod aa;

pub mod aspic;

pub mod error;

pub mod io;

pub mod solvers;

pub mod utils;
