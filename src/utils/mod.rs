//! Miscellaneous components used in the library.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

mod grounded_extension_computer;
pub(crate) use grounded_extension_computer::grounded_extension;

/// The trait for argument and literal labels.
///
/// Arguments and literals may be labeled by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize], [String] and `&str` implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}
