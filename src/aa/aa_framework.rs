use super::{Argument, ArgumentSet};
use crate::{error::ArgumentationError, utils::LabelType};
use anyhow::{anyhow, Context, Result};

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// The framework is a named directed graph whose nodes are the arguments and whose edges are the defeats.
/// Arguments are addressed by their ids; each argument keeps the lists of its incoming and outgoing defeats
/// as plain index lists, in the order the defeats were added.
#[derive(Debug, Clone)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    name: String,
    arguments: ArgumentSet<T>,
    defeats: Vec<(usize, usize)>,
    defeats_from: Vec<Vec<usize>>,
    defeats_to: Vec<Vec<usize>>,
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new_with_argument_set("", ArgumentSet::default())
    }
}

/// A defeat, represented as a couple of two arguments.
///
/// Defeats are built by [`AAFramework`] objects.
pub struct Defeat<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Defeat<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use crustaspic::aa::Defeat;
    /// # use crustaspic::utils::LabelType;
    /// fn describe_defeat<T: LabelType>(defeat: &Defeat<T>) {
    ///     println!("{} defeats {}", defeat.attacker(), defeat.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the defeated argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

/// Builds a named AA framework given its arguments and its defeats.
///
/// An error is returned if a defeat refers to an argument that is not in the provided list.
///
/// # Example
///
/// ```
/// # use crustaspic::aa::build_af;
/// let af = build_af("example", &["b", "c", "d"], &[("b", "c"), ("c", "d"), ("d", "c")]).unwrap();
/// assert_eq!("example", af.name());
/// assert_eq!(3, af.n_arguments());
/// assert_eq!(3, af.n_defeats());
/// ```
pub fn build_af<T>(name: &str, arguments: &[T], defeats: &[(T, T)]) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    let mut af = AAFramework::new_with_argument_set(name, ArgumentSet::new_with_labels(arguments));
    for (from, to) in defeats {
        af.new_defeat(from, to)
            .with_context(|| format!(r#"while building framework "{}""#, name))?;
    }
    Ok(af)
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework with no defeats.
    ///
    /// The name and the set of arguments used in the framework are provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set("af", arguments);
    /// assert_eq!(3, framework.argument_set().len());
    /// assert_eq!(0, framework.iter_defeats().count());
    /// ```
    pub fn new_with_argument_set(name: &str, arguments: ArgumentSet<T>) -> Self {
        let defeats_from = (0..arguments.len()).map(|_| vec![]).collect();
        let defeats_to = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            name: name.to_string(),
            arguments,
            defeats: vec![],
            defeats_from,
            defeats_to,
        }
    }

    /// Returns the name of the framework.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a new defeat given the labels of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// If the defeat already exists, it is added another time (no checks are made for existence).
    pub fn new_defeat(&mut self, from: &T, to: &T) -> Result<()> {
        let context = || format!("cannot add a defeat from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        self.push_defeat(attacker_id, attacked_id);
        Ok(())
    }

    /// Adds a new defeat given the ids of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set("af", arguments);
    /// framework.new_defeat_by_ids(0, 1).unwrap(); // "a" defeats "b"
    /// assert_eq!(1, framework.n_defeats());
    /// assert!(framework.new_defeat_by_ids(0, 3).is_err());
    /// ```
    pub fn new_defeat_by_ids(&mut self, from: usize, to: usize) -> Result<()> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(anyhow!(
                "cannot add a defeat from identifiers {:?} to {:?}; the framework has {} argument(s)",
                from,
                to,
                n_arguments
            ));
        }
        self.push_defeat(from, to);
        Ok(())
    }

    fn push_defeat(&mut self, from: usize, to: usize) {
        self.defeats.push((from, to));
        self.defeats_from[from].push(self.defeats.len() - 1);
        self.defeats_to[to].push(self.defeats.len() - 1);
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the defeats, in insertion order.
    pub fn iter_defeats(&self) -> impl Iterator<Item = Defeat<'_, T>> + '_ {
        self.defeats.iter().map(|(a, b)| self.defeat_of(*a, *b))
    }

    fn defeat_of(&self, attacker: usize, attacked: usize) -> Defeat<'_, T> {
        Defeat(
            self.arguments.get_argument_by_id(attacker),
            self.arguments.get_argument_by_id(attacked),
        )
    }

    fn checked_id(&self, arg: &Argument<T>) -> Result<usize> {
        match self.arguments.get_argument_index(arg.label())? {
            id if id == arg.id() => Ok(id),
            _ => Err(ArgumentationError::NoSuchArgument(arg.label().to_string()).into()),
        }
    }

    /// Provides an iterator to the defeats that have the given argument as attacker.
    ///
    /// An [ArgumentationError::NoSuchArgument] error is returned if the argument does not belong to this framework.
    pub fn iter_defeats_from(&self, arg: &Argument<T>) -> Result<impl Iterator<Item = Defeat<'_, T>> + '_> {
        let id = self.checked_id(arg)?;
        Ok(self.defeats_from[id].iter().map(|i| {
            let (a, b) = self.defeats[*i];
            self.defeat_of(a, b)
        }))
    }

    /// Provides an iterator to the defeats that have the given argument as attacked.
    ///
    /// An [ArgumentationError::NoSuchArgument] error is returned if the argument does not belong to this framework.
    pub fn iter_defeats_to(&self, arg: &Argument<T>) -> Result<impl Iterator<Item = Defeat<'_, T>> + '_> {
        let id = self.checked_id(arg)?;
        Ok(self.defeats_to[id].iter().map(|i| {
            let (a, b) = self.defeats[*i];
            self.defeat_of(a, b)
        }))
    }

    /// Returns the arguments defeating the given one, in defeat insertion order.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustaspic::aa::build_af;
    /// let af = build_af("af", &["b", "c", "d"], &[("b", "c"), ("c", "d"), ("d", "c")]).unwrap();
    /// let c = af.argument_set().get_argument(&"c").unwrap();
    /// let attackers = af.incoming(c).unwrap().iter().map(|a| *a.label()).collect::<Vec<&str>>();
    /// assert_eq!(vec!["b", "d"], attackers);
    /// ```
    pub fn incoming(&self, arg: &Argument<T>) -> Result<Vec<&Argument<T>>> {
        Ok(self.iter_defeats_to(arg)?.map(|d| d.attacker()).collect())
    }

    /// Returns the arguments defeated by the given one, in defeat insertion order.
    pub fn outgoing(&self, arg: &Argument<T>) -> Result<Vec<&Argument<T>>> {
        Ok(self.iter_defeats_from(arg)?.map(|d| d.attacked()).collect())
    }

    /// Iterates over the ids of the arguments defeating the argument with the given id.
    pub(crate) fn attacker_ids(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.defeats_to[id].iter().map(|i| self.defeats[*i].0)
    }

    /// Iterates over the ids of the arguments defeated by the argument with the given id.
    pub(crate) fn attacked_ids(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        self.defeats_from[id].iter().map(|i| self.defeats[*i].1)
    }

    /// Returns the number of defeats the argument with the given id receives.
    pub(crate) fn n_attackers_of_id(&self, id: usize) -> usize {
        self.defeats_to[id].len()
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of defeats in this framework.
    pub fn n_defeats(&self) -> usize {
        self.defeats.len()
    }
}
