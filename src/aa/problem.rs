use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The semantics associated with a problem.
///
/// Semantics can be read from their short name (the one used in problem strings) or from their long name.
///
/// ```
/// # use crustaspic::aa::Semantics;
/// # use std::str::FromStr;
/// assert_eq!(Semantics::SST, Semantics::from_str("semi_stable").unwrap());
/// assert_eq!(Semantics::SST, Semantics::from_str("sst").unwrap());
/// assert_eq!("SST", Semantics::SST.as_ref());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Semantics {
    /// The conflict-free sets
    #[strum(to_string = "CF", serialize = "conflict_free")]
    CF,
    /// The admissible sets
    #[strum(to_string = "AD", serialize = "admissible")]
    AD,
    /// The complete semantics
    #[strum(to_string = "CO", serialize = "complete")]
    CO,
    /// The grounded semantics
    #[strum(to_string = "GR", serialize = "grounded")]
    GR,
    /// The preferred semantics
    #[strum(to_string = "PR", serialize = "preferred")]
    PR,
    /// The stable semantics
    #[strum(to_string = "ST", serialize = "stable")]
    ST,
    /// The semi-stable semantics
    #[strum(to_string = "SST", serialize = "semi_stable")]
    SST,
    /// The ideal semantics
    #[strum(to_string = "ID", serialize = "ideal")]
    ID,
    /// The eager semantics
    #[strum(to_string = "EG", serialize = "eager")]
    EG,
}

impl Semantics {
    /// Returns `true` iff the semantics always admits exactly one extension.
    pub fn is_single_status(&self) -> bool {
        matches!(self, Semantics::GR | Semantics::ID | Semantics::EG)
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Query {
    /// Enumerate all the extensions
    EE,
    /// Count the extensions
    CE,
    /// Compute a single extension
    SE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns a short string representing the query.
    ///
    /// The string corresponds to the two letters query as defined in ICCMA competitions.
    pub fn to_short_str(&self) -> &str {
        match self {
            Query::EE => "EE",
            Query::CE => "CE",
            Query::SE => "SE",
            Query::DC => "DC",
            Query::DS => "DS",
        }
    }

    /// Returns `true` iff the query is about a specific argument.
    pub fn requires_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }
}

impl TryFrom<&str> for Query {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "ee" => Ok(Query::EE),
            "ce" => Ok(Query::CE),
            "se" => Ok(Query::SE),
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            _ => Err(anyhow!(r#"undefined query "{}""#, value)),
        }
    }
}

/// Iterates over all the problem strings handled by the library, following the `QUERY-SEMANTICS` pattern.
///
/// ```
/// # use crustaspic::aa::iter_problem_strings;
/// assert!(iter_problem_strings().any(|p| p == "EE-SST"));
/// ```
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().flat_map(|q| {
        Semantics::iter().map(move |s| format!("{}-{}", q.to_short_str(), s.as_ref()))
    })
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).with_context(context)?;
            let semantics = Semantics::from_str(&problem[1 + n..])
                .map_err(|_| anyhow!(r#"undefined semantics "{}""#, &problem[1 + n..]))
                .with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}
