//! Birth/survival rules parsed from `B<counts>S<counts>` rulestrings.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Largest neighbour count a 3D Moore neighbourhood can produce.
pub const MAX_NEIGHBORS: u32 = 26;

/// Neighbour counts that cause a dead cell to be born or let a live cell survive.
///
/// Counts above [`MAX_NEIGHBORS`] are accepted but never match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub birth: BTreeSet<u32>,
    pub survival: BTreeSet<u32>,
}

impl Rule {
    pub fn new<B, S>(birth: B, survival: S) -> Self
    where
        B: IntoIterator<Item = u32>,
        S: IntoIterator<Item = u32>,
    {
        Self {
            birth: birth.into_iter().collect(),
            survival: survival.into_iter().collect(),
        }
    }

    /// Whether a dead cell with `alive_neighbors` live neighbours is born.
    #[inline]
    pub fn births(&self, alive_neighbors: usize) -> bool {
        u32::try_from(alive_neighbors).map_or(false, |n| self.birth.contains(&n))
    }

    /// Whether a live cell with `alive_neighbors` live neighbours survives.
    #[inline]
    pub fn survives(&self, alive_neighbors: usize) -> bool {
        u32::try_from(alive_neighbors).map_or(false, |n| self.survival.contains(&n))
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::new([3], [2, 3])
    }
}

/// Parse a rulestring such as `"B3S2,3"` or `"B6S5,6,7"`.
///
/// Either list may be empty (`"B3S"` never survives). No whitespace is
/// accepted anywhere.
pub fn parse_rule(rulestring: &str) -> Result<Rule> {
    let format_err = || Error::InvalidRuleFormat(rulestring.to_string());

    let body = rulestring.strip_prefix('B').ok_or_else(format_err)?;
    let (birth, survival) = body.split_once('S').ok_or_else(format_err)?;
    if survival.contains('S') {
        return Err(format_err());
    }

    let rule = Rule {
        birth: parse_counts(birth)?,
        survival: parse_counts(survival)?,
    };
    tracing::trace!(rulestring, %rule, "parsed rule");
    Ok(rule)
}

fn parse_counts(list: &str) -> Result<BTreeSet<u32>> {
    if list.is_empty() {
        return Ok(BTreeSet::new());
    }

    list.split(',')
        .map(|token| {
            // u32::from_str would also take a leading '+'
            if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::InvalidRuleToken(token.to_string()));
            }
            token
                .parse::<u32>()
                .map_err(|_| Error::InvalidRuleToken(token.to_string()))
        })
        .collect()
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_rule(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(counts: &BTreeSet<u32>) -> String {
            counts
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }
        write!(f, "B{}S{}", join(&self.birth), join(&self.survival))
    }
}
