//! The closed set of comparison operators used to compare two versions
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::parse_operator;

use super::Version;

#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Operator {
    Equal,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Equal,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
    ];

    /// Resolves an operator from its exact, case-sensitive symbol
    pub fn of(symbol: &str) -> Result<Self> {
        parse_operator(symbol)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Whether `left <op> right` holds
    pub fn evaluate(&self, left: &Version, right: &Version) -> bool {
        match self {
            Operator::Equal => left == right,
            Operator::LessThan => left < right,
            Operator::LessThanOrEqual => left <= right,
            Operator::GreaterThan => left > right,
            Operator::GreaterThanOrEqual => left >= right,
        }
    }

    /// Whether an already computed `left.cmp(right)` satisfies the operator
    pub fn test(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering.is_eq(),
            Operator::LessThan => ordering.is_lt(),
            Operator::LessThanOrEqual => ordering.is_le(),
            Operator::GreaterThan => ordering.is_gt(),
            Operator::GreaterThanOrEqual => ordering.is_ge(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operator::of(s)
    }
}
