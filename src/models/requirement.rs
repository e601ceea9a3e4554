//! A version requirement such as `>=1.2`: an operator applied to a version
use tracing::instrument;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::parse_requirement;

use super::{Operator, Version};

/// Candidates are compared against the version as `candidate <op> version`.
/// Without an explicit operator a requirement means `=`.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub struct Requirement {
    operator: Operator,
    version: Version,
}

impl Requirement {
    pub fn new(operator: Operator, version: Version) -> Self {
        Requirement { operator, version }
    }

    #[instrument]
    pub fn parse(input: &str) -> Result<Self> {
        parse_requirement(input)
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn matches(&self, candidate: &Version) -> bool {
        self.operator.evaluate(candidate, &self.version)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version.to_dotted())
    }
}

impl FromStr for Requirement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Requirement::parse(s)
    }
}
