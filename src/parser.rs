//! Versions, operator symbols and requirements each have a small textual
//! format that needs to be parsed.

mod common;
mod version;

use nom::error::{VerboseError, VerboseErrorKind};
use nom::combinator::all_consuming;

use tracing::{event, Level};

use self::{
    common::segment,
    version::{operator, requirement},
};

use crate::error::{Error, Result};
use crate::models::{Operator, Requirement, Version};

/// Runs the parser over the whole input and returns the parsed result.
/// Errors are unwrapped into an `InvalidFormat` whose reason carries some
/// additional context on where parsing failed.
fn parse_with_better_errors<'a, T>(input: &'a str, parser: impl Fn(&'a str) -> common::VResult<'a, T>) -> Result<T> {
    match all_consuming(parser)(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(e) => {
            match e {
                nom::Err::Error(inner_e) | nom::Err::Failure(inner_e) => {
                    Err(Error::invalid_format(input, describe(input, inner_e)))
                },
                _ => {
                    Err(Error::invalid_format(input, e.to_string()))
                },
            }
        }
    }
}

fn describe(input: &str, e: VerboseError<&str>) -> String {
    event!(Level::DEBUG, "Parse failure: {:?}", e);
    match e.errors.first() {
        Some((remaining, kind)) => {
            let offset = input.len().saturating_sub(remaining.len());
            let kind = match kind {
                VerboseErrorKind::Char(c) => format!("expected '{}'", c),
                VerboseErrorKind::Context(ctx) => format!("in {}", ctx),
                VerboseErrorKind::Nom(kind) => format!("{:?}", kind),
            };
            format!("{} at offset {}", kind, offset)
        },
        None => "unparseable input".to_string(),
    }
}

/// Strictly parses one version segment as an unsigned decimal integer
pub fn parse_segment(input: &str) -> Result<u32> {
    parse_with_better_errors(input, segment)
}

/// Resolves an operator from its exact symbol
pub fn parse_operator(input: &str) -> Result<Operator> {
    parse_with_better_errors(input, operator).map_err(|_| Error::UnknownOperator {
        symbol: input.to_string(),
    })
}

/// Parses an optional operator followed by a version, e.g. `>= 1.2`
pub fn parse_requirement(input: &str) -> Result<Requirement> {
    let (operator, version) = parse_with_better_errors(input, requirement)?;
    let version = Version::parse(version).map_err(|e| match e {
        Error::InvalidFormat { reason, .. } => Error::invalid_format(input, reason),
        e => e,
    })?;

    Ok(Requirement::new(operator.unwrap_or(Operator::Equal), version))
}
