//! Parses the operator of a version requirement, for example the `>=` in >=3.2.1
use super::common::VResult;
use nom::{
    character::complete::multispace0,
    combinator::{opt, rest, value},
    sequence::{tuple, preceded},
    bytes::complete::tag,
    branch::alt,
};

use crate::models::Operator;

/// Splits a requirement into its optional operator and the version text
/// that follows it. The version text is left for `Version::parse`.
pub fn requirement(input: &str) -> VResult<(Option<Operator>, &str)> {
    tuple((
        preceded(multispace0, opt(operator)),
        rest,
    ))(input)
}

/// Two character symbols are tried first so `<=` never resolves as `<`
pub fn operator(input: &str) -> VResult<Operator> {
    alt((
        value(Operator::GreaterThanOrEqual, tag(">=")),
        value(Operator::LessThanOrEqual, tag("<=")),
        value(Operator::GreaterThan, tag(">")),
        value(Operator::LessThan, tag("<")),
        value(Operator::Equal, tag("="))
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator() {
        let input = ">=";
        let (rest, result) = operator(input).unwrap();

        assert_eq!(rest, "");
        assert_eq!(result, Operator::GreaterThanOrEqual);

        let (rest, result) = operator("<=1").unwrap();
        assert_eq!(rest, "1");
        assert_eq!(result, Operator::LessThanOrEqual);

        let (rest, result) = operator("<1").unwrap();
        assert_eq!(rest, "1");
        assert_eq!(result, Operator::LessThan);
    }

    #[test]
    fn test_requirement() {
        let input = ">=1.2.3";
        let (rest, (operator, version)) = requirement(input).unwrap();

        assert_eq!(rest, "");
        assert_eq!(operator, Some(Operator::GreaterThanOrEqual));
        assert_eq!(version, "1.2.3");
    }

    #[test]
    fn test_requirement_leaves_version_text() {
        let (_, (operator, version)) = requirement("  <  2 ").unwrap();
        assert_eq!(operator, Some(Operator::LessThan));
        assert_eq!(version, "  2 ");

        let (_, (operator, version)) = requirement("1.4").unwrap();
        assert_eq!(operator, None);
        assert_eq!(version, "1.4");

        let (_, (operator, version)) = requirement("=>1").unwrap();
        assert_eq!(operator, Some(Operator::Equal));
        assert_eq!(version, ">1");
    }
}
