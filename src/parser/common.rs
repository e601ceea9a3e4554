//! Common parsing functions used by the various parsers
use nom::{
    IResult,
    error::VerboseError,
    combinator::map_res,
    character::complete::digit1,
};

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// A single numeric version segment: ASCII digits only, no sign, must fit a u32
pub fn segment(input: &str) -> VResult<u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment() {
        let (rest, result) = segment("123").unwrap();
        assert_eq!(rest, "");
        assert_eq!(result, 123);

        let (rest, result) = segment("007.1").unwrap();
        assert_eq!(rest, ".1");
        assert_eq!(result, 7);
    }

    #[test]
    fn test_segment_rejects_non_digits() {
        assert!(segment("a").is_err());
        assert!(segment("-1").is_err());
        assert!(segment("+1").is_err());
        assert!(segment("").is_err());
    }

    #[test]
    fn test_segment_overflow() {
        assert!(segment("4294967295").is_ok());
        assert!(segment("4294967296").is_err());
    }
}
