//! The dotted numeric version value: parsing, ordering and rendering.
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{event, instrument, Level};

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::parser::parse_segment;
use crate::source::VersionSource;

/// An immutable `major.minor.patch` triple. Missing trailing segments are
/// stored as 0, so `1.2` and `1.2.0` are the same version.
///
/// Ordering is lexicographic over (major, minor, patch), which is what the
/// derives give us given the field order.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Clone, Copy, Default)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version { major, minor, patch }
    }

    /// Parses a possibly absent input. `None` is a `NullInput` error.
    pub fn of(input: Option<&str>) -> Result<Self> {
        match input {
            Some(input) => Self::parse(input),
            None => Err(Error::NullInput),
        }
    }

    /// Parses `major[.minor[.patch]]` after trimming surrounding whitespace.
    ///
    /// Empty segments are skipped and segments past the third are ignored
    /// without being checked. Each of the first three segments must
    /// be a plain unsigned decimal integer.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_format(input, "version is blank"));
        }

        let segments: Vec<&str> = trimmed.split('.').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(Error::invalid_format(input, "version has no segments"));
        }

        let mut parts = [0u32; 3];
        for (part, segment) in parts.iter_mut().zip(&segments) {
            *part = Self::segment_value(segment).map_err(|e| match e {
                Error::InvalidFormat { reason, .. } => Error::invalid_format(
                    input,
                    format!("segment {:?} is not a number: {}", segment, reason),
                ),
                e => e,
            })?;
        }

        let [major, minor, patch] = parts;
        let version = Version::new(major, minor, patch);
        event!(Level::DEBUG, "Parsed version: {:?}", version);

        Ok(version)
    }

    /// Strictly parses a single segment, e.g. `"1"` is 1 and `"a"` is an error
    pub fn segment_value(segment: &str) -> Result<u32> {
        parse_segment(segment)
    }

    /// Looks the raw version string up from the source and parses it
    #[instrument(skip(source))]
    pub fn from_source<S: VersionSource + ?Sized>(source: &S) -> Result<Self> {
        match source.version_string()? {
            Some(raw) => {
                event!(Level::DEBUG, "Version source yielded: '{}'", raw);
                Self::parse(&raw)
            },
            None => {
                event!(Level::WARN, "No version from source {}", std::any::type_name::<S>());
                Err(Error::VersionNotFound)
            },
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// The parseable `major.minor.patch` form
    pub fn to_dotted(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Version{{major={}, minor={}, patch={}}}",
            self.major, self.minor, self.patch
        )
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_dotted())
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(de::Error::custom)
    }
}
