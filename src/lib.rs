//! Dotted numeric versions (`major[.minor[.patch]]`), the operators used to
//! compare them and requirements built from the two.
//!
//! ```
//! use dotted_version::{Operator, Requirement, Version};
//!
//! let version = Version::parse("1.2.3")?;
//! assert!(version > Version::parse("1.2")?);
//! assert!(Operator::of(">=")?.evaluate(&version, &Version::new(1, 2, 3)));
//! assert!(Requirement::parse("<2")?.matches(&version));
//! # Ok::<(), dotted_version::Error>(())
//! ```

mod error;
mod parser;

pub mod models;
pub mod source;

pub use error::{Error, Result};
pub use models::{Operator, Requirement, Version};
pub use source::{EnvSource, ManifestSource, PackageSource, VersionSource};
