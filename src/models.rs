//! Data models for versions and the ways they get compared

pub mod version;
pub mod operator;
pub mod requirement;

pub use version::Version;
pub use operator::Operator;
pub use requirement::Requirement;
