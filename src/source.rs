//! Sources a raw version string can be looked up from. The version itself is
//! parsed by `Version::from_source`; a source only has to find the string.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::{event, instrument, Level};

use std::env;
use std::path::PathBuf;

/// Yields the raw version string for whatever it describes, or `None` when
/// there is no version to be found. Errors are reserved for lookups that
/// could not be performed at all.
pub trait VersionSource {
    fn version_string(&self) -> Result<Option<String>>;
}

impl<F> VersionSource for F
where
    F: Fn() -> Option<String>,
{
    fn version_string(&self) -> Result<Option<String>> {
        Ok(self())
    }
}

/// The version this crate was built as
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageSource;

impl VersionSource for PackageSource {
    fn version_string(&self) -> Result<Option<String>> {
        Ok(Some(env!("CARGO_PKG_VERSION").to_string()))
    }
}

/// Reads the version from an environment variable
#[derive(Debug, Clone)]
pub struct EnvSource {
    var: String,
}

impl EnvSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl VersionSource for EnvSource {
    #[instrument]
    fn version_string(&self) -> Result<Option<String>> {
        match env::var(&self.var) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(anyhow!("Environment variable {} is not valid unicode", self.var))
            },
        }
    }
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<Package>,
}

#[derive(Deserialize)]
struct Package {
    version: Option<toml::Value>,
}

/// Reads `package.version` from a Cargo manifest
#[derive(Debug, Clone)]
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VersionSource for ManifestSource {
    #[instrument]
    fn version_string(&self) -> Result<Option<String>> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Could not read manifest: {}", self.path.display()))?;
        let manifest: Manifest = toml::from_str(&raw)
            .with_context(|| format!("Could not parse manifest: {}", self.path.display()))?;

        // Inherited versions (`version.workspace = true`) are tables, not strings
        let version = manifest
            .package
            .and_then(|p| p.version)
            .and_then(|v| v.as_str().map(String::from));

        event!(Level::DEBUG, "Manifest version: {:?}", version);
        Ok(version)
    }
}
