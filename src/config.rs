//! Demo parameters, optionally read from `unsafe-demos.toml`.
//!
//! Every field has a default, so a file only needs the values it changes:
//!
//! ```toml
//! [cross_boundary]
//! foreign_write = 42
//!
//! [array_overrun]
//! seeds = [0, 15]
//! adjacent = 7
//! ```

use crate::array_overrun::ARRAY_LEN;
use crate::error::{DemoError, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "unsafe-demos.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrossBoundaryConfig {
    /// Value of the Rust variable before the C call.
    pub managed_initial: i32,
    /// Value the C routine writes through the pointer it receives.
    pub foreign_write: i32,
    /// Value Rust writes into the C variable via the returned distance.
    pub managed_overwrite: i32,
}

impl Default for CrossBoundaryConfig {
    fn default() -> Self {
        Self {
            managed_initial: 5,
            foreign_write: 10,
            managed_overwrite: 4666,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArrayOverrunConfig {
    /// Indices pre-populated with their own value; the rest stay zero.
    pub seeds: Vec<usize>,
    /// The scalar declared next to the array.
    pub adjacent: i32,
}

impl Default for ArrayOverrunConfig {
    fn default() -> Self {
        Self {
            seeds: vec![3, 9, 11],
            adjacent: 2333,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub cross_boundary: CrossBoundaryConfig,
    pub array_overrun: ArrayOverrunConfig,
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| DemoError::io(path, err))?;
        Self::from_toml_str(&content)
    }

    /// Like [`DemoConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("loading config from {}", path.display());
                Self::from_toml_str(&content)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(DemoError::io(path, err)),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(&index) = self
            .array_overrun
            .seeds
            .iter()
            .find(|&&index| index >= ARRAY_LEN)
        {
            return Err(DemoError::SeedOutOfRange {
                index,
                capacity: ARRAY_LEN,
            });
        }
        Ok(())
    }
}
