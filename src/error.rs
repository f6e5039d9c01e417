//! Error type for loading and validating demo configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures around the demos. The intentional out-of-bounds accesses are not
/// represented here; they are never caught.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Seed index {index} is outside the array (capacity {capacity})")]
    SeedOutOfRange { index: usize, capacity: usize },
}

impl DemoError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
