//! Two small demonstrations of memory access that escapes Rust's guarantees:
//!
//! - [`cross_boundary`]: Rust and a linked C routine rewrite each other's
//!   variables through raw addresses.
//! - [`array_overrun`]: a raw pointer into a fixed array is offset past its end
//!   onto a neighbouring local.
//!
//! Both rely on undefined behaviour and are only meaningful as illustrations.
//! Every unsafe access lives in those two modules.

mod address;
pub mod array_overrun;
pub mod config;
pub mod cross_boundary;
pub mod error;
mod foreign;
pub mod report;

pub use config::{ArrayOverrunConfig, CrossBoundaryConfig, DemoConfig, DEFAULT_CONFIG_FILE};
pub use error::{DemoError, Result};
