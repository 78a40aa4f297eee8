//! Draftindex common core types and utilities.

pub mod error;
pub mod fs;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
