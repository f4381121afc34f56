//! Shared constants and the crate error type.

pub mod constants;
pub mod error;

pub use constants::*;
pub use error::{Result, SimError};
