//! # slip-core
//! Foundation types and traits for the slip rate curve.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
