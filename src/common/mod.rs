//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup (fern dispatcher with coloured levels)
//! - Log level parsing
//!
//! # Data Structures
//!
//! - `CustomError` - error type for the binary's boot path

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
