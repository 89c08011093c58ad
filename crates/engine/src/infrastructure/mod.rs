//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod config;
pub mod dice;
pub mod memory;
pub mod ports;
pub mod script;
