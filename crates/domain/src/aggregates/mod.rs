//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate owns all its constituent parts, exposes behavior through
//! methods rather than public fields, and returns outcome enums from
//! mutations.

pub mod character;

pub use character::Character;
