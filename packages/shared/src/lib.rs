//! Utilities shared across the Parlor crates.

pub mod logger;
