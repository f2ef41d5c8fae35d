//! Command implementations for the `lucent` binary.

pub mod commands;
