//! Command implementations backing the `pgraph` binary.

pub mod commands;
