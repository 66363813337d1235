//! Library portion of the ltcgen CLI.
//!
//! Command implementations live here so integration tests can exercise
//! them without spawning the binary.

pub mod commands;
