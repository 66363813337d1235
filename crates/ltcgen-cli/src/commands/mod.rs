//! Command implementations.

pub mod formats;
pub mod generate;
pub mod json_output;
pub mod rates;
