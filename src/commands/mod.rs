//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod clean;
pub mod days;
pub mod sanitize;
