//! # User Interface
//!
//! Colored terminal output and the confirmation prompt.

pub mod log;
pub mod prompt;

pub use log::{debug, error, header, info, item, print_logo, success, warn, Log};
pub use prompt::ask;
