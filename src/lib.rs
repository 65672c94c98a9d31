//! # Stagehand Library
//!
//! Pre-publication chores for static sites: empty a deploy folder down to an
//! allow-list, rewrite generated HTML for staging, and count days since a
//! reference date.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod core;
pub mod processing;
pub mod ui;
