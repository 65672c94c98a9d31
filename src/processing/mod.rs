//! Filesystem passes behind the commands

pub mod cleanup;
pub mod html;
