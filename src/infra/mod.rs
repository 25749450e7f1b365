//! Infrastructure layer
//!
//! Handles filesystem I/O and platform directories.

pub mod dirs;
pub mod filesystem;
