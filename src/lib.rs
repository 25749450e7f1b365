//! licache - List, view, and write SPDX licenses
//!
//! This library provides a file-backed, time-based cache in front of the SPDX
//! license list, plus the command-line tool built on it.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`registry`] - SPDX client and the license cache in front of it
//! - [`infra`] - Infrastructure layer (directories, filesystem)
//! - [`config`] - Configuration constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod registry;

#[cfg(test)]
pub mod test_utils;
