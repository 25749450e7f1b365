//! Core business logic module
//!
//! This module contains the business logic for licache.
//! It has NO I/O operations - those belong in [`crate::infra`] and
//! [`crate::registry`].
//!
//! # Submodules
//!
//! - [`global_config`] - Global configuration management
//! - [`list`] - License list selection for `ls`
//! - [`write`] - Target resolution for `write`

pub mod global_config;
pub mod list;
pub mod write;
