//! Configuration constants
//!
//! Compile-time defaults and remote URLs. User settings are loaded by
//! [`crate::core::global_config`].

pub mod defaults;
pub mod urls;
