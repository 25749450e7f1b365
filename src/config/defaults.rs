//! Default configuration values

/// Cache TTL for license data when none is configured (in seconds)
pub const CACHE_TTL: u64 = 86_400; // 24 hours

/// Timeout applied to every remote request (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connect timeout for remote requests (in seconds)
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// File the license list is cached in, relative to the cache root
pub const LIST_FILE: &str = "list.json";

/// Directory per-license detail records live in, relative to the cache root
pub const DETAILS_DIR: &str = "details";

/// File name `write` uses when no path is given
pub const LICENSE_FILE: &str = "LICENSE";

/// Licenses shown by `ls --popular`, in output order
pub const POPULAR_LICENSES: &[&str] = &["MIT", "Apache-2.0", "GPL-2.0", "BSD-3-Clause", "ISC"];

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
