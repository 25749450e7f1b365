//! License list selection
//!
//! Narrows the SPDX license list for `licache ls`. `--popular` is applied
//! before `--filter`; list order is preserved.

use crate::config::defaults::POPULAR_LICENSES;
use crate::registry::License;

/// Options for narrowing the license list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Keep only the fixed popular set
    pub popular: bool,
    /// Case-insensitive substring matched against identifier or name
    pub filter: Option<String>,
}

/// Apply `options` to `licenses`
pub fn select(mut licenses: Vec<License>, options: &ListOptions) -> Vec<License> {
    if options.popular {
        licenses.retain(is_popular);
    }

    if let Some(term) = options.filter.as_deref().filter(|t| !t.is_empty()) {
        let term = term.to_lowercase();
        licenses.retain(|license| matches_term(license, &term));
    }

    licenses
}

/// Whether `license` is in the popular set
pub fn is_popular(license: &License) -> bool {
    POPULAR_LICENSES.contains(&license.license_id.as_str())
}

/// `term` must already be lowercase
fn matches_term(license: &License, term: &str) -> bool {
    license.license_id.to_lowercase().contains(term) || license.name.to_lowercase().contains(term)
}
