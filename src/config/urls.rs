//! SPDX license list URLs

/// Official SPDX license list (GitHub raw)
pub const SPDX_LIST: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/json/licenses.json";

/// SPDX license details, with `{id}` replaced by the license identifier
pub const SPDX_DETAILS_TEMPLATE: &str =
    "https://raw.githubusercontent.com/spdx/license-list-data/main/json/details/{id}.json";

/// Placeholder substituted in [`SPDX_DETAILS_TEMPLATE`] and custom templates
pub const ID_PLACEHOLDER: &str = "{id}";
