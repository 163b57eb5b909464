//! Page category constants.
//!
//! Every page rendered in the center area declares:
//!   - HTML `id` in the format `{collection}--{category}` (e.g. `"vendors--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filter and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// System page (login, settings).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Id of a page in the `{collection}--{category}` format
pub fn page_id(collection: &str, category: &str) -> String {
    format!("{}--{}", collection, category)
}

/// Validate that a page id matches the `{collection}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
