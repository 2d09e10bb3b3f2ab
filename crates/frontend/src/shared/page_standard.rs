//! Page category constants.
//!
//! Every routed page declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_product--list"`) and a
//! `data-page-category` from the list below. The entity part matches the
//! module directory, so an id copied from the DOM inspector leads straight
//! to the source.

/// Table of records
pub const PAGE_CAT_LIST: &str = "list";

/// Create/edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other pages outside the shell
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// `{entity}--{category}` with both parts non-empty and a known category
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_product--list"));
        assert!(is_valid_page_id("d400_catalog_summary--dashboard"));
        assert!(!is_valid_page_id("a001_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_product--table"));
    }
}
