//! Shared fixtures for unit, integration, and property tests.

use crate::types::{Category, DocRecord};

/// Build a record with the given identity fields and a fixed page name.
pub fn make_record(location: &str, title: &str, category: Category, text: &str) -> DocRecord {
    DocRecord {
        location: location.to_string(),
        page: "Test Page".to_string(),
        title: title.to_string(),
        category,
        text: text.to_string(),
    }
}

/// Build a record where the page name matters too.
pub fn make_record_on_page(
    location: &str,
    page: &str,
    title: &str,
    category: Category,
    text: &str,
) -> DocRecord {
    DocRecord {
        location: location.to_string(),
        page: page.to_string(),
        title: title.to_string(),
        category,
        text: text.to_string(),
    }
}
