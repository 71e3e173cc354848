//! Compiled-in category dataset
//!
//! The category records and the overall totals are fixed at build time.
//! Nothing in the crate mutates them; every derived view copies what it needs.

use std::sync::LazyLock;

use serpdash_types::{CategoryRecord, OverallTotals};

/// Catch-all category that is dropped before any per-category view.
pub const EXCLUDED_CATEGORY: &str = "Other";

/// Whole-dataset figures for the keyword, including uncategorized threads.
pub const OVERALL_TOTALS: OverallTotals = OverallTotals {
    threads: 1779,
    traffic: 9029,
    keywords: 39497,
};

static CATEGORIES: LazyLock<Vec<CategoryRecord>> = LazyLock::new(|| {
    vec![
        CategoryRecord::new("Types of Ransomware", 54, 6484, 1492, 37.6, 6),
        CategoryRecord::new("Ransomware Protection and Prevention", 32, 388, 951, 7.1, 29),
        CategoryRecord::new("Ransomware Recovery and Removal", 43, 290, 677, 14.9, 27),
        CategoryRecord::new("Ransomware Tools and Software", 17, 72, 494, 13.6, 10),
        CategoryRecord::new("Ransomware Attacks & Impact", 28, 112, 358, 12.5, 13),
        CategoryRecord::new(
            "Ransomware in Specific Platforms and Devices",
            10,
            45,
            102,
            10.5,
            8,
        ),
    ]
});

/// The full category list, in dataset order.
pub fn categories() -> &'static [CategoryRecord] {
    &CATEGORIES
}

/// Categories shown on the dashboard: everything except the catch-all bucket.
pub fn filtered_categories(records: &[CategoryRecord]) -> Vec<CategoryRecord> {
    records
        .iter()
        .filter(|r| r.name != EXCLUDED_CATEGORY)
        .cloned()
        .collect()
}
