//! Derived totals over category records.

use serpdash_types::{CategoryRecord, CategoryTotals};

/// Sum threads, traffic, keywords and top-10 threads across `records`.
///
/// Empty input yields all-zero totals.
pub fn category_totals<'a, I>(records: I) -> CategoryTotals
where
    I: IntoIterator<Item = &'a CategoryRecord>,
{
    records
        .into_iter()
        .fold(CategoryTotals::default(), |acc, r| CategoryTotals {
            threads: acc.threads + r.total_threads,
            traffic: acc.traffic + r.sum_of_traffic,
            keywords: acc.keywords + r.sum_of_keywords,
            serp_top10: acc.serp_top10 + r.threads_in_top10,
        })
}
