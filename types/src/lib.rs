//! Shared dashboard types for serpdash
//!
//! This crate contains serializable types that are shared between the native
//! core (serpdash-core) and the WASM frontend (app-ui).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Category Records
// ─────────────────────────────────────────────────────────────────────────────

/// Precomputed aggregate metrics for one category of threads.
///
/// Records are keyed by `name`, which is unique within a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub total_threads: u64,
    pub sum_of_traffic: u64,
    pub sum_of_keywords: u64,
    /// Average SERP rank of the category's keywords (lower is better)
    pub avg_keyword_position: f64,
    /// Threads ranking on the first results page; never exceeds `total_threads`
    pub threads_in_top10: u64,
}

impl CategoryRecord {
    pub fn new(
        name: impl Into<String>,
        total_threads: u64,
        sum_of_traffic: u64,
        sum_of_keywords: u64,
        avg_keyword_position: f64,
        threads_in_top10: u64,
    ) -> Self {
        Self {
            name: name.into(),
            total_threads,
            sum_of_traffic,
            sum_of_keywords,
            avg_keyword_position,
            threads_in_top10,
        }
    }

    /// Value of a single column, typed by what the column holds.
    pub fn field(&self, key: SortKey) -> FieldValue<'_> {
        match key {
            SortKey::Name => FieldValue::Text(&self.name),
            SortKey::TotalThreads => FieldValue::Count(self.total_threads),
            SortKey::SumOfTraffic => FieldValue::Count(self.sum_of_traffic),
            SortKey::SumOfKeywords => FieldValue::Count(self.sum_of_keywords),
            SortKey::AvgKeywordPosition => FieldValue::Real(self.avg_keyword_position),
            SortKey::ThreadsInTop10 => FieldValue::Count(self.threads_in_top10),
        }
    }
}

/// A borrowed column value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Count(u64),
    Real(f64),
}

// ─────────────────────────────────────────────────────────────────────────────
// Sorting
// ─────────────────────────────────────────────────────────────────────────────

/// Table column a view can be sorted by. One variant per record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    TotalThreads,
    SumOfTraffic,
    SumOfKeywords,
    AvgKeywordPosition,
    ThreadsInTop10,
}

impl SortKey {
    /// Column header title
    pub fn title(&self) -> &'static str {
        match self {
            SortKey::Name => "Category Name",
            SortKey::TotalThreads => "Threads",
            SortKey::SumOfTraffic => "Traffic",
            SortKey::SumOfKeywords => "Keywords",
            SortKey::AvgKeywordPosition => "Avg. Position",
            SortKey::ThreadsInTop10 => "Threads in Top 10",
        }
    }

    /// Field name as used in the source dataset
    pub fn field_name(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::TotalThreads => "totalThreads",
            SortKey::SumOfTraffic => "sumOfTraffic",
            SortKey::SumOfKeywords => "sumOfKeywords",
            SortKey::AvgKeywordPosition => "avgKeywordPosition",
            SortKey::ThreadsInTop10 => "threadsInTop10",
        }
    }

    /// Returns true for the text column
    pub fn is_text(&self) -> bool {
        matches!(self, SortKey::Name)
    }

    /// All columns in table order.
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Name,
            SortKey::TotalThreads,
            SortKey::SumOfTraffic,
            SortKey::SumOfKeywords,
            SortKey::AvgKeywordPosition,
            SortKey::ThreadsInTop10,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// An explicit sort selection. The unset state is represented as `None`
/// wherever a `SortState` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Totals
// ─────────────────────────────────────────────────────────────────────────────

/// Sums over a set of category records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub threads: u64,
    pub traffic: u64,
    pub keywords: u64,
    pub serp_top10: u64,
}

/// Whole-dataset figures. These cover threads outside every category and are
/// therefore not derivable from the category records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallTotals {
    pub threads: u64,
    pub traffic: u64,
    pub keywords: u64,
}
