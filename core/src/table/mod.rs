//! Sortable category table
//!
//! Sort state transitions, the pure sorted-view computation, and a memoizing
//! table model that front ends hold for the lifetime of the table.

mod controller;

#[cfg(test)]
mod tests;

pub use controller::{
    DEFAULT_SORT, SortController, SortIndicator, TableModel, compare_fields, compute_sorted_view,
    next_sort_state,
};
