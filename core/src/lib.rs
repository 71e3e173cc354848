pub mod charts;
#[cfg(feature = "native")]
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod expansion;
pub mod format;
pub mod links;
pub mod table;
pub mod totals;
pub mod version;

// Re-exports for convenience
pub use charts::{ChartBar, ChartMetric, ChartSeries, top_n_by_traffic};
#[cfg(feature = "native")]
pub use config::{ConfigError, DashboardConfig};
pub use dashboard::{Dashboard, StatCard, TableHeader, TableRow};
pub use expansion::{DetailExpansion, IndexState};
#[cfg(feature = "native")]
pub use links::FileSource;
pub use links::{LinkSourceError, ReferenceLinkIndex, ReferenceSource, load_reference_index};
pub use serpdash_types::{
    CategoryRecord, CategoryTotals, FieldValue, OverallTotals, SortDirection, SortKey, SortState,
};
pub use table::{SortController, SortIndicator, TableModel, compute_sorted_view};
pub use totals::category_totals;
