use std::cmp::Ordering;

use serpdash_types::{CategoryRecord, FieldValue, SortDirection, SortKey, SortState};

/// Ordering used while no column has been clicked.
pub const DEFAULT_SORT: SortState = SortState {
    key: SortKey::SumOfTraffic,
    direction: SortDirection::Descending,
};

// ─────────────────────────────────────────────────────────────────────────────
// Pure Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Compare two column values.
///
/// Numbers use natural order (floats via `total_cmp`), text is lexicographic.
/// Values of different kinds never share a column, but the order is still
/// total across kinds: text < count < real.
pub fn compare_fields(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        (FieldValue::Count(a), FieldValue::Count(b)) => a.cmp(&b),
        (FieldValue::Real(a), FieldValue::Real(b)) => a.total_cmp(&b),
        (a, b) => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: FieldValue<'_>) -> u8 {
    match value {
        FieldValue::Text(_) => 0,
        FieldValue::Count(_) => 1,
        FieldValue::Real(_) => 2,
    }
}

/// Produce a new, ordered copy of `records`.
///
/// The sort is stable, so rows with equal values keep their input order.
/// With no sort state the view is ordered by traffic, highest first.
pub fn compute_sorted_view(
    records: &[CategoryRecord],
    sort: Option<SortState>,
) -> Vec<CategoryRecord> {
    let SortState { key, direction } = sort.unwrap_or(DEFAULT_SORT);
    let mut view = records.to_vec();
    view.sort_by(|a, b| {
        let cmp = compare_fields(a.field(key), b.field(key));
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    view
}

/// State after clicking the header for `key`.
///
/// Clicking the active column reverses it; any other column starts ascending.
pub fn next_sort_state(current: Option<SortState>, key: SortKey) -> SortState {
    match current {
        Some(state) if state.key == key => SortState {
            key,
            direction: state.direction.flipped(),
        },
        _ => SortState::ascending(key),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sort Controller
// ─────────────────────────────────────────────────────────────────────────────

/// Header arrow for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    None,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// CSS class used by the web table header
    pub fn css_class(&self) -> &'static str {
        match self {
            SortIndicator::None => "sortable",
            SortIndicator::Ascending => "sortable sorted-asc",
            SortIndicator::Descending => "sortable sorted-desc",
        }
    }

    /// Arrow glyph used by text renderers
    pub fn arrow(&self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

/// Owns the table's sort selection. Unset until the first click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortController {
    state: Option<SortState>,
}

impl SortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<SortState> {
        self.state
    }

    /// Apply a header click for `key` and return the new state.
    pub fn request_sort(&mut self, key: SortKey) -> SortState {
        let next = next_sort_state(self.state, key);
        self.state = Some(next);
        next
    }

    /// Indicator for a column. Only the explicitly selected column shows one.
    pub fn indicator(&self, key: SortKey) -> SortIndicator {
        match self.state {
            Some(state) if state.key == key => match state.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Table Model
// ─────────────────────────────────────────────────────────────────────────────

/// Record list plus sort controller with a memoized sorted view.
///
/// The view is rebuilt only when the records are replaced or the sort state
/// changes; every other read returns the cached rows.
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    records: Vec<CategoryRecord>,
    revision: u64,
    sort: SortController,
    cached: Option<CachedView>,
    recomputes: u64,
}

#[derive(Debug, Clone)]
struct CachedView {
    revision: u64,
    sort: Option<SortState>,
    rows: Vec<CategoryRecord>,
}

impl TableModel {
    pub fn new(records: Vec<CategoryRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Source rows, in the order they were supplied.
    pub fn records(&self) -> &[CategoryRecord] {
        &self.records
    }

    /// Replace the source rows. Invalidates the cached view.
    pub fn set_records(&mut self, records: Vec<CategoryRecord>) {
        self.records = records;
        self.revision += 1;
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort.state()
    }

    pub fn indicator(&self, key: SortKey) -> SortIndicator {
        self.sort.indicator(key)
    }

    pub fn request_sort(&mut self, key: SortKey) -> SortState {
        let state = self.sort.request_sort(key);
        tracing::debug!(key = key.field_name(), direction = ?state.direction, "Sort requested");
        state
    }

    /// Sorted rows for the current records and sort state.
    pub fn view(&mut self) -> &[CategoryRecord] {
        let sort = self.sort.state();
        let fresh = matches!(
            &self.cached,
            Some(c) if c.revision == self.revision && c.sort == sort
        );

        if !fresh {
            self.recomputes += 1;
            self.cached = Some(CachedView {
                revision: self.revision,
                sort,
                rows: compute_sorted_view(&self.records, sort),
            });
        }

        match &self.cached {
            Some(c) => &c.rows,
            None => &[],
        }
    }

    /// Number of times the view has been rebuilt.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
