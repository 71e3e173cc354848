//! Chart series for the traffic and SERP bar charts
//!
//! Both charts draw the same top-N slice of categories, each ordered by the
//! metric it plots. Bars are colored by rank from a fixed palette.

use serde::Serialize;
use serpdash_types::CategoryRecord;

use crate::format::truncate_label;

/// Bar colors, cycled by rank.
pub const PALETTE: [&str; 10] = [
    "#06b6d4", "#818cf8", "#fbbf24", "#34d399", "#f472b6", "#f87171", "#a78bfa", "#facc15",
    "#38bdf8", "#f59e42",
];

/// Categories drawn in the charts.
pub const DEFAULT_TOP_N: usize = 6;

/// Which metric a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartMetric {
    Traffic,
    ThreadsInTop10,
}

impl ChartMetric {
    pub fn title(&self) -> &'static str {
        match self {
            ChartMetric::Traffic => "Traffic by Category",
            ChartMetric::ThreadsInTop10 => "Threads in SERP Top 10",
        }
    }

    /// Tooltip label for a bar value
    pub fn value_label(&self) -> &'static str {
        match self {
            ChartMetric::Traffic => "Traffic",
            ChartMetric::ThreadsInTop10 => "Top 10 Threads",
        }
    }

    fn value(&self, record: &CategoryRecord) -> u64 {
        match self {
            ChartMetric::Traffic => record.sum_of_traffic,
            ChartMetric::ThreadsInTop10 => record.threads_in_top10,
        }
    }
}

/// One bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    /// Full category name (tooltip)
    pub name: String,
    /// Shortened name for the axis
    pub label: String,
    pub value: u64,
    pub color: &'static str,
}

/// All bars of one chart, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub metric: ChartMetric,
    pub bars: Vec<ChartBar>,
}

impl ChartSeries {
    /// Order `records` by `metric`, highest first, and color by rank.
    pub fn build(metric: ChartMetric, records: &[CategoryRecord]) -> Self {
        let mut sorted: Vec<&CategoryRecord> = records.iter().collect();
        sorted.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)));

        let bars = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, r)| ChartBar {
                name: r.name.clone(),
                label: truncate_label(&r.name),
                value: metric.value(r),
                color: PALETTE[idx % PALETTE.len()],
            })
            .collect();

        Self { metric, bars }
    }

    pub fn max_value(&self) -> u64 {
        self.bars.iter().map(|b| b.value).max().unwrap_or(0)
    }
}

/// The `n` categories with the most traffic, highest first.
pub fn top_n_by_traffic(records: &[CategoryRecord], n: usize) -> Vec<CategoryRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.sum_of_traffic.cmp(&a.sum_of_traffic));
    sorted.truncate(n);
    sorted
}
