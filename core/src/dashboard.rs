//! Dashboard view model
//!
//! Bundles the derived data every front end shows: stat cards, the sortable
//! and expandable table, and the two chart series. Front ends feed it user
//! events (`request_sort`, `toggle`) and the loaded link index, and read the
//! rest.

use serpdash_types::{CategoryRecord, CategoryTotals, OverallTotals, SortKey, SortState};

use crate::charts::{ChartMetric, ChartSeries, DEFAULT_TOP_N, top_n_by_traffic};
use crate::dataset;
use crate::expansion::DetailExpansion;
use crate::format::{format_count, format_position};
use crate::links::ReferenceLinkIndex;
use crate::table::{SortIndicator, TableModel};
use crate::totals::category_totals;

// ─────────────────────────────────────────────────────────────────────────────
// Page Text
// ─────────────────────────────────────────────────────────────────────────────

pub const PAGE_TITLE: &str = "Reddit data analysis for the keyword Ransomware";
pub const PAGE_SUBTITLE: &str = "This dashboard analyzes Reddit data for the keyword \"Ransomware\". It provides a high-level overview and a detailed breakdown of key categories.";
pub const OVERALL_HEADING: &str = "Overall Statistics";
pub const CATEGORY_HEADING: &str = "Top 6 Sub Categories in Ransomware";
pub const TABLE_HEADING: &str = "Detailed Subcategory Analysis";

/// A labelled headline figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

impl StatCard {
    fn count(title: &'static str, value: u64) -> Self {
        Self {
            title,
            value: format_count(value),
        }
    }
}

/// Cards for the whole dataset.
pub fn overall_cards(totals: &OverallTotals) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Reddit Threads", totals.threads),
        StatCard::count("Total Traffic", totals.traffic),
        StatCard::count("Total Keywords", totals.keywords),
    ]
}

/// Cards for the filtered category subset.
pub fn category_cards(totals: &CategoryTotals) -> Vec<StatCard> {
    vec![
        StatCard::count("Total Reddit Threads", totals.threads),
        StatCard::count("Sum of Traffic", totals.traffic),
        StatCard::count("Sum of Keywords", totals.keywords),
        StatCard::count("Threads in SERP Top 10", totals.serp_top10),
    ]
}

/// Display text for one table cell.
pub fn cell_text(record: &CategoryRecord, key: SortKey) -> String {
    match key {
        SortKey::Name => record.name.clone(),
        SortKey::TotalThreads => format_count(record.total_threads),
        SortKey::SumOfTraffic => format_count(record.sum_of_traffic),
        SortKey::SumOfKeywords => format_count(record.sum_of_keywords),
        SortKey::AvgKeywordPosition => format_position(record.avg_keyword_position),
        SortKey::ThreadsInTop10 => format_count(record.threads_in_top10),
    }
}

/// A rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub record: CategoryRecord,
    pub expanded: bool,
    /// Present only when the row is open and has links
    pub panel_links: Option<Vec<String>>,
}

impl TableRow {
    /// Join a record with its expansion flag and any links to show.
    pub fn join(record: &CategoryRecord, expansion: &DetailExpansion) -> Self {
        Self {
            record: record.clone(),
            expanded: expansion.is_expanded(&record.name),
            panel_links: expansion.panel_links(&record.name).map(|l| l.to_vec()),
        }
    }
}

/// Column header with its current sort arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeader {
    pub key: SortKey,
    pub title: &'static str,
    pub indicator: SortIndicator,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    overall: OverallTotals,
    categories: Vec<CategoryRecord>,
    totals: CategoryTotals,
    table: TableModel,
    expansion: DetailExpansion,
    top_n: usize,
}

impl Dashboard {
    /// Build over `records`; the catch-all category is filtered out.
    pub fn new(overall: OverallTotals, records: &[CategoryRecord], top_n: usize) -> Self {
        let categories = dataset::filtered_categories(records);
        let totals = category_totals(&categories);
        Self {
            overall,
            table: TableModel::new(categories.clone()),
            categories,
            totals,
            expansion: DetailExpansion::new(),
            top_n,
        }
    }

    /// Dashboard over the compiled-in dataset.
    pub fn from_dataset() -> Self {
        Self::new(dataset::OVERALL_TOTALS, dataset::categories(), DEFAULT_TOP_N)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    pub fn totals(&self) -> CategoryTotals {
        self.totals
    }

    pub fn overall_cards(&self) -> Vec<StatCard> {
        overall_cards(&self.overall)
    }

    pub fn category_cards(&self) -> Vec<StatCard> {
        category_cards(&self.totals)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Table
    // ─────────────────────────────────────────────────────────────────────────

    pub fn request_sort(&mut self, key: SortKey) -> SortState {
        self.table.request_sort(key)
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.table.sort_state()
    }

    pub fn headers(&self) -> Vec<TableHeader> {
        SortKey::all()
            .iter()
            .map(|&key| TableHeader {
                key,
                title: key.title(),
                indicator: self.table.indicator(key),
            })
            .collect()
    }

    pub fn rows(&mut self) -> Vec<TableRow> {
        let expansion = &self.expansion;
        self.table
            .view()
            .iter()
            .map(|record| TableRow::join(record, expansion))
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expansion
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle(&mut self, category: &str) -> bool {
        self.expansion.toggle(category)
    }

    pub fn set_reference_index(&mut self, index: ReferenceLinkIndex) {
        self.expansion.set_index(index);
    }

    pub fn expansion(&self) -> &DetailExpansion {
        &self.expansion
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Charts
    // ─────────────────────────────────────────────────────────────────────────

    pub fn top_categories(&self) -> Vec<CategoryRecord> {
        top_n_by_traffic(&self.categories, self.top_n)
    }

    pub fn traffic_chart(&self) -> ChartSeries {
        ChartSeries::build(ChartMetric::Traffic, &self.top_categories())
    }

    pub fn serp_chart(&self) -> ChartSeries {
        ChartSeries::build(ChartMetric::ThreadsInTop10, &self.top_categories())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_index() -> ReferenceLinkIndex {
        ReferenceLinkIndex::parse(
            "URL,Category,reddit_is_archived\n\
             https://r/a,Types of Ransomware,no\n\
             https://r/b,Types of Ransomware,yes\n",
        )
        .unwrap()
    }

    #[test]
    fn join_reflects_expansion_and_index() {
        let record = dataset::categories()[0].clone();
        let mut expansion = DetailExpansion::new();

        let row = TableRow::join(&record, &expansion);
        assert_eq!(row.record, record);
        assert!(!row.expanded);
        assert!(row.panel_links.is_none());

        // Open before the index arrives: flag set, nothing to show yet
        expansion.toggle(&record.name);
        let row = TableRow::join(&record, &expansion);
        assert!(row.expanded);
        assert!(row.panel_links.is_none());

        expansion.set_index(csv_index());
        let row = TableRow::join(&record, &expansion);
        assert_eq!(row.panel_links, Some(vec!["https://r/a".to_string()]));
    }

    #[test]
    fn category_heading_names_chart_size() {
        assert!(CATEGORY_HEADING.contains(&DEFAULT_TOP_N.to_string()));
    }

    #[test]
    fn cards_match_dataset() {
        let dash = Dashboard::from_dataset();
        let overall = dash.overall_cards();
        assert_eq!(overall[0].value, "1,779");
        assert_eq!(overall[1].value, "9,029");
        assert_eq!(overall[2].value, "39,497");

        let filtered = dash.category_cards();
        assert_eq!(filtered.len(), 4);
        assert_eq!(filtered[1].title, "Sum of Traffic");
        assert_eq!(filtered[1].value, "7,391");
        assert_eq!(filtered[3].value, "93");
    }

    #[test]
    fn other_bucket_excluded_from_everything() {
        let mut records = dataset::categories().to_vec();
        records.push(CategoryRecord::new("Other", 1000, 99999, 1, 1.0, 0));
        let mut dash = Dashboard::new(dataset::OVERALL_TOTALS, &records, 6);

        assert_eq!(dash.totals().traffic, 7391);
        assert!(dash.rows().iter().all(|r| r.record.name != "Other"));
        assert!(dash.traffic_chart().bars.iter().all(|b| b.name != "Other"));
    }

    #[test]
    fn rows_follow_sort_and_expansion() {
        let mut dash = Dashboard::from_dataset();
        dash.set_reference_index(csv_index());

        let rows = dash.rows();
        assert_eq!(rows[0].record.name, "Types of Ransomware");
        assert!(rows.iter().all(|r| !r.expanded && r.panel_links.is_none()));

        dash.toggle("Types of Ransomware");
        dash.toggle("Ransomware Tools and Software");
        let rows = dash.rows();
        assert_eq!(rows[0].panel_links, Some(vec!["https://r/a".to_string()]));
        let tools = rows
            .iter()
            .find(|r| r.record.name == "Ransomware Tools and Software")
            .unwrap();
        assert!(tools.expanded);
        assert!(tools.panel_links.is_none());

        dash.request_sort(SortKey::AvgKeywordPosition);
        let rows = dash.rows();
        assert_eq!(rows[0].record.name, "Ransomware Protection and Prevention");
    }

    #[test]
    fn headers_show_active_indicator() {
        let mut dash = Dashboard::from_dataset();
        assert!(
            dash.headers()
                .iter()
                .all(|h| h.indicator == SortIndicator::None)
        );

        dash.request_sort(SortKey::SumOfKeywords);
        dash.request_sort(SortKey::SumOfKeywords);
        let headers = dash.headers();
        assert_eq!(headers[3].key, SortKey::SumOfKeywords);
        assert_eq!(headers[3].indicator, SortIndicator::Descending);
        assert_eq!(headers[0].title, "Category Name");
    }

    #[test]
    fn charts_use_top_n_slice() {
        let dash = Dashboard::from_dataset().with_top_n(2);
        let traffic = dash.traffic_chart();
        assert_eq!(traffic.bars.len(), 2);
        assert_eq!(traffic.bars[0].value, 6484);

        let serp = dash.serp_chart();
        let values: Vec<u64> = serp.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, [29, 6]);
    }

    #[test]
    fn cells_are_formatted() {
        let record = &dataset::categories()[0];
        assert_eq!(cell_text(record, SortKey::SumOfTraffic), "6,484");
        assert_eq!(cell_text(record, SortKey::AvgKeywordPosition), "37.6");
        assert_eq!(cell_text(record, SortKey::Name), "Types of Ransomware");
    }
}
