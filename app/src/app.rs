//! Dashboard page
//!
//! Headline cards for the whole dataset and for the filtered categories,
//! the sortable category table, and the two top-N bar charts.

use dioxus::prelude::*;
use serpdash_core::charts::DEFAULT_TOP_N;
use serpdash_core::dashboard::{
    CATEGORY_HEADING, OVERALL_HEADING, PAGE_SUBTITLE, PAGE_TITLE, TABLE_HEADING, category_cards,
    overall_cards,
};
use serpdash_core::dataset::{self, OVERALL_TOTALS};
use serpdash_core::{ChartMetric, ChartSeries, category_totals, top_n_by_traffic};
use serpdash_types::CategoryRecord;

use crate::components::{BarChart, CategoryTable, StatCardGrid, VersionInfo};

static MAIN_CSS: Asset = asset!("/assets/main.css");
const ECHARTS_JS: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

// ─────────────────────────────────────────────────────────────────────────────
// App Component
// ─────────────────────────────────────────────────────────────────────────────

pub fn App() -> Element {
    // Filtered once; everything below derives from this signal
    let records: Signal<Vec<CategoryRecord>> =
        use_signal(|| dataset::filtered_categories(dataset::categories()));

    let totals = use_memo(move || category_totals(records.read().iter()));
    let top = use_memo(move || top_n_by_traffic(&records.read(), DEFAULT_TOP_N));
    let traffic = use_memo(move || ChartSeries::build(ChartMetric::Traffic, &top.read()));
    let serp = use_memo(move || ChartSeries::build(ChartMetric::ThreadsInTop10, &top.read()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Script { src: ECHARTS_JS }
        div { class: "app-container",
            header { class: "app-header",
                h1 { "{PAGE_TITLE}" }
                p { class: "app-subtitle", "{PAGE_SUBTITLE}" }
            }

            section { class: "summary-section",
                h2 { "{OVERALL_HEADING}" }
                StatCardGrid { cards: overall_cards(&OVERALL_TOTALS) }
                h2 { "{CATEGORY_HEADING}" }
                StatCardGrid { cards: category_cards(&totals()) }
            }

            section { class: "table-section",
                h2 { "{TABLE_HEADING}" }
                CategoryTable { records }
            }

            section { class: "charts-section",
                BarChart { id: "chart-traffic", series: traffic(), horizontal: false }
                BarChart { id: "chart-serp", series: serp(), horizontal: true }
            }

            VersionInfo {}
        }
    }
}
