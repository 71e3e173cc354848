//! Category Table Component
//!
//! Sortable per-category breakdown. Clicking a header sorts by that column,
//! clicking it again reverses. Each row can be opened to show sample thread
//! links once the reference CSV has arrived.

use dioxus::prelude::*;
use serpdash_core::dashboard::cell_text;
use serpdash_core::links::DEFAULT_REFERENCE_PATH;
use serpdash_core::{
    DetailExpansion, SortController, SortIndicator, TableRow, compute_sorted_view,
    load_reference_index,
};
use serpdash_types::{CategoryRecord, SortKey};

use crate::api::HttpSource;

fn header_class(key: SortKey, indicator: SortIndicator) -> String {
    if key.is_text() {
        indicator.css_class().to_string()
    } else {
        format!("num {}", indicator.css_class())
    }
}

#[component]
pub fn CategoryTable(records: Signal<Vec<CategoryRecord>>) -> Element {
    let mut sort = use_signal(SortController::new);
    let expansion = use_signal(DetailExpansion::new);

    // Reference links load once; rows can be toggled while this is pending
    use_future(move || async move {
        let source = HttpSource::new(DEFAULT_REFERENCE_PATH);
        let index = load_reference_index(&source).await;
        let mut expansion = expansion;
        expansion.write().set_index(index);
    });

    // Re-sorts only when the records or the sort selection change
    let sorted = use_memo(move || compute_sorted_view(&records.read(), sort.read().state()));

    let controller = *sort.read();
    let rows: Vec<TableRow> = {
        let expansion = expansion.read();
        sorted
            .read()
            .iter()
            .map(|record| TableRow::join(record, &expansion))
            .collect()
    };

    rsx! {
        div { class: "table-container",
            table { class: "category-table",
                thead {
                    tr {
                        th { class: "expand-col" }
                        for key in SortKey::all().iter().copied() {
                            th {
                                key: "{key.field_name()}",
                                class: "{header_class(key, controller.indicator(key))}",
                                onclick: move |_| {
                                    let next = sort.write().request_sort(key);
                                    tracing::debug!(column = next.key.field_name(), direction = ?next.direction, "Table sorted");
                                },
                                "{key.title()}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        CategoryRow { key: "{row.record.name}", row, expansion }
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryRow(row: TableRow, mut expansion: Signal<DetailExpansion>) -> Element {
    let name = row.record.name.clone();
    let marker = if row.expanded { "−" } else { "+" };
    let row_class = if row.expanded { "category-row expanded" } else { "category-row" };

    rsx! {
        tr { class: "{row_class}",
            td { class: "expand-col",
                button {
                    class: "expand-toggle",
                    title: "Show sample threads",
                    onclick: move |_| {
                        expansion.write().toggle(&name);
                    },
                    "{marker}"
                }
            }
            for key in SortKey::all().iter().copied() {
                td {
                    key: "{key.field_name()}",
                    class: if key.is_text() { "" } else { "num" },
                    "{cell_text(&row.record, key)}"
                }
            }
        }
        if let Some(links) = &row.panel_links {
            tr { class: "link-panel",
                td { colspan: "7",
                    ul { class: "reference-links",
                        for link in links {
                            li { key: "{link}",
                                a {
                                    href: "{link}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{link}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
