//! Plain-text rendering of the dashboard view model.

use serpdash_core::dashboard::{StatCard, TableHeader, TableRow, cell_text};
use serpdash_core::format::format_count;
use serpdash_core::version::{APP_VERSION, release_url, version_label};
use serpdash_core::{ChartSeries, SortKey};

/// Width of the longest chart bar, in characters.
const BAR_WIDTH: usize = 40;

pub fn render_cards(heading: &str, cards: &[StatCard]) -> String {
    let mut out = format!("{heading}\n{}\n", "-".repeat(heading.chars().count()));
    let width = cards
        .iter()
        .map(|c| c.title.chars().count())
        .max()
        .unwrap_or(0);
    for card in cards {
        out.push_str(&format!("  {:<width$}  {:>10}\n", card.title, card.value));
    }
    out
}

pub fn render_table(headers: &[TableHeader], rows: &[TableRow]) -> String {
    // Column widths: widest of header (with arrow) and every cell
    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| header_text(h).chars().count())
        .collect();
    for row in rows {
        for (i, key) in SortKey::all().iter().enumerate() {
            widths[i] = widths[i].max(cell_text(&row.record, *key).chars().count());
        }
    }

    let mut out = String::from("    ");
    for (header, width) in headers.iter().zip(&widths) {
        out.push_str(&pad(&header_text(header), *width, header.key.is_text()));
        out.push_str("  ");
    }
    let line_len = out.trim_end().chars().count();
    out = out.trim_end().to_string();
    out.push('\n');
    out.push_str(&"-".repeat(line_len));
    out.push('\n');

    for row in rows {
        let marker = if row.expanded { "[-]" } else { "[+]" };
        let mut line = format!("{marker} ");
        for (key, width) in SortKey::all().iter().zip(&widths) {
            line.push_str(&pad(&cell_text(&row.record, *key), *width, key.is_text()));
            line.push_str("  ");
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if let Some(links) = &row.panel_links {
            for link in links {
                out.push_str(&format!("      -> {link}\n"));
            }
        }
    }
    out
}

fn header_text(header: &TableHeader) -> String {
    let arrow = header.indicator.arrow();
    if arrow.is_empty() {
        header.title.to_string()
    } else {
        format!("{} {}", header.title, arrow)
    }
}

fn pad(text: &str, width: usize, left: bool) -> String {
    if left {
        format!("{text:<width$}")
    } else {
        format!("{text:>width$}")
    }
}

pub fn render_chart(series: &ChartSeries) -> String {
    let title = series.metric.title();
    let mut out = format!("{title}\n{}\n", "-".repeat(title.chars().count()));
    let max = series.max_value();
    let label_width = series
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    for bar in &series.bars {
        let len = if max == 0 {
            0
        } else {
            ((bar.value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize
        };
        out.push_str(&format!(
            "  {:<label_width$}  {} {}\n",
            bar.label,
            "#".repeat(len),
            format_count(bar.value)
        ));
    }
    out
}

pub fn render_footer() -> String {
    format!("{} ({})", version_label(), release_url(APP_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serpdash_core::{Dashboard, ReferenceLinkIndex};

    #[test]
    fn table_lists_rows_in_view_order() {
        let mut dash = Dashboard::from_dataset();
        let text = render_table(&dash.headers(), &dash.rows());
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Category Name"));
        assert!(lines[2].contains("Types of Ransomware"));
        assert!(lines[2].contains("6,484"));
        assert!(lines[2].starts_with("[+]"));
        assert_eq!(lines.len(), 2 + 6);
    }

    #[test]
    fn expanded_row_lists_links() {
        let mut dash = Dashboard::from_dataset();
        dash.set_reference_index(
            ReferenceLinkIndex::parse(
                "URL,Category,reddit_is_archived\nhttps://r/x,Types of Ransomware,no\n",
            )
            .unwrap(),
        );
        dash.toggle("Types of Ransomware");

        let text = render_table(&dash.headers(), &dash.rows());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].starts_with("[-]"));
        assert_eq!(lines[3].trim(), "-> https://r/x");
    }

    #[test]
    fn sorted_header_shows_arrow() {
        let mut dash = Dashboard::from_dataset();
        dash.request_sort(SortKey::Name);
        let text = render_table(&dash.headers(), &dash.rows());
        assert!(text.lines().next().unwrap().contains("Category Name ▲"));
    }

    #[test]
    fn chart_bars_scale_to_max() {
        let dash = Dashboard::from_dataset();
        let text = render_chart(&dash.serp_chart());
        let first_bar = text.lines().nth(2).unwrap();
        assert!(first_bar.contains(&"#".repeat(BAR_WIDTH)));
        assert!(first_bar.ends_with(" 29"));
    }

    #[test]
    fn cards_are_aligned() {
        let dash = Dashboard::from_dataset();
        let text = render_cards("Overall Statistics", &dash.overall_cards());
        assert!(text.contains("Total Traffic"));
        assert!(text.contains("9,029"));
        assert_eq!(text.lines().count(), 5);
    }
}
