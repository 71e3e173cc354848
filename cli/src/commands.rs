use serpdash_core::dashboard::{CATEGORY_HEADING, OVERALL_HEADING, PAGE_TITLE, TABLE_HEADING};
use serpdash_core::{DashboardConfig, IndexState, SortKey, SortState};
use std::io::Write;

use crate::CliContext;
use crate::render;

/// Parse a column name as typed at the prompt.
///
/// Accepts the dataset field name, the column title, or a short alias,
/// case-insensitively.
pub fn parse_sort_key(input: &str) -> Result<SortKey, String> {
    let wanted = input.trim().to_lowercase();
    let alias = match wanted.as_str() {
        "name" | "category" => Some(SortKey::Name),
        "threads" => Some(SortKey::TotalThreads),
        "traffic" => Some(SortKey::SumOfTraffic),
        "keywords" => Some(SortKey::SumOfKeywords),
        "position" | "avg" => Some(SortKey::AvgKeywordPosition),
        "top10" => Some(SortKey::ThreadsInTop10),
        _ => None,
    };

    alias
        .or_else(|| {
            SortKey::all().iter().copied().find(|k| {
                k.field_name().to_lowercase() == wanted || k.title().to_lowercase() == wanted
            })
        })
        .ok_or_else(|| {
            let valid: Vec<&str> = SortKey::all().iter().map(|k| k.field_name()).collect();
            format!(
                "error: unknown column '{input}' (expected one of: {})\n",
                valid.join(", ")
            )
        })
}

pub async fn show_summary(ctx: &CliContext) {
    let dashboard = ctx.dashboard.read().await;
    println!("{PAGE_TITLE}\n");
    println!(
        "{}",
        render::render_cards(OVERALL_HEADING, &dashboard.overall_cards())
    );
    println!(
        "{}",
        render::render_cards(CATEGORY_HEADING, &dashboard.category_cards())
    );
}

pub async fn show_table(ctx: &CliContext) {
    let mut dashboard = ctx.dashboard.write().await;
    let headers = dashboard.headers();
    let rows = dashboard.rows();
    println!("{TABLE_HEADING}");
    print!("{}", render::render_table(&headers, &rows));
}

pub async fn sort_by(column: &str, ctx: &CliContext) -> Result<SortState, String> {
    let key = parse_sort_key(column)?;
    let state = ctx.dashboard.write().await.request_sort(key);
    show_table(ctx).await;
    Ok(state)
}

/// Toggle a row by category name (case-insensitive).
pub async fn toggle_row(name: &str, ctx: &CliContext) -> Result<bool, String> {
    let expanded = {
        let mut dashboard = ctx.dashboard.write().await;
        let category = dashboard
            .categories()
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
            .map(|r| r.name.clone())
            .ok_or_else(|| format!("error: no category named '{name}'\n"))?;
        dashboard.toggle(&category)
    };
    show_table(ctx).await;
    Ok(expanded)
}

pub async fn show_charts(ctx: &CliContext) {
    let dashboard = ctx.dashboard.read().await;
    println!("{}", render::render_chart(&dashboard.traffic_chart()));
    println!("{}", render::render_chart(&dashboard.serp_chart()));
}

pub async fn show_links_status(ctx: &CliContext) {
    let dashboard = ctx.dashboard.read().await;
    match dashboard.expansion().index_state() {
        IndexState::Pending => println!("Reference links: loading"),
        IndexState::Ready(index) if index.is_empty() => println!("Reference links: none available"),
        IndexState::Ready(index) => {
            println!("Reference links for {} categories", index.len());
            for category in index.categories() {
                println!("  {category}");
            }
        }
    }
}

pub async fn show_settings(ctx: &CliContext) {
    let config = ctx.config.read().await;
    match DashboardConfig::file_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no config directory)"),
    }
    println!("Reference links: {}", config.links_path);
    println!("Chart categories: {}", config.chart_top_n);
    println!("{}", render::render_footer());
}

/// Persist the active settings, including any `--links` override.
pub async fn save_settings(ctx: &CliContext) -> Result<(), String> {
    let config = ctx.config.read().await;
    config
        .save()
        .map_err(|e| format!("error: {e}\n"))?;
    tracing::info!(links_path = %config.links_path, "Configuration saved");
    match DashboardConfig::file_path() {
        Some(path) => println!("Saved to {}", path.display()),
        None => println!("Saved"),
    }
    Ok(())
}

pub async fn exit(ctx: &CliContext) -> Result<(), String> {
    ctx.tasks.lock().await.abort_all().await;
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}
