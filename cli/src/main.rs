use clap::{Parser, Subcommand};
use serpdash_cli::commands;
use serpdash_cli::link_loader;
use serpdash_cli::logging;
use serpdash_cli::readline;
use serpdash_cli::CliContext;
use serpdash_core::DashboardConfig;
use std::io::Write;

/// Startup options
#[derive(Parser)]
#[command(version, about = "Category traffic and SERP dashboard")]
struct Launch {
    /// Reference link CSV (overrides the configured path)
    #[arg(short, long)]
    links: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let launch = Launch::parse();
    let _log_guard = logging::init();

    let mut config = DashboardConfig::load();
    if let Some(path) = launch.links {
        config.links_path = path;
    }
    let ctx = CliContext::new(config);

    // Reference links load in the background; the prompt is usable immediately
    let handle = link_loader::spawn_link_loader(&ctx).await;
    ctx.tasks.lock().await.link_loader = Some(handle);

    commands::show_summary(&ctx).await;
    commands::show_table(&ctx).await;

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "cli")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Overall and per-category headline figures
    Summary,
    /// Category table in the current sort order
    Table,
    /// Sort the table by a column (click the same column again to reverse)
    Sort { column: String },
    /// Open or close the detail row of a category
    Expand { name: String },
    /// Traffic and SERP top-10 bar charts
    Charts,
    /// Reference link load status
    Links,
    /// Show settings; `--save` writes them to the config file
    Config {
        #[arg(long)]
        save: bool,
    },
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "serpdash".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Summary) => commands::show_summary(ctx).await,
        Some(Commands::Table) => commands::show_table(ctx).await,
        Some(Commands::Sort { column }) => {
            commands::sort_by(column, ctx).await?;
        }
        Some(Commands::Expand { name }) => {
            commands::toggle_row(name, ctx).await?;
        }
        Some(Commands::Charts) => commands::show_charts(ctx).await,
        Some(Commands::Links) => commands::show_links_status(ctx).await,
        Some(Commands::Config { save }) => {
            if *save {
                commands::save_settings(ctx).await?;
            }
            commands::show_settings(ctx).await;
        }
        Some(Commands::Exit) => {
            commands::exit(ctx).await?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
