use crate::CliContext;
use serpdash_core::FileSource;
use tokio::task::JoinHandle;

/// Start loading the reference link file in the background.
///
/// The REPL keeps running while the file is read; rows opened before the
/// load finishes simply show no links. Failures leave an empty index.
pub async fn spawn_link_loader(ctx: &CliContext) -> JoinHandle<()> {
    let source = {
        let config = ctx.config.read().await;
        FileSource::new(config.links_path())
    };

    let loader_ctx = ctx.clone();
    tokio::spawn(async move {
        let index = source.load().await;
        loader_ctx.dashboard.write().await.set_reference_index(index);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serpdash_core::DashboardConfig;

    #[tokio::test]
    async fn loader_installs_empty_index_when_file_missing() {
        let ctx = CliContext::new(DashboardConfig {
            links_path: "/nonexistent/serpdash.csv".to_string(),
            ..Default::default()
        });

        spawn_link_loader(&ctx).await.await.unwrap();

        let dashboard = ctx.dashboard.read().await;
        assert!(dashboard.expansion().is_index_ready());
        assert!(dashboard.expansion().links_for("Types of Ransomware").is_empty());
    }

    #[tokio::test]
    async fn loader_installs_parsed_index() {
        let path = std::env::temp_dir().join(format!("serpdash-cli-{}.csv", std::process::id()));
        std::fs::write(
            &path,
            "URL,Category,reddit_is_archived\nhttps://r/1,Types of Ransomware,no\n",
        )
        .unwrap();

        let ctx = CliContext::new(DashboardConfig {
            links_path: path.display().to_string(),
            ..Default::default()
        });
        spawn_link_loader(&ctx).await.await.unwrap();
        let _ = std::fs::remove_file(&path);

        let dashboard = ctx.dashboard.read().await;
        assert_eq!(
            dashboard.expansion().links_for("Types of Ransomware"),
            ["https://r/1"]
        );
    }
}
