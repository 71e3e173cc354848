use serpdash_core::{Dashboard, DashboardConfig};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Tasks spawned at startup that outlive a single command.
#[derive(Default)]
pub struct BackgroundTasks {
    pub link_loader: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub async fn abort_all(&mut self) {
        if let Some(handle) = self.link_loader.take() {
            handle.abort();
        }
    }
}

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in serpdash-core.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<DashboardConfig>>,
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    pub fn new(config: DashboardConfig) -> Self {
        let dashboard = Dashboard::from_dataset().with_top_n(config.chart_top_n);
        Self {
            config: Arc::new(RwLock::new(config)),
            dashboard: Arc::new(RwLock::new(dashboard)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }
}
