//! Route table watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::{load_config, ConfigError};
use crate::routing::{Router, SharedRouter};

/// Watches a route table file and republishes the router on change.
pub struct ConfigWatcher {
    path: PathBuf,
    router: Arc<SharedRouter<String>>,
}

impl ConfigWatcher {
    /// Create a watcher publishing into `router`.
    pub fn new(path: &Path, router: Arc<SharedRouter<String>>) -> Self {
        Self {
            path: path.to_path_buf(),
            router,
        }
    }

    /// Load the file, build a fresh router and publish it.
    ///
    /// On failure the current router is left in place.
    pub fn reload(&self) -> Result<usize, ConfigError> {
        reload_into(&self.path, &self.router)
    }

    /// Start watching the file in a background thread.
    ///
    /// The returned watcher must be kept alive for events to be delivered.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let router = Arc::clone(&self.router);
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Route table change detected, reloading...");
                        if let Err(e) = reload_into(&path, &router) {
                            tracing::error!("Failed to reload route table: {}. Keeping current routes.", e);
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Route table watcher started");
        Ok(watcher)
    }
}

fn reload_into(path: &Path, shared: &SharedRouter<String>) -> Result<usize, ConfigError> {
    let config = load_config(path)?;
    let router = Router::from_config(config.routes)?;

    let routes = router.len();
    shared.publish(router);
    Ok(routes)
}
