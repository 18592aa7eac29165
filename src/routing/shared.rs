//! Copy-on-publish router handle.
//!
//! A `Router` is mutated only while it is being built. Once finished it is
//! published here and readers take cheap snapshots; a new table is built on
//! the side and swapped in atomically.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::routing::router::Router;

/// Atomically replaceable, read-mostly router.
pub struct SharedRouter<H> {
    current: ArcSwap<Router<H>>,
}

impl<H> SharedRouter<H> {
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// Snapshot of the current router. Stays valid after later publishes.
    pub fn load(&self) -> Arc<Router<H>> {
        self.current.load_full()
    }

    /// Replace the current router with a fully built one.
    pub fn publish(&self, router: Router<H>) {
        let routes = router.len();
        self.current.store(Arc::new(router));
        tracing::info!(routes, "Router published");
    }
}

impl<H> Default for SharedRouter<H> {
    fn default() -> Self {
        Self::new(Router::new())
    }
}

impl<H> std::fmt::Debug for SharedRouter<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedRouter")
            .field("routes", &self.current.load().len())
            .finish()
    }
}
