//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use path_router::{Method, Route};

static NEXT_NAME: AtomicUsize = AtomicUsize::new(0);

/// A name no other helper-built route in this process uses.
pub fn unique_name() -> String {
    format!("route-{}", NEXT_NAME.fetch_add(1, Ordering::Relaxed))
}

/// Build a route with a generated name.
pub fn route(method: Method, schema: &str) -> Route {
    Route::new(method, schema, unique_name()).unwrap()
}

/// Handler stand-in used when the test does not care about the payload.
#[allow(dead_code)]
pub fn noop() -> fn() -> &'static str {
    || "noop"
}

/// Pairs of distinct methods, for wrong-method checks.
#[allow(dead_code)]
pub fn wrong_methods() -> impl Iterator<Item = (Method, Method)> {
    Method::ALL.into_iter().flat_map(|method| {
        Method::ALL
            .into_iter()
            .filter(move |other| *other != method)
            .map(move |other| (method, other))
    })
}
