//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes with their handlers, partitioned by method
//! - Enforce globally unique route names
//! - Look up the first route matching a request
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Registration order is the only priority
//! - O(1) method bucket lookup via HashMap, O(n) scan inside the bucket
//! - Mutation needs `&mut self`; share a finished router by reference or
//!   through `SharedRouter`
//! - Explicit `None` rather than a silent default

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::RouteConfig;
use crate::routing::error::RouterError;
use crate::routing::method::Method;
use crate::routing::route::{Parameters, Route};

/// Registry of routes and their handlers.
#[derive(Debug, Clone)]
pub struct Router<H> {
    routes: HashMap<Method, Vec<(Route, H)>>,
    names: HashSet<String>,
}

/// Successful lookup: the route, its parameters and its handler.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedRoute<'a, H> {
    #[serde(rename = "name", serialize_with = "serialize_route_name")]
    route: &'a Route,
    parameters: Parameters,
    handler: &'a H,
}

fn serialize_route_name<S: serde::Serializer>(route: &&Route, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(route.name())
}

impl<'a, H> MatchedRoute<'a, H> {
    pub fn name(&self) -> &'a str {
        self.route.name()
    }

    pub fn route(&self) -> &'a Route {
        self.route
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Single parameter value by placeholder name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    pub fn handler(&self) -> &'a H {
        self.handler
    }

    pub fn into_parameters(self) -> Parameters {
        self.parameters
    }
}

impl<H> Router<H> {
    /// Create an empty router.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            names: HashSet::new(),
        }
    }

    /// Register `route` with its handler.
    ///
    /// Fails if a route with the same name exists, whatever its method.
    pub fn register(&mut self, route: Route, handler: H) -> Result<(), RouterError> {
        if self.names.contains(route.name()) {
            tracing::debug!(name = %route.name(), "Rejected duplicate route name");
            return Err(RouterError::DuplicateRouteName(route.name().to_string()));
        }

        tracing::debug!(
            method = %route.method(),
            schema = %route.schema(),
            name = %route.name(),
            "Route registered"
        );

        self.names.insert(route.name().to_string());
        self.routes
            .entry(route.method())
            .or_default()
            .push((route, handler));
        Ok(())
    }

    /// Compile and register in one step.
    pub fn add(
        &mut self,
        method: Method,
        schema: &str,
        name: impl Into<String>,
        handler: H,
    ) -> Result<(), RouterError> {
        let route = Route::new(method, schema, name)?;
        self.register(route, handler)
    }

    /// Find the first route registered for `method` that matches `requested_path`.
    pub fn match_route(&self, method: Method, requested_path: &str) -> Option<MatchedRoute<'_, H>> {
        let candidates = self.routes.get(&method)?;

        let matched = candidates.iter().find_map(|(route, handler)| {
            route
                .matches(method, requested_path)
                .map(|parameters| MatchedRoute {
                    route,
                    parameters,
                    handler,
                })
        });

        match &matched {
            Some(m) => tracing::debug!(%method, path = %requested_path, route = %m.name(), "Route matched"),
            None => tracing::debug!(%method, path = %requested_path, "No route matched"),
        }

        matched
    }

    /// Routes registered for `method`, in registration order.
    pub fn routes(&self, method: Method) -> impl Iterator<Item = (&Route, &H)> {
        self.routes
            .get(&method)
            .into_iter()
            .flatten()
            .map(|(route, handler)| (route, handler))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Total number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drop every route and release every name.
    pub fn clear(&mut self) {
        self.routes.clear();
        self.names.clear();
    }
}

impl Router<String> {
    /// Build a router whose handlers are the configured handler targets.
    pub fn from_config(routes: Vec<RouteConfig>) -> Result<Self, RouterError> {
        let mut router = Self::new();
        for config in routes {
            router.add(config.method, &config.schema, config.name, config.handler)?;
        }
        Ok(router)
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}
