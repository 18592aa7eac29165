//! Path routing table
//!
//! Matches `(method, path)` pairs against registered schemas such as
//! `/{article}/{section}/page-{page}` and hands back the route name, the
//! extracted placeholder values and the handler registered with the route.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{MatchedRoute, Method, Parameters, Route, Router, RouterError, SchemaError, SharedRouter};
