//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     (method, schema, name)
//!     → schema.rs (validate markers, canonicalize, compile matcher)
//!     → route.rs (immutable Route)
//!     → router.rs (register with handler, names checked)
//!     → shared.rs (optional: publish the finished Router)
//!
//! Lookup:
//!     (method, requested path)
//!     → router.rs (bucket for method, registration order)
//!     → route.rs (exact fast path, then anchored matcher)
//!     → Return: MatchedRoute or None
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable afterwards
//! - Deterministic: first registered match wins, never reordered
//! - Malformed schemas and duplicate names are errors, a miss is `None`
//! - Handlers are opaque payloads, stored and handed back untouched

pub mod error;
pub mod method;
pub mod route;
pub mod router;
pub mod schema;
pub mod shared;

pub use error::{ParseMethodError, RouterError, SchemaError};
pub use method::Method;
pub use route::{Parameters, Route};
pub use router::{MatchedRoute, Router};
pub use shared::SharedRouter;
