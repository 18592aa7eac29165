//! Error definitions for route compilation and registration.

use thiserror::Error;

/// Errors raised while compiling a path schema.
///
/// All of them are configuration mistakes: they surface when a `Route` is
/// built and are never produced while matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Markers are unbalanced or nested.
    #[error("Malformed schema: {schema}")]
    Malformed { schema: String },

    /// A placeholder name is not a valid identifier.
    #[error("Invalid parameter name: '{name}'")]
    InvalidParameterName { name: String },

    /// Two placeholders follow each other with no literal text in between.
    #[error("Malformed schema: {schema} (adjacent parameters)")]
    AdjacentParameters { schema: String },

    /// The compiled matcher would exceed the pattern size limit.
    #[error("Schema too large to compile ({len} bytes)")]
    TooLarge { len: usize },
}

/// Errors raised by the route registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// The route name is already registered, under any method.
    #[error("Route name already in use: '{0}'")]
    DuplicateRouteName(String),

    /// Building the route failed before it could be registered.
    #[error(transparent)]
    MalformedSchema(#[from] SchemaError),
}

/// Unknown HTTP method name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown HTTP method: '{0}'")]
pub struct ParseMethodError(pub String);
