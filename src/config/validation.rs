//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Compile every schema so malformed ones are caught before use
//! - Detect duplicate route names across methods
//! - Reject empty names and handler targets
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{Route, SchemaError};

/// A single semantic problem in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index}: name is empty")]
    EmptyName { index: usize },

    #[error("route '{name}': handler is empty")]
    EmptyHandler { name: String },

    #[error("route '{name}': {source}")]
    Schema { name: String, source: SchemaError },

    #[error("Route name already in use: '{0}'")]
    DuplicateName(String),
}

/// Check a route table, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }

        if route.handler.trim().is_empty() {
            errors.push(ValidationError::EmptyHandler {
                name: route.name.clone(),
            });
        }

        if let Err(source) = Route::new(route.method, &route.schema, route.name.as_str()) {
            errors.push(ValidationError::Schema {
                name: route.name.clone(),
                source,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
