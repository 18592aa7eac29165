//! Path schema compilation.
//!
//! # Responsibilities
//! - Check placeholder delimitation (balanced, never nested)
//! - Canonicalize the schema (strip the trailing slash run)
//! - Extract and validate placeholder names
//! - Compile an anchored matcher that captures placeholder values
//!
//! # Design Decisions
//! - Placeholders are `{name}`; names follow `[a-zA-Z_][a-zA-Z0-9_-]*`
//! - Each placeholder captures one or more characters, greedily
//! - Consecutive placeholders need literal text between them, otherwise the
//!   split of a path between them would be arbitrary
//! - A schema made only of slashes keeps a single `/`

use regex::{Regex, RegexBuilder};

use crate::routing::error::SchemaError;

pub const PARAMETER_OPEN_MARKER: char = '{';
pub const PARAMETER_CLOSE_MARKER: char = '}';

const PARAMETER_CAPTURE: &str = "(.+)";

/// Base compiled-size budget for a matcher, same as the regex crate default.
const MATCHER_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Extra budget granted per pattern byte, so long literals still compile.
const MATCHER_BYTES_PER_PATTERN_BYTE: usize = 256;

/// Result of compiling a schema string.
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    pub canonical: String,
    pub parameter_names: Vec<String>,
    pub matcher: Regex,
}

/// Compile `schema` into its canonical form, placeholder names and matcher.
pub fn compile(schema: &str) -> Result<CompiledSchema, SchemaError> {
    if !is_well_delimited(schema) {
        return Err(SchemaError::Malformed {
            schema: schema.to_string(),
        });
    }

    let parameter_names = extract_parameter_names(schema);
    if let Some(name) = parameter_names.iter().find(|n| !is_valid_parameter_name(n)) {
        return Err(SchemaError::InvalidParameterName { name: name.clone() });
    }

    let adjacent = format!("{PARAMETER_CLOSE_MARKER}{PARAMETER_OPEN_MARKER}");
    if schema.contains(&adjacent) {
        return Err(SchemaError::AdjacentParameters {
            schema: schema.to_string(),
        });
    }

    let canonical = canonicalize(schema).to_string();
    let pattern = matcher_pattern(&canonical);
    let size_limit = MATCHER_SIZE_LIMIT
        .saturating_add(pattern.len().saturating_mul(MATCHER_BYTES_PER_PATTERN_BYTE));
    let matcher = RegexBuilder::new(&pattern)
        .size_limit(size_limit)
        .build()
        .map_err(|e| {
            tracing::debug!(len = schema.len(), error = %e, "Matcher compilation failed");
            SchemaError::TooLarge { len: schema.len() }
        })?;

    Ok(CompiledSchema {
        canonical,
        parameter_names,
        matcher,
    })
}

/// Returns true when every open marker is closed before the next one opens.
pub fn is_well_delimited(schema: &str) -> bool {
    let mut depth: i32 = 0;

    for c in schema.chars() {
        match c {
            PARAMETER_OPEN_MARKER => depth += 1,
            PARAMETER_CLOSE_MARKER => depth -= 1,
            _ => continue,
        }

        if !(0..=1).contains(&depth) {
            return false;
        }
    }

    depth == 0
}

/// Strip the trailing run of slashes, keeping a lone `/` for the root.
pub fn canonicalize(schema: &str) -> &str {
    let trimmed = schema.trim_end_matches('/');
    if trimmed.is_empty() && !schema.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Names found between markers, left to right, duplicates kept.
///
/// Expects a well-delimited schema.
pub fn extract_parameter_names(schema: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current: Option<String> = None;

    for c in schema.chars() {
        match c {
            PARAMETER_OPEN_MARKER => current = Some(String::new()),
            PARAMETER_CLOSE_MARKER => names.extend(current.take()),
            c => {
                if let Some(name) = current.as_mut() {
                    name.push(c);
                }
            }
        }
    }

    names
}

/// Identifier rule for placeholder names.
pub fn is_valid_parameter_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Anchored pattern for a canonical schema: literals escaped, placeholders captured.
fn matcher_pattern(canonical: &str) -> String {
    let mut pattern = String::with_capacity(canonical.len() + 2);
    let mut literal = String::new();
    let mut in_parameter = false;

    pattern.push('^');
    for c in canonical.chars() {
        match c {
            PARAMETER_OPEN_MARKER => {
                pattern.push_str(&regex::escape(&literal));
                literal.clear();
                in_parameter = true;
            }
            PARAMETER_CLOSE_MARKER => {
                pattern.push_str(PARAMETER_CAPTURE);
                in_parameter = false;
            }
            _ if in_parameter => {}
            c => literal.push(c),
        }
    }
    pattern.push_str(&regex::escape(&literal));
    pattern.push('$');

    pattern
}
