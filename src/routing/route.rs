//! Compiled routes.
//!
//! # Responsibilities
//! - Bind a method, a schema and a name into an immutable `Route`
//! - Test a requested path against the schema
//! - Extract placeholder values in schema order
//!
//! # Design Decisions
//! - Construction fails atomically on a malformed schema
//! - Exact literal paths are matched without running the pattern
//! - The method passed to `matches` is not checked here; the router filters
//!   by method before asking a route

use indexmap::IndexMap;
use regex::Regex;

use crate::routing::error::SchemaError;
use crate::routing::method::Method;
use crate::routing::schema;

/// Placeholder values keyed by name, in schema order.
pub type Parameters = IndexMap<String, String>;

/// An immutable, compiled route.
#[derive(Debug, Clone)]
pub struct Route {
    method: Method,
    schema: String,
    parameter_names: Vec<String>,
    matcher: Regex,
    name: String,
}

impl Route {
    /// Compile a route from its method, schema and name.
    ///
    /// Fails with `SchemaError` when markers are unbalanced or nested, when a
    /// placeholder name is not an identifier, or when two placeholders touch.
    pub fn new(
        method: Method,
        schema: impl AsRef<str>,
        name: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let compiled = schema::compile(schema.as_ref())?;

        Ok(Self {
            method,
            schema: compiled.canonical,
            parameter_names: compiled.parameter_names,
            matcher: compiled.matcher,
            name: name.into(),
        })
    }

    /// Match `requested_path` against this route.
    ///
    /// Returns the extracted parameters (empty for literal routes), or `None`
    /// when the path does not match. `_method` is informational.
    pub fn matches(&self, _method: Method, requested_path: &str) -> Option<Parameters> {
        if self.schema == requested_path {
            return Some(Parameters::new());
        }

        let captures = self.matcher.captures(requested_path)?;
        let values = captures
            .iter()
            .skip(1)
            .map(|m| m.map(|m| m.as_str().to_string()));

        let mut parameters = Parameters::with_capacity(self.parameter_names.len());
        for (name, value) in self.parameter_names.iter().zip(values) {
            parameters.insert(name.clone(), value?);
        }

        Some(parameters)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Canonical schema, trailing slashes removed.
    ///
    /// A schema made only of slashes is kept as `/` rather than emptied.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(schema: &str) -> Route {
        Route::new(Method::Get, schema, "test").unwrap()
    }

    #[test]
    fn test_literal_route_matches_only_itself() {
        let route = route("/exact-url");
        assert_eq!(route.matches(Method::Get, "/exact-url"), Some(Parameters::new()));
        assert_eq!(route.matches(Method::Get, "/exact-url/"), None);
        assert_eq!(route.matches(Method::Get, "/exact-url/more"), None);
        assert_eq!(route.matches(Method::Get, "/prefix/exact-url"), None);
        assert_eq!(route.matches(Method::Get, "/another-url"), None);
    }

    #[test]
    fn test_trailing_slash_removed_from_schema() {
        assert_eq!(route("/foo/bar/").schema(), "/foo/bar");
        assert_eq!(route("/foo//bar").schema(), "/foo//bar");
    }

    #[test]
    fn test_trailing_slash_schema_matches_stripped_path() {
        let route = route("/users/{id}/");
        let params = route.matches(Method::Get, "/users/7").unwrap();
        assert_eq!(params["id"], "7");
    }

    #[test]
    fn test_parameters_extracted_in_schema_order() {
        let route = route("/{article}/{section}/page-{page}");
        let params = route
            .matches(Method::Get, "/TDD-for-dummies/comments/page-2")
            .unwrap();

        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("article", "TDD-for-dummies"), ("section", "comments"), ("page", "2")]
        );
    }

    #[test]
    fn test_wildcard_and_leading_parameter() {
        let wildcard = route("/{wildcard}");
        assert!(wildcard.matches(Method::Get, "/any-url").is_some());
        assert!(wildcard.matches(Method::Get, "/").is_none());

        let hiscores = route("/{map}-hiscores");
        let params = hiscores.matches(Method::Get, "/vq3-cj-hiscores").unwrap();
        assert_eq!(params["map"], "vq3-cj");
    }

    #[test]
    fn test_matcher_is_anchored() {
        let route = route("/items/{id}");
        assert!(route.matches(Method::Get, "/api/items/3").is_none());
        assert!(route.matches(Method::Get, "/items/").is_none());
    }

    #[test]
    fn test_literal_text_is_not_a_pattern() {
        let route = route("/file.{ext}");
        assert!(route.matches(Method::Get, "/file.txt").is_some());
        assert!(route.matches(Method::Get, "/fileXtxt").is_none());
    }

    #[test]
    fn test_duplicate_names_keep_first_position_last_value() {
        let route = route("/{id}/to/{other}/{id}");
        assert_eq!(route.parameter_names(), ["id", "other", "id"]);

        let params = route.matches(Method::Get, "/1/to/2/3").unwrap();
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("id", "3"), ("other", "2")]);
    }

    #[test]
    fn test_root_schema() {
        let root = route("/");
        assert_eq!(root.schema(), "/");
        assert!(root.matches(Method::Get, "/").is_some());
        assert!(root.matches(Method::Get, "/x").is_none());
    }

    #[test]
    fn test_malformed_delimitation_names_the_schema() {
        for schema in ["/id}", "/page-{page-number", "/{article-{comments}}"] {
            let err = Route::new(Method::Get, schema, "r").unwrap_err();
            assert_eq!(err.to_string(), format!("Malformed schema: {schema}"));
        }
    }

    #[test]
    fn test_invalid_parameter_names_are_reported() {
        let cases = [
            ("/{}", ""),
            ("/{ }", " "),
            ("/{-article}", "-article"),
            ("/{42}", "42"),
            ("/{2be-or-not-2be}", "2be-or-not-2be"),
            ("/{ foo}", " foo"),
            ("/{bar }", "bar "),
            ("/{first}/{$}", "$"),
        ];

        for (schema, name) in cases {
            let err = Route::new(Method::Get, schema, "r").unwrap_err();
            assert_eq!(err, SchemaError::InvalidParameterName { name: name.into() });
            assert_eq!(err.to_string(), format!("Invalid parameter name: '{name}'"));
        }
    }

    #[test]
    fn test_method_argument_is_informational() {
        let route = Route::new(Method::Post, "/submit", "submit").unwrap();
        assert!(route.matches(Method::Get, "/submit").is_some());
        assert_eq!(route.method(), Method::Post);
    }
}
