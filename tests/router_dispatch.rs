//! End-to-end dispatch tests: build routes, register, match.

use path_router::{Method, Route, Router, RouterError, SchemaError};

mod common;

#[test]
fn test_no_route_no_match() {
    let router: Router<fn() -> &'static str> = Router::new();
    for method in Method::ALL {
        assert!(router.match_route(method, "/any-url").is_none());
    }
}

#[test]
fn test_exact_url_match() {
    for method in Method::ALL {
        let mut router = Router::new();
        let route = common::route(method, "/exact-url");
        let schema = route.schema().to_string();
        router.register(route, common::noop()).unwrap();

        assert!(router.match_route(method, &schema).is_some());
        assert!(router.match_route(method, "/another-url").is_none());
    }
}

#[test]
fn test_several_routes_correct_one() {
    let mut router = Router::new();
    router
        .register(Route::new(Method::Get, "/first", "wrong n°1").unwrap(), common::noop())
        .unwrap();
    router
        .register(Route::new(Method::Get, "/second", "correct").unwrap(), common::noop())
        .unwrap();
    router
        .register(Route::new(Method::Get, "/third", "wrong n°2").unwrap(), common::noop())
        .unwrap();

    let matched = router.match_route(Method::Get, "/second").unwrap();
    assert_eq!(matched.name(), "correct");
}

#[test]
fn test_correct_url_wrong_method() {
    for (method, wrong) in common::wrong_methods() {
        let mut router = Router::new();
        router.register(common::route(method, "/correct-url"), ()).unwrap();

        assert!(
            router.match_route(wrong, "/correct-url").is_none(),
            "{wrong} matched a {method} route"
        );
    }
}

#[test]
fn test_duplicate_route_name() {
    for method in Method::ALL {
        let mut router = Router::new();
        router
            .register(Route::new(method, "/foo", "unique").unwrap(), ())
            .unwrap();

        let err = router
            .register(Route::new(method, "/bar", "unique").unwrap(), ())
            .unwrap_err();
        assert_eq!(err, RouterError::DuplicateRouteName("unique".into()));
        assert_eq!(err.to_string(), "Route name already in use: 'unique'");
    }
}

#[test]
fn test_wildcard_matches_any_url() {
    for method in Method::ALL {
        let mut router = Router::new();
        router.register(common::route(method, "/{wildcard}"), ()).unwrap();

        let matched = router.match_route(method, "/any-url").unwrap();
        assert_eq!(matched.parameter("wildcard"), Some("any-url"));
    }
}

#[test]
fn test_parameters_extracted() {
    let mut router = Router::new();
    router
        .register(
            common::route(Method::Get, "/{article}/{section}/page-{page}"),
            "show_article",
        )
        .unwrap();

    let matched = router
        .match_route(Method::Get, "/TDD-for-dummies/comments/page-2")
        .unwrap();

    let parameters: Vec<(&str, &str)> = matched
        .parameters()
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(
        parameters,
        vec![
            ("article", "TDD-for-dummies"),
            ("section", "comments"),
            ("page", "2"),
        ]
    );
    assert_eq!(*matched.handler(), "show_article");
}

#[test]
fn test_malformed_schemas_rejected() {
    let cases = [
        ("missing opening marker", "/id}"),
        ("missing closing marker", "/page-{page-number"),
        ("nested parameters", "/{article-{comments}}"),
    ];

    for (case, schema) in cases {
        let err = Route::new(Method::Get, schema, "r").unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { .. }), "{case}");
        assert!(err.to_string().contains(schema), "{case}");
    }
}

#[test]
fn test_bound_callback_returned() {
    fn bound() -> bool {
        true
    }

    let mut router: Router<fn() -> bool> = Router::new();
    router.register(common::route(Method::Patch, "/url"), bound).unwrap();

    let matched = router.match_route(Method::Patch, "/url").unwrap();
    assert!((matched.handler())());
}

#[test]
fn test_registration_order_beats_specificity() {
    let mut router = Router::new();
    router.add(Method::Get, "/users/{id}", "by-id", "generic").unwrap();
    router.add(Method::Get, "/users/me", "me", "specific").unwrap();

    let matched = router.match_route(Method::Get, "/users/me").unwrap();
    assert_eq!(matched.name(), "by-id");
}
