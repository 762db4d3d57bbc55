//! Config-declared route registration tests.

use std::sync::Arc;

use trellis::config::{validate_config, EngineConfig};
use trellis::routing::{decl, DeclError};
use trellis::{Dispatcher, Response, RouteTable, SecurityContext, Verb};

mod common;

const DECLARATIONS: &str = r#"
[observability]
log_level = "debug"

[[routes]]
verb = "POST_SECURE"
path = ["param", "set"]
handler = "set-param"

[[routes]]
verb = "ANY"
path = ["usps", "validate", "?zip"]
handler = "echo"
"#;

fn parse(toml: &str) -> EngineConfig {
    let config: EngineConfig = toml::from_str(toml).unwrap();
    validate_config(&config).unwrap();
    config
}

#[tokio::test]
async fn test_declared_routes_dispatch() {
    let config = parse(DECLARATIONS);
    let env = Arc::new(common::Environment::default());

    let set_param = common::set_param_handler(env.clone());
    let echo = common::echo_handler();

    let table = Arc::new(RouteTable::new());
    let ids = decl::register_declared(&table, &config.routes, |name| match name {
        "set-param" => Some(set_param.clone()),
        "echo" => Some(echo.clone()),
        _ => None,
    })
    .unwrap();
    assert_eq!(ids.len(), 2);
    assert!(table.is_defined("param"));
    assert!(table.is_defined("usps"));
    assert!(!table.is_defined("mongo"));

    let dispatcher = Dispatcher::new(table);

    // The secure declaration carries its tier through registration.
    let response = dispatcher
        .dispatch(
            Verb::Post,
            "/param/set",
            &SecurityContext::Anonymous,
            &[("name".to_string(), "x".to_string())],
        )
        .await;
    assert_eq!(response, Response::Forbidden);

    // The ANY declaration answers every verb.
    for verb in [Verb::Get, Verb::Post, Verb::Delete] {
        let response = dispatcher
            .dispatch(
                verb,
                "/usps/validate/12345",
                &SecurityContext::Anonymous,
                &[],
            )
            .await;
        assert_eq!(
            response,
            Response::Fields(vec![("zip".into(), "12345".into())])
        );
    }
}

#[tokio::test]
async fn test_unknown_handler_name_aborts_registration() {
    let config = parse(DECLARATIONS);
    let table = RouteTable::new();

    let echo = common::echo_handler();
    let result = decl::register_declared(&table, &config.routes, |name| match name {
        "echo" => Some(echo.clone()),
        _ => None,
    });
    assert!(matches!(result, Err(DeclError::UnknownHandler(_))));
}

#[test]
fn test_validation_rejects_bad_declarations() {
    let config: EngineConfig = toml::from_str(
        r#"
        [[routes]]
        verb = "GET"
        path = ["?opt", "set"]
        handler = "h"
        "#,
    )
    .unwrap();
    assert!(validate_config(&config).is_err());
}
